use clap::Parser;
use hashdict_lab::{LabError, Survey, SurveyConfig};
use log::info;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare hash methods and probing modes on generated keys", long_about = None)]
struct Args {
    /// number of generated key/value pairs
    #[clap(short, long, value_parser, default_value_t = 2_500)]
    entries: usize,

    /// buckets per chaining table and slots per probing table
    #[clap(short, long, value_parser, default_value_t = 10_000)]
    capacity: usize,

    /// seed for key generation
    #[clap(short, long, value_parser, default_value_t = 12345)]
    seed: u64,

    /// write `<method>.csv` chain-length files into this directory
    #[clap(long, value_parser)]
    csv_dir: Option<PathBuf>,

    /// log survey progress
    #[clap(short, long, value_parser)]
    verbose: bool,
}

fn main() -> Result<(), LabError> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = SurveyConfig {
        entries: args.entries,
        capacity: args.capacity,
        seed: args.seed,
        ..SurveyConfig::default()
    };
    let survey = Survey::new(config)?;
    let results = survey.run()?;

    println!("=== Separate chaining ({} buckets) ===", args.capacity);
    for report in &results.chains {
        println!("{}", report);
    }

    println!("\n=== Open addressing ({} slots) ===", args.capacity);
    for report in &results.clusters {
        println!("{}", report);
    }

    if let Some(dir) = args.csv_dir {
        fs::create_dir_all(&dir)?;
        for report in &results.chains {
            let path = dir.join(format!("{}.csv", report.method.name()));
            report.write_csv(BufWriter::new(File::create(&path)?))?;
            info!("wrote {}", path.display());
        }
    }

    Ok(())
}
