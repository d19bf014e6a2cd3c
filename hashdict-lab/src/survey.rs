//! Hash-quality survey across methods and probing modes
//!
//! Every configuration builds its own tables from the same generated data, so the
//! configurations run in parallel without sharing any table.

use crate::error::LabError;
use crate::keygen::KeyGenerator;
use crate::report::{ChainReport, ClusterReport};
use hashdict_core::{ChainingTable, HashMethod, ProbingMode, ProbingTable, TableError};
use log::{debug, info};
use rayon::prelude::*;

/// Survey parameters
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Number of generated key/value pairs
    pub entries: usize,
    /// Buckets (chaining) and slots (probing) per table
    pub capacity: usize,
    /// Seed for key generation
    pub seed: u64,
    pub methods: Vec<HashMethod>,
    pub modes: Vec<ProbingMode>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        SurveyConfig {
            entries: 2_500,
            capacity: 10_000,
            seed: 12345,
            methods: HashMethod::ALL.to_vec(),
            modes: ProbingMode::ALL.to_vec(),
        }
    }
}

impl SurveyConfig {
    pub fn validate(&self) -> Result<(), LabError> {
        if self.capacity == 0 {
            return Err(TableError::InvalidCapacity(0).into());
        }
        if self.methods.is_empty() {
            return Err(LabError::Config("no hash methods selected".into()));
        }
        Ok(())
    }
}

/// Everything a survey measured
#[derive(Debug, Clone)]
pub struct SurveyResults {
    pub chains: Vec<ChainReport>,
    pub clusters: Vec<ClusterReport>,
}

/// Survey runner holding the generated data
pub struct Survey {
    config: SurveyConfig,
    keys: Vec<String>,
    values: Vec<String>,
}

impl Survey {
    /// Validate the configuration and generate the data set
    pub fn new(config: SurveyConfig) -> Result<Self, LabError> {
        config.validate()?;
        let (keys, values) = KeyGenerator::new(config.seed).generate(config.entries);
        info!(
            "generated {} entries with seed {} for capacity {}",
            keys.len(),
            config.seed,
            config.capacity
        );
        Ok(Survey { config, keys, values })
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    fn pairs(&self) -> impl Iterator<Item = (&String, &String)> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Fill a chaining table with `method`, counting rejected adds
    pub fn chain_report(&self, method: HashMethod) -> Result<ChainReport, LabError> {
        let mut table = ChainingTable::new(self.config.capacity, method)?;
        let mut rejected = 0;
        for (k, v) in self.pairs() {
            match table.add(k.clone(), v.clone()) {
                Ok(()) => {}
                Err(TableError::DuplicateKey) => rejected += 1,
                Err(e) => return Err(e.into()),
            }
        }
        debug!("chaining/{}: {} stored, {} rejected", method, table.len(), rejected);
        Ok(ChainReport::from_table(method, &table, rejected))
    }

    /// Fill a probing table with `mode` and `method`, counting rejected adds
    ///
    /// Duplicates, a full table and exhausted probe sequences are all rejections;
    /// the survey measures what fits.
    pub fn cluster_report(
        &self,
        mode: ProbingMode,
        method: HashMethod,
    ) -> Result<ClusterReport, LabError> {
        let mut table = ProbingTable::new(self.config.capacity, mode, method, None)?;
        let mut rejected = 0;
        for (k, v) in self.pairs() {
            match table.add(k.clone(), v.clone()) {
                Ok(()) => {}
                Err(
                    TableError::DuplicateKey
                    | TableError::TableFull { .. }
                    | TableError::ProbeExhausted { .. },
                ) => rejected += 1,
                Err(e) => return Err(e.into()),
            }
        }
        debug!(
            "{}/{}: {} stored, {} rejected",
            mode,
            method,
            table.len(),
            rejected
        );
        Ok(ClusterReport::from_table(method, &table, rejected))
    }

    /// Run every configured method and mode in parallel
    pub fn run(&self) -> Result<SurveyResults, LabError> {
        let chains = self
            .config
            .methods
            .par_iter()
            .map(|&method| self.chain_report(method))
            .collect::<Result<Vec<_>, _>>()?;

        let combos: Vec<(ProbingMode, HashMethod)> = self
            .config
            .modes
            .iter()
            .flat_map(|&mode| self.config.methods.iter().map(move |&method| (mode, method)))
            .collect();
        let clusters = combos
            .par_iter()
            .map(|&(mode, method)| self.cluster_report(mode, method))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "survey complete: {} chaining and {} probing configurations",
            chains.len(),
            clusters.len()
        );
        Ok(SurveyResults { chains, clusters })
    }
}
