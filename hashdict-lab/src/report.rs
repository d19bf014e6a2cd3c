//! Survey reports

use hashdict_core::{ChainingTable, HashMethod, ProbingMode, ProbingTable};
use std::fmt;
use std::io::Write;

/// Chain statistics for one hash method
#[derive(Debug, Clone)]
pub struct ChainReport {
    pub method: HashMethod,
    pub entries: usize,
    pub rejected: usize,
    pub fill_factor: f64,
    pub max_chain: Option<usize>,
    pub min_chain: Option<usize>,
    /// Non-empty chain lengths in bucket order
    pub chain_lengths: Vec<usize>,
}

impl ChainReport {
    pub fn from_table<K, V>(method: HashMethod, table: &ChainingTable<K, V>, rejected: usize) -> Self {
        ChainReport {
            method,
            entries: table.len(),
            rejected,
            fill_factor: table.fill_factor(),
            max_chain: table.max_chain_length(),
            min_chain: table.min_chain_length(),
            chain_lengths: table.chain_lengths().collect(),
        }
    }

    /// Mean length over non-empty chains
    pub fn mean_chain(&self) -> f64 {
        if self.chain_lengths.is_empty() {
            0.0
        } else {
            self.chain_lengths.iter().sum::<usize>() as f64 / self.chain_lengths.len() as f64
        }
    }

    /// Write `index;length` lines, one per non-empty chain
    pub fn write_csv<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for (index, length) in self.chain_lengths.iter().enumerate() {
            writeln!(out, "{};{}", index, length)?;
        }
        out.flush()
    }
}

impl fmt::Display for ChainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<usize>| v.map_or_else(|| "-".to_string(), |n| n.to_string());
        write!(
            f,
            "{:<15} entries={:<6} rejected={:<4} fill={:.3} chains={:<6} max={:<4} min={:<4} mean={:.2}",
            self.method.name(),
            self.entries,
            self.rejected,
            self.fill_factor,
            self.chain_lengths.len(),
            show(self.max_chain),
            show(self.min_chain),
            self.mean_chain()
        )
    }
}

/// Clustering statistics for one probing mode and hash method
#[derive(Debug, Clone)]
pub struct ClusterReport {
    pub mode: ProbingMode,
    pub method: HashMethod,
    pub entries: usize,
    pub rejected: usize,
    pub fill_factor: f64,
    pub max_cluster: usize,
}

impl ClusterReport {
    pub fn from_table<K, V>(
        method: HashMethod,
        table: &ProbingTable<K, V>,
        rejected: usize,
    ) -> Self {
        ClusterReport {
            mode: table.mode(),
            method,
            entries: table.len(),
            rejected,
            fill_factor: table.fill_factor(),
            max_cluster: table.max_cluster_length(),
        }
    }
}

impl fmt::Display for ClusterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<15} entries={:<6} rejected={:<4} fill={:.3} max_cluster={}",
            self.mode.name(),
            self.method.name(),
            self.entries,
            self.rejected,
            self.fill_factor,
            self.max_cluster
        )
    }
}
