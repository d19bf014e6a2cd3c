//! Hash-quality lab for hashdict tables
//!
//! Provides:
//! - Seeded key/value generation
//! - Chain-length and cluster-length surveys across hash methods and probing modes
//! - Console and CSV reports

pub mod error;
pub mod keygen;
pub mod report;
pub mod survey;

pub use error::LabError;
pub use keygen::KeyGenerator;
pub use report::{ChainReport, ClusterReport};
pub use survey::{Survey, SurveyConfig, SurveyResults};
