pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::RunConfig;
pub use crate::core::{engine::ReconEngine, pipeline::ReconcilePipeline, reconcile::reconcile};
pub use crate::domain::model::{ChangeBucket, ChangeReport, RawTable, Thresholds};
pub use crate::utils::error::{DriftError, Result};
