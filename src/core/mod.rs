pub mod classify;
pub mod compare;
pub mod engine;
pub mod format;
pub mod linker;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod similarity;

pub use crate::domain::model::{ChangeReport, InputPair};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
