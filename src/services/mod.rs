pub mod database;
pub mod dataset;

pub use database::WeeklyStore;
pub use dataset::{assemble_dataset, build_dataset};
