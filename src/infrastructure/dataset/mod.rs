//! Dataset loading infrastructure

mod csv_source;

pub use csv_source::{frame_to_dataset, CsvDatasetSource};
