//! Export infrastructure

mod json_file;

pub use json_file::JsonFileExporter;
