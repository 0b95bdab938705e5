pub mod types;

pub use types::{LogLevel, OutputFormat, Settings};
