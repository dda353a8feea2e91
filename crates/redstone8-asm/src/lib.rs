pub mod output;
pub mod source;

// Re-export commonly used helpers for the binary
pub use output::{render, OutputFormat};
pub use source::{load_config, load_source, write_output};
