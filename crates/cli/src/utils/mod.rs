pub mod file;

pub use file::{load_config, read_request};
