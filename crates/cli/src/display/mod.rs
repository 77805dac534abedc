pub mod formatter;

pub use formatter::{format_class_doc, print_warnings};
