pub mod docs;
pub mod extract;
pub mod init;

pub use docs::docs_command;
pub use extract::extract_command;
pub use init::init_command;

use std::path::Path;

/// Directory the config file lookup starts from for a request file
fn config_search_start(request_path: &Path) -> &Path {
    request_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}
