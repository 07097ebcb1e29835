//! CLI command handlers. Each command is in its own file.

mod download;
mod download_all;
mod download_tagged;
mod lookup;
mod tag;

pub use download::run_download;
pub use download_all::run_download_all;
pub use download_tagged::run_download_tagged;
pub use lookup::run_lookup;
pub use tag::run_tag;
