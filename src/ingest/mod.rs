/// Data ingestion for the weather archive service.
///
/// Submodules:
/// - `files` — reads delimited observation files from the archive directory.

pub mod files;
