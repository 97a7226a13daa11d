pub mod import;
pub mod reports;
pub mod scoring;
pub mod server;
