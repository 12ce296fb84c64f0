pub mod archive_client;
pub mod error;
pub mod payload;
pub mod retry;
