pub mod audit;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod note;
pub mod plan;
pub mod read;
pub mod sync;
pub mod today;
