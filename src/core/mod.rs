pub mod audit;
pub mod export;
pub mod logger;
pub mod notebook;
pub mod plan;
pub mod sync;
pub mod today;
pub mod viewer;

pub use logger::Logger;
pub use notebook::Notebook;
