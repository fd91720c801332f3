pub mod log;
pub mod migrate;
pub mod recorder;

pub use recorder::Recorder;
