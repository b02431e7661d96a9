pub mod history;
pub mod log;
pub mod resampler;
pub mod store;
pub mod types;
