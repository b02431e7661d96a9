pub mod manager;
pub mod normalizer;
pub mod stream;
