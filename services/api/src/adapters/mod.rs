pub mod file_store;
pub mod latency;

pub use file_store::FileSessionStore;
pub use latency::FixedLatency;
