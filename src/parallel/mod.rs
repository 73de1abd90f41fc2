pub mod batch;
pub mod pool;

pub use batch::{rate_matches, rate_matches_sequential};
pub use pool::WorkerPool;
