/// Read-mostly memoization of resolved entries
pub mod cache;
/// Alias chain walking with cycle and depth guards
pub mod resolver;

pub use cache::{CacheStats, ResolutionCache};
pub use resolver::{resolve, resolve_with_chain, resolve_with_depth};
