// Cache module.
// In-memory response cache for the GitHub client, plus on-disk preference storage.

pub mod disk;
pub mod key;
pub mod paths;
pub mod store;

pub use key::CacheKey;
pub use store::{CachedPayload, ResponseCache};
