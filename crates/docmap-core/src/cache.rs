use crate::Map;

use std::sync::Arc;
use std::time::Duration;

/// Stores built maps by class name.
///
/// Implementations must be safe to share between threads. A lookup may miss
/// even right after [`contains`](Cache::contains) returned `true` (an entry
/// can expire in between), so callers must handle `fetch` returning `None`.
pub trait Cache: Send + Sync + std::fmt::Debug {
    fn contains(&self, class: &str) -> bool;

    fn fetch(&self, class: &str) -> Option<Arc<Map>>;

    /// Stores `map`, replacing any previous entry. With a `ttl`, the entry
    /// expires after that duration.
    fn save(&self, class: &str, map: Arc<Map>, ttl: Option<Duration>);

    fn delete(&self, class: &str);
}
