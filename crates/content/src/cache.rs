//! Process-lifetime cache over the loaded library.

use std::sync::Arc;

use errors::anyhow::Error;
use libs::tokio::sync::OnceCell;

use crate::library::Library;
use crate::loader::load_all;
use crate::source::ContentSource;

/// Caches the loaded library for the lifetime of the process.
///
/// The first `get` performs the full load; later calls return the memoized
/// snapshot. Concurrent first calls share one in-flight load instead of
/// loading twice.
#[derive(Default)]
pub struct ContentCache {
    library: OnceCell<Arc<Library>>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, source: &dyn ContentSource) -> Result<Arc<Library>, Error> {
        let library = self
            .library
            .get_or_try_init(|| async { load_all(source).await.map(Arc::new) })
            .await?;
        Ok(library.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawDocument;
    use linden_core::ContentKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        enumerations: AtomicUsize,
    }

    impl ContentSource for CountingSource {
        fn enumerate(&self, _kind: ContentKind) -> Result<Vec<RawDocument>, Error> {
            self.enumerations.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_get_loads_once() {
        let source = CountingSource {
            enumerations: AtomicUsize::new(0),
        };
        let cache = ContentCache::new();

        let first = cache.get(&source).await.unwrap();
        let second = cache.get(&source).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        // One enumeration per content kind, not per call.
        assert_eq!(source.enumerations.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_share_one_load() {
        let source = CountingSource {
            enumerations: AtomicUsize::new(0),
        };
        let cache = ContentCache::new();

        let (first, second) = libs::futures::join!(cache.get(&source), cache.get(&source));
        assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
        assert_eq!(source.enumerations.load(Ordering::SeqCst), 5);
    }
}
