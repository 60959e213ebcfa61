//! Blog handle registry.
//!
//! Articles reference their parent blog by an opaque id, but the catalog
//! stream carries no ordering guarantee: an article may arrive before its
//! parent blog, after it, or in a different run entirely. The registry
//! reconstructs the blog→handle mapping independently of arrival order by
//! accumulating `{id, handle}` pairs and persisting them through a durable
//! key-value store after every record.
//!
//! # Protocol
//!
//! ```text
//! Blog arrives    ──► record(id, handle) ──► persist()
//!                                              │ read stored list
//!                                              │ append accumulator
//!                                              └ write combined list
//!
//! Article arrives ──► lookup(blog_id) ──► scan stored list, first match
//! ```
//!
//! The stored list only grows within a run and outlives it; the next run's
//! first `persist` re-merges it. Duplicate entries are tolerated: a blog
//! recorded in run N and again in run N+1 appears twice, and `lookup`
//! returns the first match, which is unambiguous per id.
//!
//! # Ordering contract
//!
//! Resolution succeeds only if the parent blog was recorded and persisted
//! before the article's `lookup` — within this run or a previous one. The
//! registry cannot enforce that; it is a scheduling obligation on the
//! ingestion pipeline. A miss is non-fatal: it is counted, the caller logs
//! it, and the article is left without a route.

use crate::kv::KvStore;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Well-known store key for the persisted blog list.
pub const BLOG_HANDLES_KEY: &str = "blog-handles";

/// One known blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRef {
    pub id: String,
    pub handle: String,
}

/// Durable registry of blog handles, keyed by blog id.
///
/// Ingestion is sequential, but the accumulator is lock-guarded so a
/// parallel ingestion pipeline cannot race `record` against `persist`.
pub struct BlogRegistry<'a> {
    store: &'a dyn KvStore,
    pending: Mutex<Vec<BlogRef>>,
    misses: AtomicUsize,
}

impl<'a> BlogRegistry<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self {
            store,
            pending: Mutex::new(Vec::new()),
            misses: AtomicUsize::new(0),
        }
    }

    /// Append a blog to the in-process accumulator.
    ///
    /// Call [`persist`](Self::persist) afterwards to make the entry
    /// durable; `lookup` only ever reads the durable list.
    pub fn record(&self, id: &str, handle: &str) {
        self.pending.lock().push(BlogRef {
            id: id.to_owned(),
            handle: handle.to_owned(),
        });
    }

    /// Merge the accumulator into the durable list.
    ///
    /// Reads the stored list (absent means empty), appends every pending
    /// entry onto it and writes the combined list back under
    /// [`BLOG_HANDLES_KEY`].
    pub fn persist(&self) -> Result<()> {
        let mut combined = self.read_stored()?;
        {
            let pending = self.pending.lock();
            combined.extend(pending.iter().cloned());
        }
        let json =
            serde_json::to_string(&combined).context("Failed to serialize blog registry")?;
        self.store.set(BLOG_HANDLES_KEY, &json)?;
        Ok(())
    }

    /// Resolve a blog handle from the durable list.
    ///
    /// Returns `None` when the id is unknown or nothing has ever been
    /// persisted; the miss is counted either way.
    pub fn lookup(&self, id: &str) -> Result<Option<String>> {
        let stored = self.read_stored()?;
        let handle = stored.into_iter().find(|b| b.id == id).map(|b| b.handle);
        if handle.is_none() {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        Ok(handle)
    }

    /// Number of failed lookups so far.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    fn read_stored(&self) -> Result<Vec<BlogRef>> {
        match self.store.get(BLOG_HANDLES_KEY)? {
            Some(json) => {
                serde_json::from_str(&json).context("Corrupt blog registry in store")
            }
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    #[test]
    fn test_record_persist_lookup() {
        let kv = MemoryKv::new();
        let registry = BlogRegistry::new(&kv);

        registry.record("B1", "news");
        registry.persist().unwrap();

        assert_eq!(registry.lookup("B1").unwrap(), Some("news".to_owned()));
    }

    #[test]
    fn test_lookup_unrecorded_id() {
        let kv = MemoryKv::new();
        let registry = BlogRegistry::new(&kv);

        registry.record("B1", "news");
        registry.persist().unwrap();

        assert_eq!(registry.lookup("B9").unwrap(), None);
        assert_eq!(registry.misses(), 1);
    }

    #[test]
    fn test_lookup_before_any_persist_is_miss() {
        let kv = MemoryKv::new();
        let registry = BlogRegistry::new(&kv);

        // Nothing recorded, nothing stored: hard miss
        assert_eq!(registry.lookup("B1").unwrap(), None);
        assert_eq!(registry.misses(), 1);
    }

    #[test]
    fn test_record_without_persist_is_not_visible() {
        let kv = MemoryKv::new();
        let registry = BlogRegistry::new(&kv);

        registry.record("B1", "news");

        // lookup reads the durable list only
        assert_eq!(registry.lookup("B1").unwrap(), None);
    }

    #[test]
    fn test_persist_twice_keeps_lookup_unambiguous() {
        let kv = MemoryKv::new();
        let registry = BlogRegistry::new(&kv);

        registry.record("B1", "news");
        registry.persist().unwrap();
        registry.persist().unwrap();

        // The stored list may carry duplicates, but per-id resolution
        // stays single-valued.
        assert_eq!(registry.lookup("B1").unwrap(), Some("news".to_owned()));
    }

    #[test]
    fn test_registry_survives_across_instances() {
        let kv = MemoryKv::new();

        {
            let first_run = BlogRegistry::new(&kv);
            first_run.record("B1", "news");
            first_run.persist().unwrap();
        }

        // A later run sees the previous run's entries without recording
        let second_run = BlogRegistry::new(&kv);
        assert_eq!(second_run.lookup("B1").unwrap(), Some("news".to_owned()));
    }

    #[test]
    fn test_later_run_merges_with_stored_state() {
        let kv = MemoryKv::new();

        {
            let first_run = BlogRegistry::new(&kv);
            first_run.record("B1", "news");
            first_run.persist().unwrap();
        }

        let second_run = BlogRegistry::new(&kv);
        second_run.record("B2", "press");
        second_run.persist().unwrap();

        assert_eq!(second_run.lookup("B1").unwrap(), Some("news".to_owned()));
        assert_eq!(second_run.lookup("B2").unwrap(), Some("press".to_owned()));
    }

    #[test]
    fn test_incremental_accumulation() {
        let kv = MemoryKv::new();
        let registry = BlogRegistry::new(&kv);

        registry.record("B1", "news");
        registry.persist().unwrap();
        registry.record("B2", "press");
        registry.persist().unwrap();

        assert_eq!(registry.lookup("B1").unwrap(), Some("news".to_owned()));
        assert_eq!(registry.lookup("B2").unwrap(), Some("press".to_owned()));
        assert_eq!(registry.misses(), 0);
    }
}
