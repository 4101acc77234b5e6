#![forbid(unsafe_code)]

//! Element ID generation.
//!
//! Fields without an explicit ID get one on first render, and keep it for
//! later renders.

use std::sync::atomic::{AtomicU64, Ordering};

/// Default prefix for generated IDs.
pub const DEFAULT_ID_PREFIX: &str = "id_";

/// Source of fresh element IDs.
pub trait IdGenerator: Send + Sync {
    /// Produce an ID not handed out before by this generator.
    fn next_id(&self) -> String;
}

/// Random IDs: prefix plus a v4 UUID in simple (undashed) form.
#[derive(Debug, Clone)]
pub struct UuidIds {
    prefix: String,
}

impl UuidIds {
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for UuidIds {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }
}

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        format!("{}{}", self.prefix, uuid::Uuid::new_v4().simple())
    }
}

/// Deterministic IDs: prefix plus a counter starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_are_prefixed_and_unique() {
        let ids = UuidIds::default();
        let seen: HashSet<String> = (0..64).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 64);
        for id in &seen {
            assert!(id.starts_with("id_"));
            assert_eq!(id.len(), 3 + 32);
            assert!(!id.contains('-'));
        }
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::with_prefix("f-");
        assert_eq!(ids.next_id(), "f-1");
        assert_eq!(ids.next_id(), "f-2");
    }
}
