use std::time::{Duration, Instant};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Duplicate-submission suppressor keyed by a composite identity string.
///
/// Each accepted submission records the acceptance time under its key; a
/// second submission with the same key inside the cooldown window is
/// rejected. Entries older than the window are pruned on every accepted
/// write, so the map stays bounded by recent traffic.
pub struct DedupCache {
    /// composite key -> time of last acceptance
    entries: DashMap<String, Instant>,
    window: Duration,
}

impl DedupCache {
    pub fn new(window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            window,
        }
    }

    /// Composite key for download requests: lower-cased email, category, and
    /// number of selected items.
    pub fn key(email: &str, category: &str, item_count: usize) -> String {
        format!("{}|{}|{}", email.to_lowercase(), category, item_count)
    }

    /// Check and record in one step. Returns Ok(()) on acceptance or
    /// Err with the remaining cooldown in seconds.
    ///
    /// `now` is passed in rather than sampled internally so tests control
    /// time. The entry lock makes check+record atomic per key.
    pub fn check_and_record(&self, key: String, now: Instant) -> Result<(), u64> {
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                let age = now.duration_since(*entry.get());
                if age < self.window {
                    let remaining = self.window.as_secs().saturating_sub(age.as_secs());
                    return Err(remaining);
                }
                entry.insert(now);
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
            }
        }

        self.prune(now);
        Ok(())
    }

    /// Drop every entry whose age has reached the cooldown window.
    pub fn prune(&self, now: Instant) {
        self.entries
            .retain(|_, accepted_at| now.duration_since(*accepted_at) < self.window);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(30);

    #[test]
    fn first_submission_is_accepted() {
        let cache = DedupCache::new(WINDOW);
        let now = Instant::now();
        assert!(cache.check_and_record("a@b.com|x|1".into(), now).is_ok());
    }

    #[test]
    fn repeat_within_window_is_rejected() {
        let cache = DedupCache::new(WINDOW);
        let now = Instant::now();
        cache.check_and_record("a@b.com|x|1".into(), now).unwrap();

        let err = cache
            .check_and_record("a@b.com|x|1".into(), now + Duration::from_secs(5))
            .unwrap_err();
        assert!(err <= 30);
    }

    #[test]
    fn repeat_after_window_is_accepted() {
        let cache = DedupCache::new(WINDOW);
        let now = Instant::now();
        cache.check_and_record("a@b.com|x|1".into(), now).unwrap();

        assert!(
            cache
                .check_and_record("a@b.com|x|1".into(), now + Duration::from_secs(31))
                .is_ok()
        );
    }

    #[test]
    fn distinct_keys_do_not_collide() {
        let cache = DedupCache::new(WINDOW);
        let now = Instant::now();
        cache.check_and_record("a@b.com|x|1".into(), now).unwrap();

        // Same email, different item count.
        assert!(cache.check_and_record("a@b.com|x|2".into(), now).is_ok());
        // Different category.
        assert!(cache.check_and_record("a@b.com|y|1".into(), now).is_ok());
    }

    #[test]
    fn key_lowercases_email() {
        assert_eq!(DedupCache::key("A@B.Com", "x", 2), "a@b.com|x|2");
    }

    #[test]
    fn stale_entries_are_pruned_on_write() {
        let cache = DedupCache::new(WINDOW);
        let now = Instant::now();
        cache.check_and_record("old|x|1".into(), now).unwrap();
        cache.check_and_record("old2|x|1".into(), now).unwrap();
        assert_eq!(cache.len(), 2);

        // A write past the window evicts both stale entries.
        cache
            .check_and_record("fresh|x|1".into(), now + Duration::from_secs(60))
            .unwrap();
        assert_eq!(cache.len(), 1);
    }
}
