//! In-memory per-chat settings store.

use dashmap::DashMap;

use crate::domain::settings::{ChatId, Threshold, UserSettings};

/// Per-chat [`UserSettings`], created lazily on first access.
///
/// Entries live in a sharded map: chats in different shards never contend,
/// and every read-modify-write of one chat happens under its shard's write
/// lock, so concurrent updates to the same chat are serialized.
#[derive(Debug)]
pub struct SettingsStore {
    entries: DashMap<ChatId, UserSettings>,
    default_threshold: Threshold,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_threshold(Threshold::default())
    }

    /// Store whose new entries start at `threshold` instead of 100 ETH.
    #[must_use]
    pub fn with_default_threshold(threshold: Threshold) -> Self {
        Self {
            entries: DashMap::new(),
            default_threshold: threshold,
        }
    }

    /// Current settings for `chat_id`, creating the default entry if absent.
    #[must_use]
    pub fn get(&self, chat_id: ChatId) -> UserSettings {
        self.entries
            .entry(chat_id)
            .or_insert_with(|| self.fresh(chat_id))
            .clone()
    }

    /// Apply `mutator` to the settings of `chat_id` and keep the result.
    ///
    /// Returns the mutator's output together with the settings as stored
    /// after the update.
    pub fn update<R>(
        &self,
        chat_id: ChatId,
        mutator: impl FnOnce(&mut UserSettings) -> R,
    ) -> (R, UserSettings) {
        let mut entry = self
            .entries
            .entry(chat_id)
            .or_insert_with(|| self.fresh(chat_id));
        let outcome = mutator(entry.value_mut());
        (outcome, entry.value().clone())
    }

    /// Number of chats seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of chats whose alerts are not paused.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.value().is_paused())
            .count()
    }

    fn fresh(&self, chat_id: ChatId) -> UserSettings {
        UserSettings::with_threshold(chat_id, self.default_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chain::ChainId;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn get_creates_default_entry_once() {
        let store = SettingsStore::new();
        let first = store.get(ChatId(42));
        let second = store.get(ChatId(42));

        assert_eq!(first, second);
        assert_eq!(first.threshold().value(), dec!(100));
        assert!(!first.is_paused());
        assert_eq!(first.chains_label(), "ETH");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn custom_default_threshold_applies_to_new_entries() {
        let store = SettingsStore::with_default_threshold(Threshold::new(dec!(500)).unwrap());
        assert_eq!(store.get(ChatId(1)).threshold().value(), dec!(500));
    }

    #[test]
    fn update_persists_and_returns_outcome() {
        let store = SettingsStore::new();
        let threshold = Threshold::new(dec!(1000)).unwrap();

        let (outcome, after) = store.update(ChatId(3), |settings| {
            settings.set_threshold(threshold);
            "done"
        });

        assert_eq!(outcome, "done");
        assert_eq!(after.threshold(), threshold);
        assert_eq!(store.get(ChatId(3)).threshold(), threshold);
    }

    #[test]
    fn repeated_identical_updates_are_idempotent() {
        let store = SettingsStore::new();
        let threshold = Threshold::new(dec!(50)).unwrap();

        let (_, once) = store.update(ChatId(9), |s| s.set_threshold(threshold));
        let (_, twice) = store.update(ChatId(9), |s| s.set_threshold(threshold));

        assert_eq!(once, twice);
    }

    #[test]
    fn chats_are_isolated() {
        let store = SettingsStore::new();
        store.update(ChatId(1), |s| s.set_paused(true));

        assert!(store.get(ChatId(1)).is_paused());
        assert!(!store.get(ChatId(2)).is_paused());
        assert_eq!(store.active_count(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_updates_to_one_chat_are_not_lost() {
        let store = Arc::new(SettingsStore::new());
        let chains = [ChainId::Bsc, ChainId::Arb, ChainId::Matic, ChainId::Sol];

        let handles: Vec<_> = chains
            .into_iter()
            .map(|chain| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.update(ChatId(5), |s| {
                            if !s.has_chain(chain) {
                                s.toggle_chain(chain).unwrap();
                            }
                        });
                        std::thread::yield_now();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get(ChatId(5)).chains().len(), 5);
    }
}
