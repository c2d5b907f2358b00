#[cfg(test)]
mod store_tests;

use std::collections::{HashMap, HashSet};

use crate::core::FetchStatus;

/// Shown in place of a definition when the provider call failed. Never
/// cached, so re-flipping the card retries.
pub const FALLBACK_TEXT: &str = "Unable to load definition at this time. Please try again.";

/// Cached when the provider answered successfully but with an empty body.
pub const EMPTY_RESPONSE_TEXT: &str = "Definition currently unavailable. Please check back later.";

/// Session-scoped definition state: resolved text keyed by term id, the set
/// of ids with an outstanding provider call, and the set whose latest call
/// failed. Pure bookkeeping; the actual I/O lives in the task manager.
///
/// Entries are write-once and never evicted — the deck is small and finite.
/// A degraded id renders [`FALLBACK_TEXT`] but stays uncached, so the next
/// resolve attempt goes back to the provider.
#[derive(Default)]
pub struct DefinitionStore {
    cache: HashMap<&'static str, String>,
    in_flight: HashSet<&'static str>,
    degraded: HashSet<&'static str>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a provider call is needed for `id`, and if so claim it.
    /// Returns false when the definition is already cached or a call is
    /// already in flight — concurrent resolves coalesce onto that call.
    pub fn begin_fetch(&mut self, id: &'static str) -> bool {
        if self.cache.contains_key(id) || self.in_flight.contains(id) {
            return false;
        }
        self.in_flight.insert(id);
        true
    }

    /// Record the outcome of a provider call. Success caches the text (first
    /// writer wins; an id is never re-written with different content) and
    /// clears any degraded mark. Failure leaves the cache untouched and marks
    /// the id degraded.
    pub fn complete_fetch(&mut self, id: &'static str, result: Result<String, String>) {
        self.in_flight.remove(id);

        match result {
            Ok(text) => {
                let text = text.trim();
                let text = if text.is_empty() { EMPTY_RESPONSE_TEXT } else { text };
                self.cache.entry(id).or_insert_with(|| text.to_string());
                self.degraded.remove(id);
            }
            Err(error) => {
                log::warn!("definition fetch for '{}' failed: {}", id, error);
                self.degraded.insert(id);
            }
        }
    }

    /// The resolved definition, if the provider has answered successfully.
    pub fn definition(&self, id: &str) -> Option<&str> {
        self.cache.get(id).map(String::as_str)
    }

    /// What the card back should show: the cached definition, or the fixed
    /// fallback after a failed fetch. None while nothing has resolved yet.
    pub fn display_text(&self, id: &str) -> Option<&str> {
        match self.definition(id) {
            Some(text) => Some(text),
            None if self.degraded.contains(id) => Some(FALLBACK_TEXT),
            None => None,
        }
    }

    /// Resolution state for one card. Degraded ids report Success — the
    /// failure was already softened to fallback text, not surfaced.
    pub fn fetch_status(&self, id: &str) -> FetchStatus {
        if self.cache.contains_key(id) || self.degraded.contains(id) {
            FetchStatus::Success
        } else if self.in_flight.contains(id) {
            FetchStatus::Loading
        } else {
            FetchStatus::Idle
        }
    }

    pub fn is_cached(&self, id: &str) -> bool {
        self.cache.contains_key(id)
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }

    pub fn is_degraded(&self, id: &str) -> bool {
        self.degraded.contains(id)
    }

    pub fn has_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }
}
