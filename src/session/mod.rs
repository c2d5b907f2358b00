#[cfg(test)]
mod session_tests;

use crate::{
    catalog::TermCatalog,
    core::{CategoryFilter, TermRecord},
};

/// Fetch directives a transition hands back to the caller: resolve the card
/// now on screen, warm the cache for the one after it. The caller checks
/// these against the definition store before issuing provider calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchPlan {
    pub resolve: Option<TermRecord>,
    pub prefetch: Option<TermRecord>,
}

impl FetchPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.resolve.is_none() && self.prefetch.is_none()
    }
}

/// The study state machine: category filter, position in the filtered view,
/// flip state, and the self-reported tally. Owns no I/O and knows nothing
/// about rendering; transitions mutate the state and return a [`FetchPlan`].
///
/// Invariant: `current_index` is in bounds whenever the view is non-empty,
/// and any transition that moves it also turns the card face-down.
pub struct StudySession {
    catalog: TermCatalog,
    view: Vec<TermRecord>,
    filter: CategoryFilter,
    current_index: usize,
    flipped: bool,
    score: u32,
    attempts: u32,
}

impl StudySession {
    pub fn new(catalog: TermCatalog) -> Self {
        let filter = CategoryFilter::All;
        let view = catalog.view(filter);
        Self { catalog, view, filter, current_index: 0, flipped: false, score: 0, attempts: 0 }
    }

    /// Directives for the card shown before any transition has run.
    pub fn initial_plan(&self) -> FetchPlan {
        self.display_plan()
    }

    /// Switch the deck filter. Re-applying the current filter is a no-op;
    /// a real switch rewinds to the first card, face-down.
    pub fn select_category(&mut self, filter: CategoryFilter) -> FetchPlan {
        if filter == self.filter {
            return FetchPlan::empty();
        }

        self.filter = filter;
        self.view = self.catalog.view(filter);
        self.current_index = 0;
        self.flipped = false;
        self.display_plan()
    }

    /// Toggle the card face. Revealing the back needs the definition, so
    /// flipping up re-issues the display directives.
    pub fn flip(&mut self) -> FetchPlan {
        if self.view.is_empty() {
            return FetchPlan::empty();
        }

        self.flipped = !self.flipped;
        if self.flipped {
            self.display_plan()
        } else {
            FetchPlan::empty()
        }
    }

    /// Advance to the next card in the view. No-op at the last card.
    pub fn next(&mut self) -> FetchPlan {
        if !self.can_next() {
            return FetchPlan::empty();
        }

        self.flipped = false;
        self.current_index += 1;
        self.display_plan()
    }

    /// Step back to the previous card. No-op at the first card.
    pub fn prev(&mut self) -> FetchPlan {
        if !self.can_prev() {
            return FetchPlan::empty();
        }

        self.flipped = false;
        self.current_index -= 1;
        self.display_plan()
    }

    /// Self-reported "knew it": counts toward the score, then advances.
    pub fn mark_correct(&mut self) -> FetchPlan {
        if self.view.is_empty() {
            return FetchPlan::empty();
        }

        self.score += 1;
        self.attempts += 1;
        self.next()
    }

    /// Self-reported "needs study": counts an attempt only, then advances.
    pub fn mark_incorrect(&mut self) -> FetchPlan {
        if self.view.is_empty() {
            return FetchPlan::empty();
        }

        self.attempts += 1;
        self.next()
    }

    /// Start the session over on the current filter.
    pub fn reset(&mut self) -> FetchPlan {
        self.score = 0;
        self.attempts = 0;
        self.current_index = 0;
        self.flipped = false;
        self.display_plan()
    }

    pub fn current_card(&self) -> Option<TermRecord> {
        self.view.get(self.current_index).copied()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn card_count(&self) -> usize {
        self.view.len()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn can_next(&self) -> bool {
        self.current_index + 1 < self.view.len()
    }

    pub fn can_prev(&self) -> bool {
        self.current_index > 0
    }

    /// Fraction of attempted cards the user knew. Zero until something has
    /// been marked; the denominator is the tracked attempt count.
    pub fn accuracy(&self) -> f32 {
        if self.attempts == 0 {
            0.0
        } else {
            self.score as f32 / self.attempts as f32
        }
    }

    fn display_plan(&self) -> FetchPlan {
        FetchPlan {
            resolve: self.current_card(),
            prefetch: self.view.get(self.current_index + 1).copied(),
        }
    }
}
