#[cfg(test)]
mod tests {
    use crate::{
        catalog::TermCatalog,
        core::{Category, CategoryFilter, TermRecord},
        session::StudySession,
    };

    const CARDS: &[TermRecord] = &[
        TermRecord { id: "a", category: Category::Technology, term: "CRM" },
        TermRecord { id: "b", category: Category::LegalRegulatory, term: "TCPA" },
        TermRecord { id: "c", category: Category::Technology, term: "A/B Testing" },
        TermRecord { id: "d", category: Category::MetricsKpis, term: "ROI" },
    ];

    fn session() -> StudySession {
        StudySession::new(TermCatalog::new(CARDS))
    }

    #[test]
    fn starts_face_down_on_the_first_card_of_all() {
        let session = session();

        assert_eq!(session.filter(), CategoryFilter::All);
        assert_eq!(session.current_card().map(|c| c.id), Some("a"));
        assert!(!session.is_flipped());

        let plan = session.initial_plan();
        assert_eq!(plan.resolve.map(|c| c.id), Some("a"));
        assert_eq!(plan.prefetch.map(|c| c.id), Some("b"));
    }

    #[test]
    fn select_category_rewinds_and_filters() {
        let mut session = session();
        session.flip();
        session.next();

        let plan = session.select_category(CategoryFilter::Only(Category::Technology));

        assert_eq!(session.card_count(), 2);
        assert_eq!(session.current_card().map(|c| c.id), Some("a"));
        assert!(!session.is_flipped());
        assert_eq!(plan.resolve.map(|c| c.id), Some("a"));
        assert_eq!(plan.prefetch.map(|c| c.id), Some("c"));
    }

    #[test]
    fn reselecting_the_current_category_is_a_no_op() {
        let mut session = session();
        session.next();
        session.flip();

        let plan = session.select_category(CategoryFilter::All);

        assert!(plan.is_empty());
        assert_eq!(session.current_card().map(|c| c.id), Some("b"));
        assert!(session.is_flipped());
    }

    #[test]
    fn single_card_view_has_no_navigation() {
        let mut session = session();
        session.select_category(CategoryFilter::Only(Category::MetricsKpis));

        assert_eq!(session.card_count(), 1);
        assert!(session.next().is_empty());
        assert!(session.prev().is_empty());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn navigation_clamps_to_the_view() {
        let mut session = session();

        assert!(session.prev().is_empty());
        assert_eq!(session.current_index(), 0);

        session.next();
        session.next();
        session.next();
        assert_eq!(session.current_index(), 3);

        // Already at the last card.
        assert!(session.next().is_empty());
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn index_changes_force_face_down() {
        let mut session = session();

        session.flip();
        assert!(session.is_flipped());
        session.next();
        assert!(!session.is_flipped());

        session.flip();
        session.prev();
        assert!(!session.is_flipped());
    }

    #[test]
    fn flip_down_requests_nothing() {
        let mut session = session();

        let up = session.flip();
        assert_eq!(up.resolve.map(|c| c.id), Some("a"));

        let down = session.flip();
        assert!(down.is_empty());
    }

    #[test]
    fn mark_correct_scores_and_advances() {
        let mut session = session();
        session.flip();

        let plan = session.mark_correct();

        assert_eq!(session.score(), 1);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_flipped());
        assert_eq!(plan.resolve.map(|c| c.id), Some("b"));
    }

    #[test]
    fn mark_incorrect_advances_without_scoring() {
        let mut session = session();

        session.mark_incorrect();

        assert_eq!(session.score(), 0);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn marks_still_count_at_the_last_card() {
        let mut session = session();
        while session.can_next() {
            session.next();
        }

        session.mark_correct();
        assert_eq!(session.score(), 1);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.current_index(), 3);

        session.mark_incorrect();
        assert_eq!(session.score(), 1);
        assert_eq!(session.attempts(), 2);
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn reset_keeps_the_category() {
        let mut session = session();
        session.select_category(CategoryFilter::Only(Category::Technology));
        session.mark_correct();
        session.flip();

        session.reset();

        assert_eq!(session.score(), 0);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_flipped());
        assert_eq!(session.filter(), CategoryFilter::Only(Category::Technology));
    }

    #[test]
    fn accuracy_uses_the_tracked_attempt_count() {
        let mut session = session();
        assert_eq!(session.accuracy(), 0.0);

        session.mark_correct();
        session.mark_incorrect();
        session.mark_correct();

        assert_eq!(session.score(), 2);
        assert_eq!(session.attempts(), 3);
        assert!((session.accuracy() - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_view_is_inert() {
        let mut session = StudySession::new(TermCatalog::new(&[]));

        assert!(session.current_card().is_none());
        assert!(session.initial_plan().is_empty());
        assert!(session.flip().is_empty());
        assert!(session.next().is_empty());
        assert!(session.mark_correct().is_empty());
        assert_eq!(session.score(), 0);
    }
}
