#[cfg(test)]
mod tests {
    use crate::{
        core::FetchStatus,
        definitions::{DefinitionStore, EMPTY_RESPONSE_TEXT, FALLBACK_TEXT},
    };

    #[test]
    fn begin_fetch_claims_an_uncached_id_once() {
        let mut store = DefinitionStore::new();

        assert!(store.begin_fetch("tcpa"));
        // Second resolve while the first call is in flight must coalesce.
        assert!(!store.begin_fetch("tcpa"));
        assert!(store.is_in_flight("tcpa"));
    }

    #[test]
    fn begin_fetch_declines_cached_ids() {
        let mut store = DefinitionStore::new();
        assert!(store.begin_fetch("tcpa"));
        store.complete_fetch("tcpa", Ok("Telephone Consumer Protection Act.".to_string()));

        assert!(!store.begin_fetch("tcpa"));
        assert_eq!(store.definition("tcpa"), Some("Telephone Consumer Protection Act."));
    }

    #[test]
    fn success_is_write_once() {
        let mut store = DefinitionStore::new();
        store.begin_fetch("roi");
        store.complete_fetch("roi", Ok("Return on investment.".to_string()));
        store.complete_fetch("roi", Ok("A different answer.".to_string()));

        assert_eq!(store.definition("roi"), Some("Return on investment."));
    }

    #[test]
    fn failure_degrades_without_caching() {
        let mut store = DefinitionStore::new();
        store.begin_fetch("cpl");
        store.complete_fetch("cpl", Err("HTTP 429".to_string()));

        assert!(store.definition("cpl").is_none());
        assert!(store.is_degraded("cpl"));
        assert_eq!(store.display_text("cpl"), Some(FALLBACK_TEXT));
        // Degraded content renders as a successful (if apologetic) card back.
        assert_eq!(store.fetch_status("cpl"), FetchStatus::Success);

        // The id is still a cache miss: the next resolve retries.
        assert!(store.begin_fetch("cpl"));
    }

    #[test]
    fn retry_after_failure_clears_the_degraded_mark() {
        let mut store = DefinitionStore::new();
        store.begin_fetch("cpl");
        store.complete_fetch("cpl", Err("timeout".to_string()));
        store.begin_fetch("cpl");
        store.complete_fetch("cpl", Ok("Cost per lead.".to_string()));

        assert!(!store.is_degraded("cpl"));
        assert_eq!(store.display_text("cpl"), Some("Cost per lead."));
    }

    #[test]
    fn blank_success_caches_the_unavailable_text() {
        let mut store = DefinitionStore::new();
        store.begin_fetch("crm");
        store.complete_fetch("crm", Ok("   ".to_string()));

        // A blank body was still a successful call, so it caches.
        assert_eq!(store.definition("crm"), Some(EMPTY_RESPONSE_TEXT));
        assert!(!store.begin_fetch("crm"));
    }

    #[test]
    fn completion_order_does_not_matter_across_ids() {
        let mut store = DefinitionStore::new();
        store.begin_fetch("a");
        store.begin_fetch("b");

        // "b" (the prefetch) lands before "a" (the visible card).
        store.complete_fetch("b", Ok("Definition B.".to_string()));
        store.complete_fetch("a", Ok("Definition A.".to_string()));

        assert_eq!(store.definition("a"), Some("Definition A."));
        assert_eq!(store.definition("b"), Some("Definition B."));
        assert!(!store.has_in_flight());
    }

    #[test]
    fn status_follows_the_fetch_lifecycle() {
        let mut store = DefinitionStore::new();
        assert_eq!(store.fetch_status("ltv"), FetchStatus::Idle);

        store.begin_fetch("ltv");
        assert_eq!(store.fetch_status("ltv"), FetchStatus::Loading);

        store.complete_fetch("ltv", Ok("Lifetime value.".to_string()));
        assert_eq!(store.fetch_status("ltv"), FetchStatus::Success);
    }
}
