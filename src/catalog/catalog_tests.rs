#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{
        catalog::TermCatalog,
        core::{Category, CategoryFilter},
    };

    #[test]
    fn all_filter_returns_the_whole_deck() {
        let catalog = TermCatalog::built_in();
        let view = catalog.view(CategoryFilter::All);

        assert_eq!(view.len(), catalog.len());
        assert!(view.iter().zip(catalog.terms()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn category_views_match_the_predicate_and_preserve_order() {
        let catalog = TermCatalog::built_in();

        for category in Category::ALL {
            let view = catalog.view(CategoryFilter::Only(category));
            assert!(view.iter().all(|record| record.category == category));

            // Order within a view must be the deck order.
            let deck_positions: Vec<usize> = view
                .iter()
                .map(|record| {
                    catalog.terms().iter().position(|t| t.id == record.id).expect("record in deck")
                })
                .collect();
            assert!(deck_positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn every_category_has_cards() {
        let catalog = TermCatalog::built_in();

        for category in Category::ALL {
            assert!(
                !catalog.view(CategoryFilter::Only(category)).is_empty(),
                "no cards in {:?}",
                category
            );
        }
    }

    #[test]
    fn ids_are_unique() {
        let catalog = TermCatalog::built_in();
        let ids: HashSet<&str> = catalog.terms().iter().map(|record| record.id).collect();

        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn category_views_partition_the_deck() {
        let catalog = TermCatalog::built_in();
        let total: usize =
            Category::ALL.iter().map(|c| catalog.view(CategoryFilter::Only(*c)).len()).sum();

        assert_eq!(total, catalog.len());
    }
}
