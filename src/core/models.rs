/// One flashcard worth of catalog data. The deck is compiled into the
/// binary; records are never created or mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRecord {
    pub id: &'static str,
    pub category: Category,
    pub term: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    LegalRegulatory,
    AdvertisingEcosystem,
    MetricsKpis,
    InsuranceConcepts,
    GoalStrategy,
    Technology,
    Competitors,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::LegalRegulatory,
        Category::AdvertisingEcosystem,
        Category::MetricsKpis,
        Category::InsuranceConcepts,
        Category::GoalStrategy,
        Category::Technology,
        Category::Competitors,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::LegalRegulatory => "Legal & Regulatory",
            Category::AdvertisingEcosystem => "Advertising Ecosystem",
            Category::MetricsKpis => "Metrics & KPIs",
            Category::InsuranceConcepts => "Insurance Concepts",
            Category::GoalStrategy => "GOAL Strategy",
            Category::Technology => "Technology",
            Category::Competitors => "Competitors",
        }
    }
}

/// Deck filter: a single category, or the synthetic "All".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// Resolution state of the visible card's definition. Derived each frame,
/// never stored. Provider failures degrade to Success with fallback text,
/// so Error is reserved for states the UI treats as unrecoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}
