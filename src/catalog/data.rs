use crate::core::{Category, TermRecord};

const fn record(id: &'static str, category: Category, term: &'static str) -> TermRecord {
    TermRecord { id, category, term }
}

/// The onboarding deck. Grouped by category; group order matches the
/// category bar.
pub(super) const TERMS: &[TermRecord] = &[
    // Legal & Regulatory
    record("tcpa", Category::LegalRegulatory, "TCPA"),
    record("prior-express-consent", Category::LegalRegulatory, "Prior Express Written Consent"),
    record("dnc-registry", Category::LegalRegulatory, "Do Not Call Registry"),
    record("one-to-one-consent", Category::LegalRegulatory, "One-to-One Consent"),
    record("cms-marketing-guidelines", Category::LegalRegulatory, "CMS Marketing Guidelines"),
    record("state-licensing", Category::LegalRegulatory, "State Licensing"),
    record("eo-insurance", Category::LegalRegulatory, "Errors & Omissions Insurance"),
    // Advertising Ecosystem
    record("shared-lead", Category::AdvertisingEcosystem, "Shared Lead"),
    record("exclusive-lead", Category::AdvertisingEcosystem, "Exclusive Lead"),
    record("lead-aggregator", Category::AdvertisingEcosystem, "Lead Aggregator"),
    record("ping-post", Category::AdvertisingEcosystem, "Ping & Post"),
    record("warm-transfer", Category::AdvertisingEcosystem, "Warm Transfer"),
    record("landing-page", Category::AdvertisingEcosystem, "Landing Page"),
    record("ppc", Category::AdvertisingEcosystem, "Pay-Per-Click (PPC)"),
    // Metrics & KPIs
    record("roi", Category::MetricsKpis, "ROI"),
    record("cpl", Category::MetricsKpis, "Cost Per Lead (CPL)"),
    record("cpa", Category::MetricsKpis, "Cost Per Acquisition (CPA)"),
    record("contact-rate", Category::MetricsKpis, "Contact Rate"),
    record("conversion-rate", Category::MetricsKpis, "Conversion Rate"),
    record("bind-rate", Category::MetricsKpis, "Bind Rate"),
    record("ltv", Category::MetricsKpis, "Customer Lifetime Value (LTV)"),
    // Insurance Concepts
    record("captive-agent", Category::InsuranceConcepts, "Captive Agent"),
    record("independent-agent", Category::InsuranceConcepts, "Independent Agent"),
    record("premium", Category::InsuranceConcepts, "Premium"),
    record("underwriting", Category::InsuranceConcepts, "Underwriting"),
    record("policy-binding", Category::InsuranceConcepts, "Policy Binding"),
    record("final-expense", Category::InsuranceConcepts, "Final Expense"),
    record("medicare-supplement", Category::InsuranceConcepts, "Medicare Supplement"),
    // GOAL Strategy
    record("self-generated-leads", Category::GoalStrategy, "Self-Generated Leads"),
    record("data-ownership", Category::GoalStrategy, "Data Ownership"),
    record("lead-quality", Category::GoalStrategy, "Lead Quality"),
    record("agent-branding", Category::GoalStrategy, "Agent Branding"),
    record("campaign-budget", Category::GoalStrategy, "Campaign Budget"),
    // Technology
    record("crm", Category::Technology, "CRM"),
    record("api-integration", Category::Technology, "API Integration"),
    record("tracking-pixel", Category::Technology, "Tracking Pixel"),
    record("ab-testing", Category::Technology, "A/B Testing"),
    record("programmatic-advertising", Category::Technology, "Programmatic Advertising"),
    // Competitors
    record("everquote", Category::Competitors, "EverQuote"),
    record("quotewizard", Category::Competitors, "QuoteWizard"),
    record("smartfinancial", Category::Competitors, "SmartFinancial"),
    record("datalot", Category::Competitors, "Datalot"),
    record("assurance-iq", Category::Competitors, "Assurance IQ"),
];
