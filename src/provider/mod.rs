pub mod api;

use std::env;

use crate::core::TermdeckError;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Trainer persona sent with every definition request. Treated as opaque
/// content; only the wire plumbing around it is ours.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert trainer for \"Goal Platform LLC\", a self-service marketing technology platform for the insurance industry.
Your goal is to help new employees learn industry terminology.
When given a term, provide a concise, accurate definition (max 2-3 sentences).
Context:
- Goal Platform helps agents generate exclusive, self-generated leads (avoiding shared leads).
- Target audience: Insurance agents (Captive and Independent).
- Key themes: Compliance (TCPA), ROI, Data Ownership, Lead Quality.
- If the term is a competitor (e.g., EverQuote), describe them briefly and how Goal Platform differentiates (e.g., \"Goal offers exclusive leads while they offer shared leads\").";

/// Provider settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// Reads `GEMINI_API_KEY` (required) and `TERMDECK_MODEL` (optional).
    /// A missing or blank key is the one fatal startup condition.
    pub fn from_env() -> Result<Self, TermdeckError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(TermdeckError::MissingApiKey)?;

        let model = env::var("TERMDECK_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }
}

pub fn definition_prompt(term: &str, category: &str) -> String {
    format!(
        "Define the term \"{}\" in the context of \"{}\" for an insurance marketing professional. Keep it brief and educational.",
        term, category
    )
}
