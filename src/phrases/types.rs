use serde::{Deserialize, Serialize};

/// Confidence label used when a record does not carry one.
pub const DEFAULT_CONFIDENCE: &str = "High";

/// A single South African phrase, slang term, or cultural expression.
///
/// The default value doubles as the "no data" record returned by the random
/// queries when nothing is available to pick from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Phrase {
    /// The phrase itself. Primary lookup key.
    pub text: String,
    /// Classification tag (e.g. "slang", "cultural", "expression").
    pub category: String,
    pub actual_meaning: String,
    pub afrikaans_influence: bool,
    /// Explanation aimed at Dutch colleagues. Blank means there is none.
    pub explain_like_im_dutch: String,
    /// Odds in `[0, 1]` that the phrase gets misread.
    pub misunderstanding_probability: f64,
    pub confidence: String,
}

impl Default for Phrase {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: String::new(),
            actual_meaning: String::new(),
            afrikaans_influence: false,
            explain_like_im_dutch: String::new(),
            misunderstanding_probability: 0.0,
            confidence: DEFAULT_CONFIDENCE.to_string(),
        }
    }
}

impl Phrase {
    pub fn has_dutch_explanation(&self) -> bool {
        !self.explain_like_im_dutch.trim().is_empty()
    }
}

/// Banner returned by `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub name: String,
    pub status: String,
}

/// Liveness payload returned by `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub phrases: usize,
}
