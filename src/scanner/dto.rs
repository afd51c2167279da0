use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    /// The model's analysis text, unmodified.
    pub analysis: String,
}
