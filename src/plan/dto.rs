use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// The model's plan text, unmodified.
    pub plan: String,
}
