use serde::Deserialize;

/// An LLM backend available for conducting interviews, from `GET /models`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub context_window: Option<u32>,
    #[serde(default)]
    pub is_default: bool,
}
