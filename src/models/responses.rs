use serde::{Deserialize, Serialize};
use crate::models::domain::RankedMatch;

/// Response for the v1 find endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "suggestedSkills")]
    pub suggested_skills: Vec<String>,
    #[serde(rename = "totalPostings")]
    pub total_postings: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub postings: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Catalog domain listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

/// Assistant reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub reply: String,
}
