// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Posting, MatchLogic, MatchResult, Confidence, RankedMatch, Shortlist, ScoringPolicy};
pub use requests::{MatchRequest, AssistantRequest};
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse, DomainsResponse, AssistantResponse};
