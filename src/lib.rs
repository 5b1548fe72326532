//! Internship Match - skill-based internship matching service
//!
//! This library scores a student's skills and domain of interest against a
//! fixed catalog of internship postings and returns a short, explained,
//! ranked list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Assistant, Catalog, CatalogError, Matcher, SHORTLIST_SIZE};
pub use models::{Posting, MatchLogic, MatchResult, Confidence, ScoringPolicy, MatchRequest, FindMatchesResponse};
