use serde::{Deserialize, Serialize};

/// Internship posting as declared in the catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub role: String,
    pub domain: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub optional_skills: Vec<String>,
    pub match_logic: MatchLogic,
}

/// Relative importance of required vs optional skill coverage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchLogic {
    pub required_weight: f64,
    pub optional_weight: f64,
}

impl Default for MatchLogic {
    fn default() -> Self {
        Self {
            required_weight: 0.7,
            optional_weight: 0.3,
        }
    }
}

/// Scored posting returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub role: String,
    pub score: u32,
    pub reason: String,
}

/// Coarse label attached to a score for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "High Confidence")]
    High,
    #[serde(rename = "Medium Confidence")]
    Medium,
    #[serde(rename = "Exploratory")]
    Exploratory,
}

impl Confidence {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Confidence::High
        } else if score >= 60 {
            Confidence::Medium
        } else {
            Confidence::Exploratory
        }
    }
}

/// Match result with its confidence band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub result: MatchResult,
    pub confidence: Confidence,
}

impl From<MatchResult> for RankedMatch {
    fn from(result: MatchResult) -> Self {
        let confidence = Confidence::from_score(result.score);
        Self { result, confidence }
    }
}

/// Enriched matching outcome: ranked matches plus skills worth learning
#[derive(Debug, Clone)]
pub struct Shortlist {
    pub matches: Vec<RankedMatch>,
    pub suggested_skills: Vec<String>,
    pub total_postings: usize,
}

/// Tunable parts of the normalized scoring formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    /// Added to the 0-1 score when the interest equals the posting domain
    pub domain_bonus: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self { domain_bonus: 0.1 }
    }
}
