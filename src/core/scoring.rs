use crate::models::{MatchResult, Posting, ScoringPolicy};
use std::collections::HashSet;

/// Reason used when neither a skill nor the domain matched
pub const FALLBACK_REASON: &str = "Partial skill match";

/// Lower-case and trim a skill or domain token for comparison
#[inline]
pub fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Caller skills as a case-insensitive set
///
/// Duplicates collapse, so repeating a skill never counts twice.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    skills: HashSet<String>,
}

impl SkillSet {
    pub fn new(skills: &[String]) -> Self {
        let skills = skills
            .iter()
            .map(|s| normalize_token(s))
            .filter(|s| !s.is_empty())
            .collect();

        Self { skills }
    }

    #[inline]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(&normalize_token(skill))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }
}

/// Calculate the fit score (0-100) and match reasons for one posting
///
/// Scoring formula:
/// score = clamp(
///     required_weight * matched_required / |required| +
///     optional_weight * matched_optional / |optional| +
///     domain_bonus (interest == domain),
///     0, 1
/// ) * 100, rounded half-up
///
/// A posting with no required (or optional) skills contributes 0 for that term.
pub fn score_posting(
    posting: &Posting,
    skills: &SkillSet,
    interest: &str,
    policy: &ScoringPolicy,
) -> MatchResult {
    let mut reasons = Vec::new();

    let matched_required = count_matches(&posting.required_skills, skills, "required", &mut reasons);
    let matched_optional = count_matches(&posting.optional_skills, skills, "optional", &mut reasons);

    let required_score = coverage(matched_required, posting.required_skills.len());
    let optional_score = coverage(matched_optional, posting.optional_skills.len());

    let mut score = posting.match_logic.required_weight * required_score
        + posting.match_logic.optional_weight * optional_score;

    if normalize_token(&posting.domain) == normalize_token(interest) {
        score += policy.domain_bonus;
        reasons.push("Domain matched".to_string());
    }

    let reason = if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        reasons.join(", ")
    };

    MatchResult {
        role: posting.role.clone(),
        score: to_percent(score),
        reason,
    }
}

/// Count declared skills the caller has, recording a reason for each hit
fn count_matches(
    declared: &[String],
    skills: &SkillSet,
    kind: &str,
    reasons: &mut Vec<String>,
) -> usize {
    let mut matched = 0;
    for skill in declared {
        if skills.contains(skill) {
            matched += 1;
            reasons.push(format!("Matched {} skill: {}", kind, skill));
        }
    }
    matched
}

#[inline]
fn coverage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64
}

/// Clamp a 0-1 score and scale it to an integer percentage
///
/// The value is non-negative after clamping, so `round` is round-half-up here.
#[inline]
fn to_percent(score: f64) -> u32 {
    let clamped = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    (clamped * 100.0).round() as u32
}
