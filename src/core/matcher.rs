use crate::core::{
    catalog::Catalog,
    scoring::{score_posting, SkillSet},
};
use crate::models::{MatchResult, RankedMatch, ScoringPolicy, Shortlist};
use std::sync::Arc;

/// Maximum number of postings returned per request
pub const SHORTLIST_SIZE: usize = 5;

/// Number of skill suggestions attached to a shortlist
pub const SUGGESTION_LIMIT: usize = 3;

/// Main matching orchestrator over the shared, read-only catalog
///
/// # Pipeline Stages
/// 1. Normalize caller skills into a case-insensitive set
/// 2. Score every posting independently, in catalog order
/// 3. Stable sort by score (descending)
/// 4. Truncate to the shortlist size
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
    policy: ScoringPolicy,
}

impl Matcher {
    pub fn new(catalog: Arc<Catalog>, policy: ScoringPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn with_default_policy(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, ScoringPolicy::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank the catalog against a student's skills and domain of interest
    ///
    /// # Arguments
    /// * `skills` - Free-text skill tokens; duplicates and case are ignored
    /// * `interest` - Domain label compared case-insensitively to each posting
    ///
    /// # Returns
    /// At most `SHORTLIST_SIZE` results, highest score first. Postings with
    /// equal scores keep their catalog order.
    pub fn match_postings(&self, skills: &[String], interest: &str) -> Vec<MatchResult> {
        let skill_set = SkillSet::new(skills);

        let mut results: Vec<MatchResult> = self
            .catalog
            .postings()
            .iter()
            .map(|posting| score_posting(posting, &skill_set, interest, &self.policy))
            .collect();

        // `sort_by` is stable, which keeps ties in catalog order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(SHORTLIST_SIZE);

        tracing::debug!(
            "Scored {} postings for {} distinct skills, interest {:?}",
            self.catalog.len(),
            skill_set.len(),
            interest
        );

        results
    }

    /// Ranked matches with confidence bands and skill suggestions
    pub fn shortlist(&self, skills: &[String], interest: &str) -> Shortlist {
        let matches = self
            .match_postings(skills, interest)
            .into_iter()
            .map(RankedMatch::from)
            .collect();

        Shortlist {
            matches,
            suggested_skills: self.catalog.suggest_skills(interest, skills, SUGGESTION_LIMIT),
            total_postings: self.catalog.len(),
        }
    }
}
