use crate::core::scoring::normalize_token;
use crate::models::Posting;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the posting catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid posting at index {index}: {reason}")]
    Invalid { index: usize, reason: String },
}

/// Read-only collection of postings, loaded once at startup
///
/// Order is preserved from the source file and is significant: postings with
/// equal scores are ranked in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    postings: Vec<Posting>,
}

impl Catalog {
    /// Load and validate a catalog from a JSON array of postings
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let postings: Vec<Posting> =
            serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Parsed {} postings from {}", postings.len(), path.display());

        Self::from_postings(postings)
    }

    /// Build a catalog from postings already in memory
    pub fn from_postings(postings: Vec<Posting>) -> Result<Self, CatalogError> {
        for (index, posting) in postings.iter().enumerate() {
            validate_posting(posting).map_err(|reason| CatalogError::Invalid { index, reason })?;
        }

        Ok(Self { postings })
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Distinct domain labels in catalog order, deduplicated case-insensitively
    pub fn domains(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.postings
            .iter()
            .filter(|p| seen.insert(normalize_token(&p.domain)))
            .map(|p| p.domain.clone())
            .collect()
    }

    /// Skills asked for in the caller's domain of interest that the caller lacks
    ///
    /// Required skills come before optional ones within each posting, postings
    /// are visited in catalog order, and each skill appears at most once.
    pub fn suggest_skills(&self, interest: &str, skills: &[String], limit: usize) -> Vec<String> {
        let interest = normalize_token(interest);
        let mut seen: HashSet<String> = skills.iter().map(|s| normalize_token(s)).collect();

        self.postings
            .iter()
            .filter(|p| normalize_token(&p.domain) == interest)
            .flat_map(|p| p.required_skills.iter().chain(p.optional_skills.iter()))
            .filter(|skill| seen.insert(normalize_token(skill)))
            .take(limit)
            .cloned()
            .collect()
    }
}

fn validate_posting(posting: &Posting) -> Result<(), String> {
    if posting.role.trim().is_empty() {
        return Err("role must not be empty".to_string());
    }

    let weights = [
        ("required_weight", posting.match_logic.required_weight),
        ("optional_weight", posting.match_logic.optional_weight),
    ];
    for (name, weight) in weights {
        // Negative weights are allowed; the score is clamped at zero
        if !weight.is_finite() {
            return Err(format!("{} must be a finite number, got {}", name, weight));
        }
    }

    Ok(())
}
