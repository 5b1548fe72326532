// Core algorithm exports
pub mod assistant;
pub mod catalog;
pub mod matcher;
pub mod scoring;

pub use assistant::{Assistant, ReplyRule};
pub use catalog::{Catalog, CatalogError};
pub use matcher::{Matcher, SHORTLIST_SIZE};
pub use scoring::{normalize_token, score_posting, SkillSet};
