pub mod insights;
pub mod models;
pub mod prompt_spec;
pub mod topic_policy;
pub mod wellness_score;
