pub mod analysis_service;
pub mod chat_service;
pub mod prompt_builder;
pub mod response_composer;
pub mod topic_gate;
