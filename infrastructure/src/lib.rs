pub mod cohere_client;
pub mod config;
pub mod error;
pub mod generation_client;
pub mod ollama_client;
pub mod openai_client;
