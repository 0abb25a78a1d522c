//! Constituent-advocacy service for the Texas hemp regulation campaign.
//!
//! Looks up Texas legislators by zip code, drafts persuasive constituent
//! emails through an LLM, and keeps the zip-to-representative mapping
//! current via offline merge jobs.

pub mod civic;
pub mod config;
pub mod contacts;
pub mod drafting;
pub mod errors;
pub mod llm_client;
pub mod lookup;
pub mod merge;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
