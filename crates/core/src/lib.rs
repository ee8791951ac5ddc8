//! # MediBot Core
//!
//! Core logic for the MediBot health-information assistant.
//!
//! This crate contains:
//! - the fixed offline condition catalog and the symptom matcher over it
//! - the hosted chat assistant client
//! - hospital search URL building and IP-based location lookup
//! - text-to-speech output through a system program
//!
//! **No API concerns**: HTTP servers, routing and request/response shapes belong in `api-rest`
//! and `api-shared`; the command-line surface lives in `medibot-cli`.

pub mod assistant;
pub mod conditions;
pub mod config;
pub mod constants;
pub mod error;
pub mod hospitals;
pub mod matcher;
pub mod voice;

#[cfg(test)]
mod test_support;

pub use assistant::{ChatAssistant, OpenAiAssistant};
pub use conditions::{catalog, ConditionRecord};
pub use config::CoreConfig;
pub use error::{MediError, MediResult};
pub use hospitals::{search_near, HospitalSearch, IpLocator, Location};
pub use matcher::{analyze, analyze_with, matching_conditions, Markup};
pub use voice::Speaker;

pub use medibot_types::{Language, NonEmptyText, TextError};
