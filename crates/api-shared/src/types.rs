//! JSON request and response types.

use medibot_core::{ConditionRecord, HospitalSearch, Markup};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A chat turn from the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChatReq {
    #[serde(default)]
    pub message: String,
    /// Language the reply should be written in. Defaults to English.
    #[serde(default)]
    pub language: Option<String>,
}

/// Online reply and offline advisory for one chat turn.
///
/// `offline` is empty when no catalog keyword matched. `assistant_error` is a fixed notice,
/// present only when the hosted assistant could not be reached or answered badly; `reply` is
/// then empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChatRes {
    pub reply: String,
    pub offline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_error: Option<String>,
}

/// Rendering surface for an offline advisory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryMarkup {
    #[default]
    Html,
    Markdown,
    Plain,
}

impl From<AdvisoryMarkup> for Markup {
    fn from(value: AdvisoryMarkup) -> Self {
        match value {
            AdvisoryMarkup::Html => Markup::Html,
            AdvisoryMarkup::Markdown => Markup::Markdown,
            AdvisoryMarkup::Plain => Markup::Plain,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeReq {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub markup: AdvisoryMarkup,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRes {
    /// Rendered advisory, or empty when nothing matched.
    pub offline: String,
    /// Names of the matched conditions, in catalog order.
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConditionSummary {
    pub name: String,
    pub keywords: Vec<String>,
}

impl From<&ConditionRecord> for ConditionSummary {
    fn from(record: &ConditionRecord) -> Self {
        Self {
            name: record.name.to_string(),
            keywords: record.keywords.iter().map(|kw| kw.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListConditionsRes {
    pub conditions: Vec<ConditionSummary>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HospitalsQuery {
    /// City, area or postcode to search near.
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HospitalsRes {
    pub location: String,
    pub url: String,
}

impl From<HospitalSearch> for HospitalsRes {
    fn from(search: HospitalSearch) -> Self {
        Self {
            location: search.location,
            url: search.url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}
