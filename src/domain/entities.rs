//! Wire models for the definitions API - pure data shapes, no validation
//!
//! Field names follow the server's camelCase JSON. Every field is optional
//! on the wire; the client treats entity content as opaque.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for a single report definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionEntity {
    /// ISO-8601 timestamp as sent by the server.
    pub created_date: Option<String>,
    pub def_id: Option<String>,
    pub created_user: Option<String>,
    pub param_names: Option<Vec<String>>,
    pub params: Option<Vec<ParameterEntity>>,
    pub def_description: Option<String>,
    pub unsupported_report_types: Option<Vec<ReportType>>,
}

/// A report parameter expected by a definition's design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterEntity {
    pub param_name: Option<String>,
    pub data_type: Option<String>,
    pub allow_null: Option<bool>,
    pub default_value: Option<String>,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportType {
    Html,
    Pdf,
    Csv,
}

/// Mapping of definition IDs to their URIs, returned by the list operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionMap {
    #[serde(default)]
    pub report_def_map: HashMap<String, String>,
}

/// Outcome of a definition deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeleteStatus {
    Success,
    Failed,
    FailedInUse,
    NotFound,
}

/// Acknowledgment body for a delete operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionDeleteResponse {
    pub delete_status: Option<DeleteStatus>,
}
