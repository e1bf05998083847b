//! Response Schema
//!
//! The declared output schema sent with the analysis request, in the
//! service's schema dialect (uppercase type names, `enum` for closed string
//! sets, per-object `required` lists). The service is expected to honor it,
//! but the client still parses defensively — see [`crate::sanitize`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node of the declared response schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, ResponseSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl ResponseSchema {
    /// Create a string schema
    pub fn string() -> Self {
        Self {
            schema_type: "STRING".to_string(),
            properties: None,
            required: None,
            items: None,
            enum_values: None,
        }
    }

    /// Create a string schema restricted to a closed set
    pub fn enumeration(values: &[&str]) -> Self {
        Self {
            enum_values: Some(values.iter().map(|v| v.to_string()).collect()),
            ..Self::string()
        }
    }

    /// Create an array schema
    pub fn array(items: ResponseSchema) -> Self {
        Self {
            schema_type: "ARRAY".to_string(),
            properties: None,
            required: None,
            items: Some(Box::new(items)),
            enum_values: None,
        }
    }

    /// Create an object schema
    pub fn object(properties: HashMap<String, ResponseSchema>, required: &[&str]) -> Self {
        Self {
            schema_type: "OBJECT".to_string(),
            properties: Some(properties),
            required: Some(required.iter().map(|r| r.to_string()).collect()),
            items: None,
            enum_values: None,
        }
    }
}

/// The declared schema for the analysis response, mirroring
/// `clauselens_core::AnalysisResult`. `criticalClauses` is the one summary
/// field the service may omit.
pub fn analysis_response_schema() -> ResponseSchema {
    let mut clause_props = HashMap::new();
    clause_props.insert("id".to_string(), ResponseSchema::string());
    clause_props.insert("originalText".to_string(), ResponseSchema::string());
    clause_props.insert("simpleExplanation".to_string(), ResponseSchema::string());
    clause_props.insert(
        "riskLevel".to_string(),
        ResponseSchema::enumeration(&["SAFE", "CAUTION", "DANGER"]),
    );
    clause_props.insert("riskJustification".to_string(), ResponseSchema::string());
    clause_props.insert(
        "obligations".to_string(),
        ResponseSchema::array(ResponseSchema::string()),
    );
    clause_props.insert(
        "rights".to_string(),
        ResponseSchema::array(ResponseSchema::string()),
    );
    let clause = ResponseSchema::object(
        clause_props,
        &[
            "id",
            "originalText",
            "simpleExplanation",
            "riskLevel",
            "riskJustification",
            "obligations",
            "rights",
        ],
    );

    let mut summary_props = HashMap::new();
    summary_props.insert("overview".to_string(), ResponseSchema::string());
    summary_props.insert(
        "keyRisks".to_string(),
        ResponseSchema::array(ResponseSchema::string()),
    );
    summary_props.insert(
        "suggestedActions".to_string(),
        ResponseSchema::array(ResponseSchema::string()),
    );
    summary_props.insert(
        "criticalClauses".to_string(),
        ResponseSchema::array(ResponseSchema::string()),
    );
    let summary = ResponseSchema::object(
        summary_props,
        &["overview", "keyRisks", "suggestedActions"],
    );

    let mut root_props = HashMap::new();
    root_props.insert("title".to_string(), ResponseSchema::string());
    root_props.insert("clauses".to_string(), ResponseSchema::array(clause));
    root_props.insert("summary".to_string(), summary);
    ResponseSchema::object(root_props, &["title", "clauses", "summary"])
}
