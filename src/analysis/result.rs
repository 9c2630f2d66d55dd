/// Structured 7W analysis result
///
/// The model is asked for a JSON object with exactly these fields. The wire
/// names mix camelCase and snake_case; the renames below pin them so a
/// response missing any required field fails deserialization instead of
/// producing a half-filled result.

use serde::{Deserialize, Serialize};

/// One complete 7W analysis as returned by the model
///
/// All nine text fields are required; `suggested_categories` is the only
/// optional part of the schema. The value is immutable once stored and is
/// replaced wholesale by the next analysis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub why: String,
    pub when: String,
    #[serde(rename = "where")]
    pub where_: String,
    #[serde(rename = "while")]
    pub while_: String,
    #[serde(rename = "withWhom")]
    pub with_whom: String,
    #[serde(rename = "withWhat")]
    pub with_what: String,
    pub how: String,
    pub summary: String,
    pub strategic_insight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_categories: Option<Vec<String>>,
}
