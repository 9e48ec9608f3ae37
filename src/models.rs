use crate::constants::RESULT_TABLE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utoipa::ToSchema;

/// One entry of the outcome table shown under the photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResultRecord {
    /// Short headline, upper-cased on the poster
    #[schema(example = "Mission")]
    pub title: String,

    /// Sentence displayed under the headline
    #[schema(example = "Gagner des âmes à Rideau. 14 février.")]
    pub msg: String,
}

impl ResultRecord {
    pub fn new(title: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            msg: msg.into(),
        }
    }

    pub fn default_table() -> Vec<Self> {
        RESULT_TABLE
            .iter()
            .map(|(title, msg)| Self::new(*title, *msg))
            .collect()
    }
}

/// Photo received from the form, not yet validated
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Everything the presentation layer needs after a successful generation
#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    pub poster_path: PathBuf,
    pub poster_url: String,
    pub result: ResultRecord,
    /// Sanitized, upper-cased title as printed on the poster
    pub headline: String,
    /// Sanitized message as printed on the poster
    pub message: String,
    pub caption: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Public URL of the generated poster
    #[schema(example = "/static/generated/3f2a9c0e8b7d4e1fa5c6b2d9e0f1a2b3.png")]
    pub poster_url: String,

    /// Headline printed on the poster (sanitized, upper-case)
    #[schema(example = "MISSION")]
    pub title: String,

    /// Message printed under the headline (sanitized)
    pub message: String,

    /// Share caption derived from the result
    pub caption: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Maximum upload size in bytes
    pub max_upload_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_constants() {
        let table = ResultRecord::default_table();
        assert_eq!(table.len(), RESULT_TABLE.len());
        assert_eq!(table[2], ResultRecord::new("Mission", "Gagner des âmes à Rideau. 14 février."));
    }
}
