//! Paging parameters for collection endpoints.

use serde::{Deserialize, Serialize};

use crate::config::api::MAX_RESULT_LIMIT;

/// Default page size.
const DEFAULT_RESULT_LIMIT: u32 = 100;

/// Request parameters for paged collection retrieval.
///
/// Serialized onto the query string as `resultLimit`, `resultStart` and one
/// `fields` pair per requested field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Number of records requested per page.
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
    /// Offset of the first record of the first page.
    #[serde(default)]
    pub result_start: u32,
    /// Additional fields to include on each record.
    #[serde(default)]
    pub fields: Vec<String>,
}

impl PageParams {
    /// Create paging parameters, clamping the page size to the platform limits.
    pub fn new(result_limit: u32, result_start: u32) -> Self {
        Self {
            result_limit: result_limit.clamp(1, MAX_RESULT_LIMIT),
            result_start,
            fields: Vec::new(),
        }
    }

    /// Bring a page size set directly or deserialized back into range.
    pub fn clamped(mut self) -> Self {
        self.result_limit = self.result_limit.clamp(1, MAX_RESULT_LIMIT);
        self
    }

    /// Request an additional field on every record.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Replace the requested fields.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Query pairs for a page starting at `offset`.
    pub fn query_pairs(&self, offset: u32) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("resultStart".to_string(), offset.to_string()),
            ("resultLimit".to_string(), self.result_limit.to_string()),
        ];
        pairs.extend(self.fields.iter().map(|f| ("fields".to_string(), f.clone())));
        pairs
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            result_start: 0,
            fields: Vec::new(),
        }
    }
}

fn default_result_limit() -> u32 {
    DEFAULT_RESULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_limit() {
        assert_eq!(PageParams::new(0, 0).result_limit, 1);
        assert_eq!(PageParams::new(50_000, 0).result_limit, MAX_RESULT_LIMIT);
    }

    #[test]
    fn test_clamped_fixes_deserialized_limit() {
        let params: PageParams = serde_json::from_str(r#"{"resultLimit": 0}"#).unwrap();
        assert_eq!(params.result_limit, 0);
        assert_eq!(params.clamped().result_limit, 1);
    }

    #[test]
    fn test_query_pairs() {
        let params = PageParams::new(2, 0).with_fields(["tags", "attributes"]);
        assert_eq!(
            params.query_pairs(4),
            vec![
                ("resultStart".to_string(), "4".to_string()),
                ("resultLimit".to_string(), "2".to_string()),
                ("fields".to_string(), "tags".to_string()),
                ("fields".to_string(), "attributes".to_string()),
            ]
        );
    }
}
