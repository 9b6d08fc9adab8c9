use crate::error::{Operation, TransportError};
use model::{
    pagination::cursor::ScrollId,
    records::{document::Document, record::FlatRecord},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue, json};

/// Body of a `_search` request selecting every document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchRequest {
    pub query: JsonValue,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,
}

impl SearchRequest {
    pub fn match_all(size: usize) -> Self {
        SearchRequest {
            query: json!({ "match_all": {} }),
            size,
            from: None,
        }
    }

    pub fn page(size: usize, offset: usize) -> Self {
        SearchRequest {
            from: Some(offset),
            ..Self::match_all(size)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SearchResponse {
    #[serde(rename = "_scroll_id", default, skip_serializing_if = "Option::is_none")]
    pub scroll_id: Option<String>,
    pub hits: Hits,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Hits {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Hit {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_source", default)]
    pub source: Map<String, JsonValue>,
}

impl SearchResponse {
    pub fn hit_count(&self) -> usize {
        self.hits.hits.len()
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.hits
            .hits
            .into_iter()
            .map(|hit| Document::new(hit.id, hit.source))
            .collect()
    }

    pub fn into_rows(self) -> Vec<FlatRecord> {
        self.into_documents().iter().map(Document::flatten).collect()
    }
}

/// One step of a scroll. Only a page with hits carries a handle forward.
#[derive(Debug)]
pub enum ScrollPage {
    Hits {
        documents: Vec<Document>,
        cursor: ScrollId,
    },
    Exhausted,
}

impl ScrollPage {
    pub fn from_response(
        response: SearchResponse,
        operation: Operation,
    ) -> Result<Self, TransportError> {
        if response.hit_count() == 0 {
            return Ok(ScrollPage::Exhausted);
        }
        let token = response
            .scroll_id
            .clone()
            .ok_or(TransportError::MissingScrollId { operation })?;
        Ok(ScrollPage::Hits {
            documents: response.into_documents(),
            cursor: ScrollId::new(token),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_body() {
        let body = serde_json::to_value(SearchRequest::page(100, 200)).unwrap();
        assert_eq!(
            body,
            json!({ "query": { "match_all": {} }, "size": 100, "from": 200 })
        );

        let body = serde_json::to_value(SearchRequest::match_all(1000)).unwrap();
        assert_eq!(body, json!({ "query": { "match_all": {} }, "size": 1000 }));
    }

    #[test]
    fn test_decode_scroll_response() {
        let raw = r#"{
            "_scroll_id": "DXF1ZXJ5",
            "took": 3,
            "hits": {
                "total": { "value": 2 },
                "hits": [
                    { "_index": "trees_data", "_id": "1", "_source": { "genus_spec": "Eucalyptus", "dbh": 40 } },
                    { "_index": "trees_data", "_id": "2", "_source": { "genus_spec": "Ulmus" } }
                ]
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.scroll_id.as_deref(), Some("DXF1ZXJ5"));
        assert_eq!(response.hit_count(), 2);

        let rows = response.into_rows();
        assert_eq!(rows[0].get("dbh"), Some(&json!(40)));
        assert_eq!(rows[1].get("dbh"), None);
    }

    #[test]
    fn test_empty_page_is_exhausted_even_with_token() {
        let response = SearchResponse {
            scroll_id: Some("still-here".into()),
            hits: Hits::default(),
        };
        let page = ScrollPage::from_response(response, Operation::Scroll).unwrap();
        assert!(matches!(page, ScrollPage::Exhausted));
    }

    #[test]
    fn test_hits_without_token_is_an_error() {
        let response = SearchResponse {
            scroll_id: None,
            hits: Hits {
                hits: vec![Hit {
                    id: None,
                    source: Map::new(),
                }],
            },
        };
        let err = ScrollPage::from_response(response, Operation::Scroll).unwrap_err();
        assert_eq!(
            err,
            TransportError::MissingScrollId {
                operation: Operation::Scroll
            }
        );
    }
}
