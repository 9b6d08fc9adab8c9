#![allow(dead_code)]

use connectors::{
    error::{Operation, TransportError},
    search::{
        SearchTransport,
        wire::{Hit, Hits, SearchRequest, SearchResponse},
    },
};
use model::{
    core::value::Value,
    pagination::cursor::{KeepAlive, ScrollRequest},
    records::table::Table,
};
use serde_json::{Map, Value as JsonValue, json};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

/// A request the in-memory store has answered (or refused).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Page { index: String, from: usize, size: usize },
    OpenScroll { index: String, size: usize },
    Scroll { token: String },
}

/// Single-index store held in memory. Scroll contexts are keyed by opaque
/// tokens that change on every page, like the real store's.
pub struct MemoryStore {
    index: String,
    docs: Vec<Map<String, JsonValue>>,
    contexts: RefCell<HashMap<String, (usize, usize)>>,
    next_token: Cell<usize>,
    fail_from: Option<usize>,
    log: RefCell<Vec<Request>>,
}

impl MemoryStore {
    pub fn new(index: &str, docs: Vec<JsonValue>) -> Self {
        MemoryStore {
            index: index.to_string(),
            docs: docs
                .into_iter()
                .filter_map(|doc| match doc {
                    JsonValue::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            contexts: RefCell::new(HashMap::new()),
            next_token: Cell::new(0),
            fail_from: None,
            log: RefCell::new(Vec::new()),
        }
    }

    /// Every request from the `n`-th on (1-based) fails as if the store had
    /// gone away.
    pub fn failing_from(mut self, n: usize) -> Self {
        self.fail_from = Some(n);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.log.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.log.borrow().len()
    }

    fn record(&self, request: Request, operation: Operation) -> Result<(), TransportError> {
        self.log.borrow_mut().push(request);
        if self.fail_from.is_some_and(|n| self.log.borrow().len() >= n) {
            return Err(TransportError::Network {
                operation,
                message: "error sending request: connection refused".into(),
            });
        }
        Ok(())
    }

    fn hits(&self, from: usize, size: usize) -> Hits {
        let end = (from + size).min(self.docs.len());
        let hits = self
            .docs
            .get(from..end)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, source)| Hit {
                id: Some(format!("doc-{}", from + i)),
                source: source.clone(),
            })
            .collect();
        Hits { hits }
    }

    fn open_context(&self, from: usize, size: usize) -> String {
        let n = self.next_token.get();
        self.next_token.set(n + 1);
        let token = format!("FGluY2x1ZGVfY29udGV4dF91dWlk{n:04}");
        self.contexts.borrow_mut().insert(token.clone(), (from, size));
        token
    }
}

impl SearchTransport for MemoryStore {
    fn search(
        &self,
        index: &str,
        request: &SearchRequest,
        scroll: Option<KeepAlive>,
    ) -> Result<SearchResponse, TransportError> {
        let operation = Operation::Search {
            index: index.to_string(),
        };
        let logged = match scroll {
            Some(_) => Request::OpenScroll {
                index: index.to_string(),
                size: request.size,
            },
            None => Request::Page {
                index: index.to_string(),
                from: request.from.unwrap_or(0),
                size: request.size,
            },
        };
        self.record(logged, operation.clone())?;

        if index != self.index {
            return Err(TransportError::Http {
                operation,
                status: 404,
                body: format!(r#"{{"error":{{"type":"index_not_found_exception","index":"{index}"}}}}"#),
            });
        }

        let from = request.from.unwrap_or(0);
        let scroll_id = scroll.map(|_| self.open_context(from + request.size, request.size));
        Ok(SearchResponse {
            scroll_id,
            hits: self.hits(from, request.size),
        })
    }

    fn scroll(&self, request: &ScrollRequest) -> Result<SearchResponse, TransportError> {
        self.record(
            Request::Scroll {
                token: request.scroll_id.clone(),
            },
            Operation::Scroll,
        )?;

        let Some((from, size)) = self.contexts.borrow_mut().remove(&request.scroll_id) else {
            return Err(TransportError::Http {
                operation: Operation::Scroll,
                status: 404,
                body: r#"{"error":{"type":"search_context_missing_exception"}}"#.into(),
            });
        };
        Ok(SearchResponse {
            scroll_id: Some(self.open_context(from + size, size)),
            hits: self.hits(from, size),
        })
    }
}

const STATIONS: &[&str] = &["Olympic Park", "Moorabbin", "Essendon Airport"];

/// Half-hourly observations cycling through three stations. Every fifth
/// observation has no station, every seventh no temperature, and every
/// eleventh carries the "-" placeholder for rain.
pub fn weather_docs(count: usize) -> Vec<JsonValue> {
    (0..count)
        .map(|i| {
            let mut doc = json!({
                "current_date_time": format!("2024-05-01T{:02}:{:02}:00Z", (i / 2) % 24, (i % 2) * 30),
                "latitude": -37.83,
                "longitude": 144.98,
                "temp": 10.0 + (i % 10) as f64,
                "rel_hum": 60 + (i % 30),
                "wind_dir": "NNW",
                "wind_spd": 5 + i % 4,
                "rain": if i % 11 == 0 { json!("-") } else { json!((i % 3) as f64 * 0.2) },
            });
            if i % 5 != 0 {
                doc["station"] = json!(STATIONS[i % STATIONS.len()]);
            }
            if i % 7 == 3 {
                doc["temp"] = JsonValue::Null;
            }
            doc
        })
        .collect()
}

/// Tree inventory documents with string-typed numbers and gaps, the way
/// the open data export serves them.
pub fn tree_docs() -> Vec<JsonValue> {
    vec![
        json!({
            "latitude": "-37.8101",
            "longitude": "144.9628",
            "genus_spec": "Eucalyptus camaldulensis",
            "status": "Active",
            "tree_age": "Mature",
            "dbh": null,
            "height": 18,
            "northing": 5810200.5,
            "easting": 320100.25,
            "geo": { "lat": -37.8101 },
        }),
        json!({
            "latitude": "-37.8150",
            "longitude": "144.9700",
            "genus_spec": "Ulmus procera",
            "status": "Active",
            "dbh": "85",
            "height": "n/a",
            "northing": null,
        }),
        json!({
            "latitude": "n/a",
            "longitude": "144.9711",
            "genus_spec": "Platanus x acerifolia",
            "dbh": 120,
            "northing": 5810300.5,
        }),
    ]
}

pub fn numbers(table: &Table, column: &str) -> Vec<Option<f64>> {
    table
        .column(column)
        .map(|c| c.values.iter().map(Value::as_f64).collect())
        .unwrap_or_default()
}

pub fn strings(table: &Table, column: &str) -> Vec<String> {
    table
        .column(column)
        .map(|c| c.values.iter().map(Value::to_string).collect())
        .unwrap_or_default()
}
