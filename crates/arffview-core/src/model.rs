//! Dataset model and the wire format of the load endpoint.
//!
//! Decoding is deliberately lenient. The server owns validation; the client
//! renders whatever shape it receives and falls back to empty collections
//! instead of failing.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

/// One data record, keyed by attribute name.
pub type Row = serde_json::Map<String, Value>;

/// Declared type of an attribute as emitted by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeKind {
    /// `"NUMERIC"`, `"REAL"`, `"STRING"`, `"DATE ..."`
    Declared(String),
    /// Nominal attribute: the list of allowed values
    Nominal(Vec<String>),
    Other(Value),
}

impl AttributeKind {
    /// Badge text, or `None` when there is nothing worth showing.
    pub fn label(&self) -> Option<String> {
        match self {
            AttributeKind::Declared(name) if name.is_empty() => None,
            AttributeKind::Declared(name) => Some(name.clone()),
            AttributeKind::Nominal(values) => Some(format!("{{{}}}", values.join(","))),
            AttributeKind::Other(Value::Null) => None,
            AttributeKind::Other(other) => Some(other.to_string()),
        }
    }
}

/// A named, optionally typed column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<AttributeKind>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, kind: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: kind.map(|k| AttributeKind::Declared(k.to_string())),
        }
    }

    pub fn type_label(&self) -> Option<String> {
        self.kind.as_ref().and_then(AttributeKind::label)
    }
}

/// Success body of `POST /api/load`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadResponse {
    pub attributes: Vec<Attribute>,
    pub rows: Vec<Row>,
    /// `rows_count` as reported by the server
    pub rows_count: Option<usize>,
}

impl LoadResponse {
    /// Decode a success body.
    ///
    /// Never fails: a body that is not a JSON object yields an empty response,
    /// non-array fields become empty, unreadable attribute entries are dropped
    /// and non-object rows become empty rows.
    pub fn from_slice(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                warn!("Load response is not JSON, treating as empty: {}", e);
                return Self::default();
            }
        };

        let Value::Object(mut object) = value else {
            warn!("Load response is not a JSON object, treating as empty");
            return Self::default();
        };

        let attributes = match object.remove("attributes") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<Attribute>(item) {
                    Ok(attribute) => Some(attribute),
                    Err(e) => {
                        warn!("Skipping unreadable attribute: {}", e);
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        let rows = match object.remove("rows") {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(row) => row,
                    _ => Row::new(),
                })
                .collect(),
            _ => Vec::new(),
        };

        let rows_count = object
            .get("rows_count")
            .and_then(Value::as_u64)
            .map(|n| n as usize);

        Self {
            attributes,
            rows,
            rows_count,
        }
    }
}

/// Error body of a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Decode an error body; anything unreadable yields an empty body.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Attributes and rows returned for one uploaded file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub attributes: Vec<Attribute>,
    pub rows: Vec<Row>,
    pub reported_rows: Option<usize>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row count announced by the server when it disagrees with the rows
    /// actually received.
    pub fn reported_row_mismatch(&self) -> Option<usize> {
        self.reported_rows.filter(|&reported| reported != self.rows.len())
    }
}

impl From<LoadResponse> for Dataset {
    fn from(response: LoadResponse) -> Self {
        let mut seen = HashSet::new();
        for attribute in &response.attributes {
            if !seen.insert(attribute.name.as_str()) {
                warn!("Duplicate attribute name in dataset: {}", attribute.name);
            }
        }

        if let Some(reported) = response.rows_count {
            if reported != response.rows.len() {
                warn!(
                    "Server reported {} rows but sent {}",
                    reported,
                    response.rows.len()
                );
            }
        }

        Self {
            attributes: response.attributes,
            rows: response.rows,
            reported_rows: response.rows_count,
        }
    }
}
