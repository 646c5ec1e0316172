//! Statistics responses
//!
//! Stats endpoints return either flat entries
//! (`{"entries": {"curSessions": {"value": 3}}}`) or, on current TMOS
//! versions, entries wrapped in a selfLink keyed `nestedStats` object.
//! [`StatsBag::from_response`] accepts both.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A single statistic value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    /// Numeric counter or gauge
    Counter(u64),
    /// Text value such as a status or version string
    Text(String),
}

impl StatValue {
    /// Numeric value, 0 for text entries
    pub fn as_counter(&self) -> u64 {
        match self {
            StatValue::Counter(n) => *n,
            StatValue::Text(_) => 0,
        }
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Counter(n) => write!(f, "{}", n),
            StatValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Flattened statistics keyed by dotted metric name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsBag {
    entries: BTreeMap<String, StatValue>,
}

impl StatsBag {
    /// Flatten a raw stats response body
    pub fn from_response(raw: &Value) -> Self {
        let mut entries = BTreeMap::new();
        if let Some(map) = raw.get("entries").and_then(Value::as_object) {
            collect_entries(map, &mut entries);
        }
        Self { entries }
    }

    /// Look up a metric
    pub fn get(&self, name: &str) -> Option<&StatValue> {
        self.entries.get(name)
    }

    /// Numeric value of a metric
    pub fn counter(&self, name: &str) -> Option<u64> {
        self.get(name).map(StatValue::as_counter)
    }

    /// Text value of a metric
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(StatValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Iterate over all metrics in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StatValue)> {
        self.entries.iter()
    }

    /// Metrics of one category with the category prefix stripped.
    ///
    /// `serverside.curConns` becomes `curConns` for category `serverside`.
    /// Text values count as 0.
    pub fn category(&self, prefix: &str) -> BTreeMap<String, u64> {
        self.entries
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .filter_map(|(name, value)| {
                name.split('.')
                    .nth(1)
                    .map(|short| (short.to_string(), value.as_counter()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn collect_entries(map: &serde_json::Map<String, Value>, out: &mut BTreeMap<String, StatValue>) {
    for (name, entry) in map {
        if let Some(nested) = entry
            .get("nestedStats")
            .and_then(|n| n.get("entries"))
            .and_then(Value::as_object)
        {
            // Only descend into selfLink wrappers, not sub-collections
            if name.starts_with("http") {
                collect_entries(nested, out);
            }
            continue;
        }

        if let Some(value) = entry.get("value") {
            let counter = value
                .as_u64()
                .or_else(|| value.as_f64().map(|f| f as u64))
                .unwrap_or(0);
            out.insert(name.clone(), StatValue::Counter(counter));
        } else if let Some(text) = entry.get("description").and_then(Value::as_str) {
            out.insert(name.clone(), StatValue::Text(text.to_string()));
        }
    }
}
