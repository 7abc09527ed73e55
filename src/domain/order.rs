use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::Field;

/// One record of the `/v1/orders` payload.
///
/// The backend has shipped two field-naming schemes over time, so the record
/// keeps the raw JSON object and resolves display fields through [`Field`]
/// alias lists instead of a fixed struct layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-object entries still render, just with every placeholder.
        match Value::deserialize(deserializer)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Ok(Self::default()),
        }
    }
}

impl Order {
    /// First alias holding a truthy value, with the alias that matched.
    pub fn lookup(&self, field: &Field) -> Option<(&'static str, &Value)> {
        field.aliases.iter().find_map(|alias| {
            self.fields
                .get(*alias)
                .filter(|v| is_truthy(v))
                .map(|v| (*alias, v))
        })
    }

    /// First alias whose value can be shown as text.
    pub fn text(&self, field: &Field) -> Option<(&'static str, String)> {
        field.aliases.iter().find_map(|alias| {
            self.fields
                .get(*alias)
                .filter(|v| is_truthy(v))
                .and_then(display_value)
                .map(|s| (*alias, s))
        })
    }

    /// Display text for `field`, or its placeholder.
    pub fn text_or_placeholder(&self, field: &Field) -> String {
        self.text(field)
            .map(|(_, s)| s)
            .unwrap_or_else(|| field.placeholder.to_string())
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields
            .get(key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
    }
}

/// Truthiness as the board page has always applied it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a scalar: `1500` rather than `1500.0`, strings unquoted.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(format_number(n)),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| display_value(v).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => None,
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64 Display drops a trailing ".0"
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}
