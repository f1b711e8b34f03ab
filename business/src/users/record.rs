//! One user as returned by the listing endpoint.
//!
//! Only `id`, `name`, `email` and `username` are typed. Everything else the API
//! sends (phone, website, address, company) is kept as raw JSON for the modal.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SortKey;

/// One row of the remote user listing.
///
/// Only `id`, `name`, `email` and `username` drive paging, sorting and searching.
/// Everything else the API sends is kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// A record with no extra fields.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            username: username.into(),
            extra: Map::new(),
        }
    }

    /// The column value a sort key orders by.
    pub fn field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => &self.name,
            SortKey::Email => &self.email,
            SortKey::Username => &self.username,
        }
    }

    /// Extra scalar fields as `(label, text)` pairs for the detail view.
    ///
    /// Nested objects are flattened one level (`address.city`); arrays, nulls and
    /// deeper nesting are skipped.
    pub fn extra_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        for (key, value) in &self.extra {
            match value {
                Value::Object(inner) => {
                    for (sub_key, sub_value) in inner {
                        if let Some(text) = scalar_text(sub_value) {
                            fields.push((format!("{key}.{sub_key}"), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        fields.push((key.clone(), text));
                    }
                }
            }
        }
        fields
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
