//! Untyped input rows.

/// One input row as ordered `(column, text)` pairs.
///
/// Field order follows the header row of the source file, which is the
/// "natural key order" column detection falls back on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Build a record by zipping header names with row values.
    ///
    /// Missing trailing values become empty strings; surplus values are dropped.
    pub fn from_row(headers: &[String], values: &[String]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = values.get(idx).map(String::as_str).unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect();
        Self { fields }
    }

    /// Column names in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Value of the first field named exactly `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
