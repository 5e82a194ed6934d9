use serde::{Deserialize, Serialize};

/// Which input columns feed the date and temperature values.
///
/// Every key is optional: detection never fails, it just leaves a role
/// unresolved and downstream values become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub date_key: Option<String>,
    pub max_key: Option<String>,
    pub min_key: Option<String>,
    pub single_temp_key: Option<String>,
}

impl ColumnMapping {
    /// Column read for daily highs: the max column, else the single column.
    pub fn tmax_source(&self) -> Option<&str> {
        self.max_key.as_deref().or(self.single_temp_key.as_deref())
    }

    /// Column read for daily lows: the min column, else the single column.
    pub fn tmin_source(&self) -> Option<&str> {
        self.min_key.as_deref().or(self.single_temp_key.as_deref())
    }

    /// True when no temperature role resolved at all.
    pub fn has_no_temperature(&self) -> bool {
        self.max_key.is_none() && self.min_key.is_none() && self.single_temp_key.is_none()
    }
}
