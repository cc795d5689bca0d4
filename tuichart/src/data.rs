use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Display label and rendering identity. Should be unique within a series.
    pub key: String,
    /// Bar width in percent, `0..=100`, precomputed by the caller.
    pub data: f64,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// The raw value shown in the value label.
    pub value: f64,
    /// Any other string fields the caller attached.
    #[serde(flatten, default)]
    pub extra: BTreeMap<String, String>,
}

impl DataPoint {
    pub fn new(key: impl Into<String>, data: f64, value: f64) -> Self {
        Self {
            key: key.into(),
            data,
            metadata: Metadata {
                value,
                extra: BTreeMap::new(),
            },
        }
    }

    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.extra.insert(name.into(), value.into());
        self
    }
}
