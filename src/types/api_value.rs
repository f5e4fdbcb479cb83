use crate::types::source::Source;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// The per-field wrapper used throughout the API: `{"dateTime": ..., "source": ..., "value": ...}`.
///
/// `source` is optional on the wire; when absent it reads as [`Source::Unknown`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiValue<T> {
    pub date_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub source: Option<Source>,
    pub value: T,
}

impl<T> ApiValue<T> {
    pub fn source(&self) -> Source {
        self.source.unwrap_or_default()
    }
}
