use serde::{Deserialize, Serialize};

/// Ambient conditions captured when an entry was written.
///
/// Set once at creation from whatever the weather collaborator returned;
/// edits never alter it, and its absence means no snapshot was available
/// at the time — not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Provider icon code (e.g. `"01d"`).
    pub icon: String,
    /// Rounded to the nearest degree.
    pub temperature_c: i32,
    pub city: String,
}

/// The full report produced by the external weather lookup.
///
/// The store treats this as opaque input: it is never validated or
/// re-fetched, and only the [`WeatherSnapshot`] projection is persisted.
/// Field names follow the collaborator's wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub temperature_celsius: i32,
    pub city_name: String,
    pub country_code: String,
    pub icon_code: String,
    pub description: String,
}

impl WeatherReport {
    /// The subset of the report the journal keeps.
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            icon: self.icon_code.clone(),
            temperature_c: self.temperature_celsius,
            city: self.city_name.clone(),
        }
    }
}
