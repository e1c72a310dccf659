use chrono::{DateTime, Utc};
use serde_json::{self, json};
use std::collections::HashMap;

/// Convenience type: arbitrary JSON properties attached to a call
pub type Properties = HashMap<String, serde_json::Value>;

/// An event, as sent to /track and /import
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// Caller-supplied properties, anything JSON-serialisable goes
    pub properties: Properties,
    /// When absent, the API assigns the reception time
    pub timestamp: Option<DateTime<Utc>>,
    /// Geolocation override: the IP to attribute the event to, "0" to
    /// disable geolocation. When unset, the API geolocates from the
    /// submitting address.
    pub ip: Option<String>,
}

impl Event {
    /// Builds the canonical track document: caller properties merged
    /// first, reserved fields inserted after so they win on collision
    pub fn document(&self, event_name: &str, distinct_id: &str, token: &str) -> serde_json::Value {
        let mut properties = self.properties.clone();
        properties.insert(String::from("distinct_id"), json!(distinct_id));
        properties.insert(String::from("token"), json!(token));
        if let Some(timestamp) = &self.timestamp {
            properties.insert(String::from("time"), json!(timestamp.timestamp()));
        }
        if let Some(ip) = &self.ip {
            properties.insert(String::from("ip"), json!(ip));
        }
        json!({"event": event_name, "properties": properties})
    }

    /// True when the API should geolocate from the submitting address
    pub fn auto_geolocate(&self) -> bool {
        self.ip.is_none()
    }
}
