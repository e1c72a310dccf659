use crate::events::track::Properties;

use chrono::{DateTime, Utc};
use serde_json::{self, json, Map};

/// Timestamp attached to a profile update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTimestamp {
    /// Stamp the update with a specific time ($time)
    At(DateTime<Utc>),
    /// Ask the API not to touch the profile's last-seen time ($ignore_time)
    Ignore,
}

/// A profile update, as sent to /engage and /groups
#[derive(Debug, Clone, Default)]
pub struct Update {
    /// The vendor operation, used verbatim as the document key
    /// ("$set", "$add", "$unset", ...). Unknown operations are sent as-is,
    /// the API is the one validating them.
    pub operation: String,
    /// The properties handed to the operation
    pub properties: Properties,
    /// Optional update time, or the ignore marker
    pub timestamp: Option<UpdateTimestamp>,
    /// Geolocation override for the profile ($ip)
    pub ip: Option<String>,
}

impl Update {
    /// Builds the canonical user profile document for /engage. The
    /// operation key goes in first, reserved fields after so they win
    /// should a caller pass a colliding operation name.
    pub fn document(&self, distinct_id: &str, token: &str) -> serde_json::Value {
        let mut document = Map::new();
        document.insert(self.operation.clone(), json!(self.properties));
        document.insert(String::from("$distinct_id"), json!(distinct_id));
        document.insert(String::from("$token"), json!(token));
        match &self.timestamp {
            Some(UpdateTimestamp::At(timestamp)) => {
                document.insert(String::from("$time"), json!(timestamp.timestamp()));
            }
            Some(UpdateTimestamp::Ignore) => {
                document.insert(String::from("$ignore_time"), json!(true));
            }
            None => (),
        }
        if let Some(ip) = &self.ip {
            document.insert(String::from("$ip"), json!(ip));
        }
        serde_json::Value::Object(document)
    }

    /// Builds the canonical group profile document for /groups
    pub fn group_document(&self, group_key: &str, group_id: &str, token: &str) -> serde_json::Value {
        let mut document = Map::new();
        document.insert(self.operation.clone(), json!(self.properties));
        document.insert(String::from("$group_id"), json!(group_id));
        document.insert(String::from("$group_key"), json!(group_key));
        document.insert(String::from("$token"), json!(token));
        serde_json::Value::Object(document)
    }

    /// True when the API should geolocate the profile from the submitting address
    pub fn auto_geolocate(&self) -> bool {
        self.ip.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn set_update() -> Update {
        let mut properties = Properties::new();
        properties.insert(String::from("Address"), json!("1313 Mockingbird Lane"));
        properties.insert(String::from("Birthday"), json!("1948-01-01"));
        Update {
            operation: String::from("$set"),
            properties,
            ..Update::default()
        }
    }

    #[test]
    fn user_document_has_the_engage_shape() {
        let document = set_update().document("13793", "e3bc4100330c35722740fb8c6f5abddc");
        assert_eq!(document["$distinct_id"], "13793");
        assert_eq!(document["$token"], "e3bc4100330c35722740fb8c6f5abddc");
        assert_eq!(document["$set"]["Address"], "1313 Mockingbird Lane");
        assert_eq!(document["$set"]["Birthday"], "1948-01-01");
        assert!(document.get("$time").is_none());
        assert!(document.get("$ip").is_none());
    }

    #[test]
    fn group_document_has_the_groups_shape() {
        let document = set_update().group_document("company_id", "11", "t");
        assert_eq!(document["$group_key"], "company_id");
        assert_eq!(document["$group_id"], "11");
        assert_eq!(document["$token"], "t");
        assert_eq!(document["$set"]["Address"], "1313 Mockingbird Lane");
    }

    #[test]
    fn unknown_operations_are_passed_through() {
        let update = Update { operation: String::from("$brand_new_op"), ..Update::default() };
        let document = update.document("1", "t");
        assert_eq!(document["$brand_new_op"], json!({}));
    }

    #[test]
    fn reserved_fields_win_over_a_colliding_operation() {
        let update = Update { operation: String::from("$token"), ..Update::default() };
        let document = update.document("1", "real-token");
        assert_eq!(document["$token"], "real-token");
    }

    #[test]
    fn update_timestamp_variants_map_to_their_fields() {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let mut update = set_update();

        update.timestamp = Some(UpdateTimestamp::At(at));
        let document = update.document("1", "t");
        assert_eq!(document["$time"], json!(at.timestamp()));
        assert!(document.get("$ignore_time").is_none());

        update.timestamp = Some(UpdateTimestamp::Ignore);
        let document = update.document("1", "t");
        assert_eq!(document["$ignore_time"], json!(true));
        assert!(document.get("$time").is_none());
    }

    #[test]
    fn ip_override_lands_in_the_user_document() {
        let update = Update { ip: Some(String::from("203.0.113.9")), ..set_update() };
        let document = update.document("1", "t");
        assert_eq!(document["$ip"], "203.0.113.9");
        assert!(!update.auto_geolocate());
    }
}
