use base64::{Engine as _, engine::general_purpose};
use serde_json;

/// Content type sent along with every encoded payload
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Serialises a canonical document and encodes it the way the ingestion
/// API expects it: compact JSON, standard base64, placed in a data form
/// field. The base64 output goes in as-is, which is what the API accepts.
/// A serialisation failure surfaces here, before any network I/O.
pub fn form_body(document: &serde_json::Value) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(document)?;
    Ok(format!("data={}", general_purpose::STANDARD.encode(json)))
}
