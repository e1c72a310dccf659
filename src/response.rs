use crate::errors::TrackFailed;

use serde::Deserialize;
use serde_json::{self, Value};

/// The error/status envelope the API may reply with, even under HTTP 200
#[derive(Deserialize, Default)]
struct ReplyEnvelope {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    status: Option<Value>,
}

/// Decides the outcome of a call from the HTTP status code and response
/// body. The vendor convention: a bare 1 means stored, an object carrying
/// error/status fields reports a failure even under HTTP 200.
pub fn interpret(http_code: u16, body: &str) -> Result<(), TrackFailed> {
    let http_ok = (200..300).contains(&http_code);

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(reply)) => {
            let envelope: ReplyEnvelope =
                serde_json::from_value(Value::Object(reply)).unwrap_or_default();
            let status_failed = envelope
                .status
                .as_ref()
                .map(|status| !is_success_marker(status))
                .unwrap_or(false);

            if envelope.error.is_some() || status_failed || !http_ok {
                /* Only append the raw body when the reply does not fit the envelope */
                let fits = envelope.error.is_some() || envelope.status.is_some();
                Err(failure(
                    envelope.error.as_ref(),
                    envelope.status.as_ref(),
                    http_code,
                    body,
                    !fits,
                ))
            } else {
                Ok(())
            }
        }

        /* Scalar reply: 1 means stored, anything else did not work */
        Ok(scalar) => match http_ok && is_success_marker(&scalar) {
            true => Ok(()),
            false => Err(failure(None, None, http_code, body, true)),
        },

        /* Not JSON at all: report with whatever we have */
        Err(_) => Err(failure(None, None, http_code, body, true)),
    }
}

/// The success markers the API is known to reply with: 1, true or "1"
fn is_success_marker(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::Bool(b) => *b,
        Value::String(s) => s == "1",
        _ => false,
    }
}

/// Renders an envelope value for the diagnostic message, strings unquoted
fn plain(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn failure(
    error: Option<&Value>,
    status: Option<&Value>,
    http_code: u16,
    body: &str,
    append_body: bool,
) -> TrackFailed {
    let mut message = format!(
        "error={}; status={}; httpCode={}",
        plain(error),
        plain(status),
        http_code
    );
    if append_body {
        message.push_str(&format!(", body={}", body));
    }
    TrackFailed {
        message,
        http_code,
        body: body.to_string(),
    }
}
