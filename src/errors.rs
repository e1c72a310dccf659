use thiserror::Error;

/// Envelope wrapping every failure a client call can return.
/// The underlying cause stays reachable through source(), so callers
/// can walk the chain instead of parsing message text.
#[derive(Error, Debug)]
pub enum MixpanelError {
    /// The payload could not be serialised, nothing was sent
    #[error("failed to serialise payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network-level failure: connect, TLS, or the request deadline fired
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered but reported a failure
    #[error("call rejected by the API: {0}")]
    TrackFailed(#[from] TrackFailed),
}

impl MixpanelError {
    /// True when the cause is the request deadline firing, which is how a
    /// caller-side timeout surfaces on an in-flight call
    pub fn is_deadline(&self) -> bool {
        matches!(self, MixpanelError::Transport(e) if e.is_timeout())
    }

    /// The API-reported failure behind this error, if that is what it is
    pub fn track_failure(&self) -> Option<&TrackFailed> {
        match self {
            MixpanelError::TrackFailed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// An API-reported failure: the endpoint responded, but with an error body,
/// a failure status or a bad HTTP code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TrackFailed {
    /// Composed diagnostic: error=...; status=...; httpCode=...[, body=...]
    pub message: String,
    /// The HTTP status code the API replied with
    pub http_code: u16,
    /// The raw response body, kept for diagnosis
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn track_failed_display_is_the_composed_message() {
        let failure = TrackFailed {
            message: String::from("error=some error; status=0; httpCode=200"),
            http_code: 200,
            body: String::from("{\"error\": \"some error\", \"status\": \"0\"}"),
        };
        let wrapped = MixpanelError::from(failure.clone());

        assert_eq!(failure.to_string(), "error=some error; status=0; httpCode=200");
        assert_eq!(
            wrapped.to_string(),
            "call rejected by the API: error=some error; status=0; httpCode=200"
        );
    }

    #[test]
    fn cause_stays_reachable_through_the_source_chain() {
        let failure = TrackFailed {
            message: String::from("error=; status=; httpCode=503"),
            http_code: 503,
            body: String::new(),
        };
        let wrapped = MixpanelError::from(failure);

        let mut cause: Option<&(dyn Error + 'static)> = wrapped.source();
        let mut found = false;
        while let Some(c) = cause {
            if c.downcast_ref::<TrackFailed>().is_some() {
                found = true;
            }
            cause = c.source();
        }
        assert!(found);
        assert!(wrapped.track_failure().is_some());
    }

    #[test]
    fn serialization_failures_are_not_deadlines() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let wrapped = MixpanelError::from(bad);
        assert!(!wrapped.is_deadline());
        assert!(wrapped.track_failure().is_none());
    }
}
