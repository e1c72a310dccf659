//! A lightweight, no-fuss client for the Mixpanel ingestion API.
//!
//! Each call is a single request-response cycle: the client builds the
//! canonical JSON document, base64-encodes it into a `data` form field,
//! submits it to the matching endpoint and interprets the reply. No
//! batching, no queueing, no retries: the caller stays in charge.
//!
//! ```rust,no_run
//! use mixpanel::{Event, Mixpanel};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), mixpanel::MixpanelError> {
//! let client = Mixpanel::new("e3bc4100330c35722740fb8c6f5abddc");
//!
//! let mut event = Event::default();
//! event.properties.insert("Referred By".into(), json!("Friend"));
//! client.track("13793", "Signed Up", &event).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod encoding;
mod endpoints;
mod errors;
mod events;
mod response;

pub use client::Mixpanel;
pub use config::Configuration;
pub use endpoints::Endpoint;
pub use errors::{MixpanelError, TrackFailed};
pub use events::{Event, Properties, Update, UpdateTimestamp};
