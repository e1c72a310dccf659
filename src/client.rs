use crate::config::Configuration;
use crate::encoding::{self, FORM_CONTENT_TYPE};
use crate::endpoints::Endpoint;
use crate::errors::MixpanelError;
use crate::events::{Event, Update};
use crate::response;

use log;
use reqwest;
use reqwest::header::CONTENT_TYPE;
use serde_json::json;

/// The Mixpanel client. Cheap to clone and safe to share: the
/// configuration is read-only and every call builds its own request,
/// connection pooling is left to the HTTP client underneath.
#[derive(Debug, Clone)]
pub struct Mixpanel {
    configuration: Configuration,
    http: reqwest::Client,
}

impl Mixpanel {
    /// Builds a client for a project token, aimed at the production API
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_config(Configuration::new(token))
    }

    /// Builds a client with the API secret needed by import calls
    pub fn with_secret(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::from_config(Configuration::new(token).secret(secret))
    }

    /// Builds a client from a full configuration (URL override, deadline)
    pub fn from_config(configuration: Configuration) -> Self {
        Self {
            configuration,
            http: reqwest::Client::new(),
        }
    }

    /// Reports an event for a user, stamped by the API on reception
    /// unless the event carries its own timestamp
    pub async fn track(
        &self,
        distinct_id: &str,
        event_name: &str,
        event: &Event,
    ) -> Result<(), MixpanelError> {
        let document = event.document(event_name, distinct_id, &self.configuration.token);
        self.send(Endpoint::Track, &document, event.auto_geolocate()).await
    }

    /// Imports a historically-timestamped event, authenticated with the
    /// API secret. Without a secret the call is attempted anyway and the
    /// API rejects it.
    pub async fn import(
        &self,
        distinct_id: &str,
        event_name: &str,
        event: &Event,
    ) -> Result<(), MixpanelError> {
        let document = event.document(event_name, distinct_id, &self.configuration.token);
        self.send(Endpoint::Import, &document, false).await
    }

    /// Applies a profile update operation to a user
    pub async fn update(&self, distinct_id: &str, update: &Update) -> Result<(), MixpanelError> {
        let document = update.document(distinct_id, &self.configuration.token);
        self.send(Endpoint::Engage, &document, update.auto_geolocate()).await
    }

    /// Applies a profile update operation to a group
    pub async fn update_group(
        &self,
        group_key: &str,
        group_id: &str,
        update: &Update,
    ) -> Result<(), MixpanelError> {
        let document = update.group_document(group_key, group_id, &self.configuration.token);
        self.send(Endpoint::Groups, &document, false).await
    }

    /// Links a new distinct id to an existing one, through the vendor's
    /// $create_alias event
    pub async fn alias(&self, distinct_id: &str, new_id: &str) -> Result<(), MixpanelError> {
        let document = json!({
            "event": "$create_alias",
            "properties": {
                "distinct_id": distinct_id,
                "alias": new_id,
                "token": &self.configuration.token,
            }
        });
        self.send(Endpoint::Track, &document, false).await
    }

    /// Single submission path for all endpoints: encode, POST, interpret
    async fn send(
        &self,
        endpoint: Endpoint,
        document: &serde_json::Value,
        auto_geolocate: bool,
    ) -> Result<(), MixpanelError> {
        /* Encode first: a serialisation failure never reaches the network */
        let body = encoding::form_body(document)?;

        let mut url = format!("{}{}", self.configuration.api_url, endpoint.path());
        if auto_geolocate {
            url.push_str("?ip=1");
        }
        log::debug!("submitting {} call to {}", endpoint, url);

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .timeout(self.configuration.timeout)
            .body(body);
        if endpoint.requires_secret() {
            if let Some(secret) = &self.configuration.secret {
                request = request.basic_auth(secret, Some(""));
            }
        }

        let reply = request.send().await?;
        let http_code = reply.status().as_u16();
        let text = reply.text().await?;

        match response::interpret(http_code, &text) {
            Ok(()) => {
                log::debug!("{} call accepted", endpoint);
                Ok(())
            }
            Err(failure) => {
                log::warn!("{} call failed: {}", endpoint, failure);
                Err(failure.into())
            }
        }
    }
}
