use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::EventGridConfig;
use crate::utils::document::Record;

pub const AD_CREATED_EVENT: &str = "Neighbourly.AdCreated";
const SUBJECT: &str = "advertisements";
const DATA_VERSION: &str = "1.0";
const PUBLISH_TIMEOUT: Duration = Duration::from_secs(10);

/// One event in the Event Grid schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope<'a> {
    pub id: String,
    pub event_type: &'static str,
    pub subject: &'static str,
    pub event_time: String,
    pub data: &'a Record,
    pub data_version: &'static str,
}

impl<'a> EventEnvelope<'a> {
    pub fn ad_created(data: &'a Record) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_type: AD_CREATED_EVENT,
            subject: SUBJECT,
            event_time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            data,
            data_version: DATA_VERSION,
        }
    }
}

/// Best-effort publisher for "advertisement created" events.
#[derive(Clone)]
pub struct EventNotifier {
    config: Option<EventGridConfig>,
    client: reqwest::Client,
}

impl EventNotifier {
    pub fn new(config: Option<EventGridConfig>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(PUBLISH_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client for events: {}", e);
                reqwest::Client::new()
            });
        Self { config, client }
    }

    #[cfg(test)]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Publishes in the background; the caller never waits on or sees the outcome.
    pub fn notify_created(&self, record: Record) {
        if !self.is_enabled() {
            log::debug!("Event Grid not configured, skipping event for {}", record.id);
            return;
        }

        let notifier = self.clone();
        actix_web::rt::spawn(async move {
            match notifier.publish_ad_created(&record).await {
                Ok(()) => log::debug!("Published {} for {}", AD_CREATED_EVENT, record.id),
                Err(e) => log::warn!("Failed to publish {} for {}: {}", AD_CREATED_EVENT, record.id, e),
            }
        });
    }

    /// Sends a single event and reports how it went.
    pub async fn publish_ad_created(&self, record: &Record) -> Result<(), String> {
        let Some(config) = &self.config else {
            return Ok(());
        };

        let events = [EventEnvelope::ad_created(record)];

        let response = self
            .client
            .post(&config.endpoint)
            .header("aeg-sas-key", &config.key)
            .json(&events)
            .send()
            .await
            .map_err(|e| format!("Failed to send event: {}", e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(format!("Event Grid publish failed ({}): {}", status, body))
        }
    }
}
