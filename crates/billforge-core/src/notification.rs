//! Events, notification destinations, and delivery records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::{EventId, NotificationId, NotificationSettingId};

/// A dotted event type name such as `transaction.completed`.
///
/// Two or more lowercase segments separated by dots; segments may contain
/// underscores.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventTypeName(String);

impl EventTypeName {
    /// Parse an event type name.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is dot-separated lowercase
    /// segments, e.g. `subscription.past_due`.
    pub fn new(value: impl Into<String>) -> Result<Self, EventTypeNameError> {
        let value = value.into();
        let segments: Vec<&str> = value.split('.').collect();
        let segment_ok = |s: &&str| {
            !s.is_empty()
                && s.bytes()
                    .all(|b| b.is_ascii_lowercase() || b == b'_')
        };
        if segments.len() < 2 || !segments.iter().all(segment_ok) {
            return Err(EventTypeNameError::InvalidName { value });
        }
        Ok(Self(value))
    }

    /// Return the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The entity segment, e.g. `transaction` in `transaction.completed`.
    #[must_use]
    pub fn entity(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl FromStr for EventTypeName {
    type Err = EventTypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for EventTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventTypeName({})", self.0)
    }
}

impl fmt::Display for EventTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EventTypeName {
    type Error = EventTypeNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventTypeName> for String {
    fn from(name: EventTypeName) -> Self {
        name.0
    }
}

/// Errors that can occur when parsing an event type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventTypeNameError {
    /// The name is not dot-separated lowercase segments.
    #[error("invalid event type name: {value:?}")]
    InvalidName {
        /// The rejected value.
        value: String,
    },
}

/// Something that happened to an entity.
///
/// The payload stays raw JSON; its shape depends on the event type, and
/// callers decode it against the matching entity once they have branched on
/// [`Event::event_type`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    /// Event identifier.
    pub event_id: EventId,
    /// What kind of event this is.
    pub event_type: EventTypeName,
    /// When the event happened.
    pub occurred_at: DateTime<Utc>,
    /// The entity the event describes, as returned by its read operation.
    pub data: serde_json::Value,
}

/// Catalog entry describing one event type the platform can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventTypeInfo {
    /// Event type name.
    pub name: EventTypeName,
    /// Human-readable description.
    pub description: String,
    /// Entity group the event belongs to.
    pub group: String,
    /// Payload versions available to subscribe to.
    #[serde(default)]
    pub available_versions: Vec<u32>,
}

/// How a notification destination receives events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSettingKind {
    /// Deliver to an email address.
    Email,
    /// Deliver to a webhook endpoint.
    Url,
}

/// Which traffic a destination receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficSource {
    /// Real platform events only.
    Platform,
    /// Simulated events only.
    Simulation,
    /// Both.
    #[default]
    All,
}

fn default_api_version() -> u32 {
    1
}

/// A destination events are delivered to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationSetting {
    /// Destination identifier.
    pub id: NotificationSettingId,
    /// Internal description of the destination.
    pub description: String,
    /// Where to deliver: a URL or an email address, per `kind`.
    pub destination: String,
    /// Whether deliveries are currently enabled.
    pub active: bool,
    /// Payload schema version. Defaults to 1 when absent.
    #[serde(default = "default_api_version")]
    pub api_version: u32,
    /// Whether payloads include sensitive fields.
    #[serde(default)]
    pub include_sensitive_fields: bool,
    /// Delivery mechanism.
    #[serde(rename = "type")]
    pub kind: NotificationSettingKind,
    /// Event types delivered to this destination.
    pub subscribed_events: Vec<EventTypeInfo>,
    /// Secret used to sign webhook deliveries; only for `url` destinations.
    pub endpoint_secret_key: Option<String>,
    /// Which traffic the destination receives.
    #[serde(default)]
    pub traffic_source: TrafficSource,
}

/// Fields accepted when creating a notification destination.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationSettingCreate {
    /// Internal description of the destination.
    pub description: String,
    /// Where to deliver.
    pub destination: String,
    /// Delivery mechanism.
    #[serde(rename = "type")]
    pub kind: NotificationSettingKind,
    /// Event types to deliver.
    pub subscribed_events: Vec<EventTypeName>,
    /// Whether deliveries start enabled. Server default is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Payload schema version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,
    /// Whether payloads include sensitive fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_sensitive_fields: Option<bool>,
    /// Which traffic the destination receives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_source: Option<TrafficSource>,
}

/// Fields accepted when updating a notification destination. Absent fields
/// are unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationSettingUpdate {
    /// Internal description of the destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where to deliver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Enable or disable deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Payload schema version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,
    /// Whether payloads include sensitive fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_sensitive_fields: Option<bool>,
    /// Replace the subscribed event types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_events: Option<Vec<EventTypeName>>,
    /// Which traffic the destination receives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_source: Option<TrafficSource>,
}

/// Delivery state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    /// Not yet attempted.
    NotAttempted,
    /// Failed; the platform will retry.
    NeedsRetry,
    /// Delivered successfully.
    Delivered,
    /// All retries exhausted.
    Failed,
}

impl NotificationStatus {
    /// Return the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAttempted => "not_attempted",
            Self::NeedsRetry => "needs_retry",
            Self::Delivered => "delivered",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record of delivering one event to one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Notification {
    /// Notification identifier.
    pub id: NotificationId,
    /// Event type delivered.
    #[serde(rename = "type")]
    pub event_type: EventTypeName,
    /// Delivery state.
    pub status: NotificationStatus,
    /// The event that was delivered.
    pub payload: Event,
    /// When the event occurred.
    pub occurred_at: DateTime<Utc>,
    /// When delivery was last attempted.
    pub last_attempt_at: Option<DateTime<Utc>>,
    /// When the next retry is scheduled.
    pub retry_at: Option<DateTime<Utc>>,
    /// Delivery attempts so far.
    #[serde(default)]
    pub times_attempted: u32,
    /// Destination the notification was sent to.
    pub notification_setting_id: NotificationSettingId,
}

/// Response to replaying a notification: the replacement delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayedNotification {
    /// Identifier of the new notification created by the replay.
    pub notification_id: NotificationId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_name_validation() {
        assert!(EventTypeName::new("transaction.completed").is_ok());
        assert!(EventTypeName::new("subscription.past_due").is_ok());
        assert!(EventTypeName::new("transaction").is_err());
        assert!(EventTypeName::new("Transaction.Completed").is_err());
        assert!(EventTypeName::new("transaction..completed").is_err());
    }

    #[test]
    fn event_type_name_entity_segment() {
        let name = EventTypeName::new("subscription.canceled").unwrap();
        assert_eq!(name.entity(), "subscription");
    }

    #[test]
    fn event_payload_stays_raw() {
        let event: Event = serde_json::from_str(
            r#"{
                "event_id": "evt_01h04vsc0qhwtsbsxh3422wjjw",
                "event_type": "product.updated",
                "occurred_at": "2023-05-08T08:55:03.071Z",
                "data": {"id": "pro_01gsz4t5hdjse780zja8vvr7jg", "name": "Team workspace"}
            }"#,
        )
        .unwrap();
        assert_eq!(event.event_type.as_str(), "product.updated");
        assert_eq!(event.data["name"], "Team workspace");
    }

    #[test]
    fn setting_api_version_defaults_when_absent() {
        let setting: NotificationSetting = serde_json::from_str(
            r#"{
                "id": "ntfset_01h04vsc0qhwtsbsxh3422wjjw",
                "description": "Ops webhook",
                "destination": "https://example.com/webhooks",
                "active": true,
                "type": "url",
                "subscribed_events": [],
                "endpoint_secret_key": "bfsec_xxx"
            }"#,
        )
        .unwrap();
        assert_eq!(setting.api_version, 1);
        assert_eq!(setting.traffic_source, TrafficSource::All);
        assert!(!setting.include_sensitive_fields);
    }

    #[test]
    fn unknown_notification_status_fails() {
        let result: Result<NotificationStatus, _> = serde_json::from_str("\"queued\"");
        assert!(result.is_err());
    }
}
