//! Notification destination and delivery operations.

use billforge_core::{
    Notification, NotificationId, NotificationSetting, NotificationSettingCreate,
    NotificationSettingId, NotificationSettingUpdate, NotificationStatus, Page,
    ReplayedNotification,
};
use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::params::QueryParams;

/// Query parameters for [`Client::list_notification_settings`].
#[derive(Debug, Clone, Default)]
pub struct NotificationSettingListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to active (`true`) or disabled (`false`) destinations.
    pub active: Option<bool>,
}

impl NotificationSettingListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_opt("active", self.active);
        query
    }
}

/// Query parameters for [`Client::list_notifications`].
#[derive(Debug, Clone, Default)]
pub struct NotificationListParams {
    /// Return entities after the given cursor.
    pub after: Option<String>,
    /// Page size; server default is 50, maximum 200.
    pub per_page: Option<u32>,
    /// Restrict to deliveries to the given destinations.
    pub notification_setting_id: Vec<NotificationSettingId>,
    /// Restrict to the given delivery states.
    pub status: Vec<NotificationStatus>,
    /// Full-text search over notification ids and event types.
    pub search: Option<String>,
}

impl NotificationListParams {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("after", self.after.as_deref());
        query.push_opt("per_page", self.per_page);
        query.push_csv("notification_setting_id", &self.notification_setting_id);
        query.push_csv("status", self.status.iter());
        query.push_opt("search", self.search.as_deref());
        query
    }
}

impl Client {
    /// List notification destinations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_notification_settings(
        &self,
        params: &NotificationSettingListParams,
    ) -> Result<Page<NotificationSetting>> {
        self.get_page(
            "list_notification_settings",
            "/notification-settings",
            &params.to_query(),
        )
        .await
    }

    /// Create a notification destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_notification_setting(
        &self,
        setting: &NotificationSettingCreate,
    ) -> Result<NotificationSetting> {
        self.send_entity(
            "create_notification_setting",
            Method::POST,
            "/notification-settings",
            setting,
        )
        .await
    }

    /// Get a notification destination by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_notification_setting(
        &self,
        id: &NotificationSettingId,
    ) -> Result<NotificationSetting> {
        self.get_entity(
            "get_notification_setting",
            &format!("/notification-settings/{id}"),
            &QueryParams::new(),
        )
        .await
    }

    /// Update a notification destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_notification_setting(
        &self,
        id: &NotificationSettingId,
        update: &NotificationSettingUpdate,
    ) -> Result<NotificationSetting> {
        self.send_entity(
            "update_notification_setting",
            Method::PATCH,
            &format!("/notification-settings/{id}"),
            update,
        )
        .await
    }

    /// Delete a notification destination. Undelivered notifications to it
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete_notification_setting(&self, id: &NotificationSettingId) -> Result<()> {
        self.delete_entity(
            "delete_notification_setting",
            &format!("/notification-settings/{id}"),
        )
        .await
    }

    /// List notification deliveries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_notifications(
        &self,
        params: &NotificationListParams,
    ) -> Result<Page<Notification>> {
        self.get_page("list_notifications", "/notifications", &params.to_query())
            .await
    }

    /// Get a notification delivery by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_notification(&self, id: &NotificationId) -> Result<Notification> {
        self.get_entity(
            "get_notification",
            &format!("/notifications/{id}"),
            &QueryParams::new(),
        )
        .await
    }

    /// Replay a notification: deliver its event again as a new notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn replay_notification(
        &self,
        id: &NotificationId,
    ) -> Result<ReplayedNotification> {
        self.post_empty("replay_notification", &format!("/notifications/{id}/replay"))
            .await
    }
}
