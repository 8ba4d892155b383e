//! Platform notifications (`/v2/notifications`).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, error};

use tcex_core::traits::transport::Transport;
use tcex_core::{AppError, AppResult};

use crate::resource::ensure_success;

const NOTIFICATIONS_PATH: &str = "/v2/notifications";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(AppError::validation(format!("Unknown priority: '{s}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Audience {
    Unset,
    /// Comma-separated user names.
    Recipients(String),
    Organization,
}

/// Builder for one notification.
///
/// Choose the audience with [`recipients`](Self::recipients) or
/// [`org`](Self::org), then [`send`](Self::send) any number of messages.
#[derive(Debug)]
pub struct Notifications {
    transport: Arc<dyn Transport>,
    notification_type: Option<String>,
    priority: Priority,
    audience: Audience,
}

impl Notifications {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            notification_type: None,
            priority: Priority::default(),
            audience: Audience::Unset,
        }
    }

    /// Address the notification to a comma-separated list of users.
    pub fn recipients(
        &mut self,
        notification_type: impl Into<String>,
        recipients: impl Into<String>,
        priority: Priority,
    ) -> &mut Self {
        self.notification_type = Some(notification_type.into());
        self.priority = priority;
        self.audience = Audience::Recipients(recipients.into());
        self
    }

    /// Address the notification to the whole organization.
    pub fn org(&mut self, notification_type: impl Into<String>, priority: Priority) -> &mut Self {
        self.notification_type = Some(notification_type.into());
        self.priority = priority;
        self.audience = Audience::Organization;
        self
    }

    /// The request body for `message`.
    pub fn body(&self, message: &str) -> AppResult<Value> {
        let notification_type = match (&self.notification_type, &self.audience) {
            (Some(t), audience) if *audience != Audience::Unset => t,
            _ => {
                return Err(AppError::validation(
                    "Call recipients() or org() before sending a notification",
                ));
            }
        };
        let mut body = json!({
            "notificationType": notification_type,
            "priority": self.priority,
            "isOrganization": self.audience == Audience::Organization,
            "message": message,
        });
        if let Audience::Recipients(recipients) = &self.audience {
            if !recipients.is_empty() {
                body["recipients"] = Value::String(recipients.clone());
            }
        }
        Ok(body)
    }

    /// Send `message` and return the response body.
    ///
    /// A 400 response (typically an unknown recipient) is logged and its body
    /// returned; any other non-2xx status is an error.
    pub fn send(&self, message: &str) -> AppResult<Value> {
        let body = self.body(message)?;
        debug!(body = %body, "Sending notification");

        let response = self.transport.post(NOTIFICATIONS_PATH, body)?;
        if response.status == 400 {
            error!(
                status = response.status,
                message = %response.error_message(),
                "Failed to send notification"
            );
            return Ok(response.body);
        }
        Ok(ensure_success(response, NOTIFICATIONS_PATH)?.body)
    }
}
