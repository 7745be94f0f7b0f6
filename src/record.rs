use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::dynamodb::Item;

pub const USERS_TABLE: &str = "Users";
pub const USER_ID: &str = "UserId";
pub const DISPLAY_NAME: &str = "DisplayName";
pub const CREATED_AT: &str = "CreatedAt";

pub const DEMO_USER_ID: &str = "test-user-001";
pub const DEMO_DISPLAY_NAME: &str = "Tester";

/// A row of the `Users` table. Field names serialize to the table's attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    pub user_id: String,
    pub display_name: String,
    /// RFC 3339, UTC, whole seconds.
    pub created_at: String,
}

impl UserRecord {
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// The fixed demo user, stamped with `now`.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self::new(DEMO_USER_ID, DEMO_DISPLAY_NAME, now)
    }

    pub fn to_item(&self) -> Item {
        Item::new()
            .set_string(USER_ID, &self.user_id)
            .set_string(DISPLAY_NAME, &self.display_name)
            .set_string(CREATED_AT, &self.created_at)
    }
}
