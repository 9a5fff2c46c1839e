use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{collections, Client, Error, Store};
use crate::token;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub admin_username: String,
    pub action: Action,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Login,
    AddComment,
    UpdateStatus,
    AddAdmin,
    DeleteAdmin,
    ViewDashboard,
}

impl<S: Store> Client<S> {
    /// Prepends an audit entry, keeping the stored log newest-first.
    ///
    /// The data layer emits `login`, `add_comment`, `add_admin` and
    /// `delete_admin` itself; `update_status` and `view_dashboard` are
    /// recorded by the presentation layer through this operation.
    pub fn log_activity(
        &self,
        admin_username: &str,
        action: Action,
        details: Option<&str>,
    ) -> Result<(), Error> {
        tracing::debug!(admin = admin_username, ?action, "admin activity");

        let mut entries = self.admin_logs()?;
        entries.insert(
            0,
            Entry {
                id: token::generate(token::ID_LEN),
                admin_username: admin_username.to_string(),
                action,
                timestamp: OffsetDateTime::now_utc(),
                details: details.map(str::to_string),
            },
        );
        self.save(collections::ADMIN_LOGS, &entries)
    }

    /// The full audit trail, newest-first per the prepend order.
    pub fn admin_logs(&self) -> Result<Vec<Entry>, Error> {
        self.load(collections::ADMIN_LOGS)
    }
}
