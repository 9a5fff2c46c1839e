use derive_more::From;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{collections, log, Client, Error, Secret, Store};

/// Username of the bootstrap super-admin (documented, not secret).
pub const BOOTSTRAP_USERNAME: &str = "5650414";

/// Password of the bootstrap super-admin (documented, not secret).
pub const BOOTSTRAP_PASSWORD: &str = "Wise160141";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub username: String,
    pub password: Secret,
    pub name: String,
    pub email: String,
    pub title: String,
    pub is_super_admin: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Fields supplied by a super-admin when registering a standard admin.
/// The record is always created non-super and stamped with the current
/// time.
pub struct NewAdmin {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub title: String,
}

impl<S: Store> Client<S> {
    /// Lists the directory, lazily seeding the bootstrap super-admin
    /// when the stored collection is empty. At most one bootstrap record
    /// is ever created; subsequent calls return the persisted directory
    /// unmodified.
    pub fn admins(&self) -> Result<Vec<AdminUser>, Error> {
        let admins: Vec<AdminUser> = self.load(collections::ADMINS)?;
        if !admins.is_empty() {
            return Ok(admins);
        }

        tracing::info!(
            username = BOOTSTRAP_USERNAME,
            "seeding bootstrap super-admin"
        );
        let bootstrap = AdminUser {
            username: BOOTSTRAP_USERNAME.to_string(),
            password: Secret::from(BOOTSTRAP_PASSWORD),
            name: "Super Admin".to_string(),
            email: "admin@example.com".to_string(),
            title: "Main Administrator".to_string(),
            is_super_admin: true,
            created_at: OffsetDateTime::now_utc(),
        };
        self.save(collections::ADMINS, &[bootstrap.clone()])?;
        Ok(vec![bootstrap])
    }

    /// Per-username credential check. Success records a `login` activity
    /// entry; failure returns `None` with no entry, no lockout and no
    /// delay.
    pub fn verify_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminUser>, Error> {
        let admin = self
            .admins()?
            .into_iter()
            .find(|a| a.username == username && a.password.verify(password));

        if let Some(admin) = &admin {
            self.log_activity(
                &admin.username,
                log::Action::Login,
                Some("Administrator login successful"),
            )?;
        }

        Ok(admin)
    }

    /// `false` for unknown usernames.
    pub fn is_super_admin(&self, username: &str) -> Result<bool, Error> {
        Ok(self
            .admins()?
            .iter()
            .any(|a| a.username == username && a.is_super_admin))
    }

    pub fn add_admin(
        &self,
        acting: &str,
        new_admin: NewAdmin,
    ) -> Result<AdminUser, AddAdminError> {
        use AddAdminError as E;

        let mut admins = self.admins()?;
        if !admins
            .iter()
            .any(|a| a.username == acting && a.is_super_admin)
        {
            return Err(E::NotSuperAdmin);
        }
        if admins.iter().any(|a| a.username == new_admin.username) {
            return Err(E::UsernameTaken);
        }

        let admin = AdminUser {
            username: new_admin.username,
            password: Secret::from(new_admin.password.as_str()),
            name: new_admin.name,
            email: new_admin.email,
            title: new_admin.title,
            is_super_admin: false,
            created_at: OffsetDateTime::now_utc(),
        };
        admins.push(admin.clone());
        self.save(collections::ADMINS, &admins)?;

        self.log_activity(
            acting,
            log::Action::AddAdmin,
            Some(&format!("Added new admin: {}", admin.username)),
        )?;

        Ok(admin)
    }

    /// Removes a standard admin. Self-deletion is forbidden, and so is
    /// deleting any super-admin record.
    pub fn delete_admin(
        &self,
        acting: &str,
        target: &str,
    ) -> Result<(), DeleteAdminError> {
        use DeleteAdminError as E;

        let mut admins = self.admins()?;
        if !admins
            .iter()
            .any(|a| a.username == acting && a.is_super_admin)
        {
            return Err(E::NotSuperAdmin);
        }
        if acting == target {
            return Err(E::SelfDelete);
        }

        let admin = admins
            .iter()
            .find(|a| a.username == target)
            .ok_or(E::NotFound)?;
        if admin.is_super_admin {
            return Err(E::SuperAdmin);
        }

        admins.retain(|a| a.username != target);
        self.save(collections::ADMINS, &admins)?;

        self.log_activity(
            acting,
            log::Action::DeleteAdmin,
            Some(&format!("Deleted admin: {target}")),
        )?;

        Ok(())
    }
}

#[derive(Debug, From)]
pub enum AddAdminError {
    #[from]
    Store(Error),
    NotSuperAdmin,
    UsernameTaken,
}

#[derive(Debug, From)]
pub enum DeleteAdminError {
    #[from]
    Store(Error),
    NotFound,
    NotSuperAdmin,
    SelfDelete,
    SuperAdmin,
}
