pub mod admin;
pub mod log;
pub mod ticket;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{store, token};

pub use crate::store::{Error, Store};

pub use self::{admin::AdminUser, log::Entry, ticket::Ticket};

/// Store keys of the three persisted collections.
pub mod collections {
    pub const TICKETS: &str = "whistleblower-tickets";
    pub const ADMINS: &str = "whistleblower-admins";
    pub const ADMIN_LOGS: &str = "whistleblower-admin-logs";
}

/// Data-access client over an injected [`Store`]. Ticket, admin
/// directory and activity log operations live in their entity modules.
///
/// Every mutation re-reads the affected collection, modifies it in
/// memory and writes it back whole; the crate assumes a single
/// synchronous caller per storage instance.
pub struct Client<S>(S);

impl<S: Store> Client<S> {
    pub fn new(store: S) -> Self {
        Self(store)
    }

    fn load<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, Error> {
        let payload = self.0.read(collection)?;
        Ok(store::decode(collection, payload.as_deref()))
    }

    fn save<T: Serialize>(
        &self,
        collection: &str,
        records: &[T],
    ) -> Result<(), Error> {
        self.0.write(collection, &store::encode(records)?)
    }
}

/// Opaque credential, compared in plaintext exactly as presented.
///
/// All comparisons go through [`Secret::verify`] so a hashing scheme can
/// be substituted later without touching any operation contract.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Secret(String);

impl Secret {
    pub fn generate() -> Self {
        Self(token::generate(token::SECRET_LEN))
    }

    // TODO: Compare against a real hash once credentials stop being
    // stored in plaintext.
    pub fn verify(&self, presented: &str) -> bool {
        self.0 == presented
    }

    /// The plaintext value; only meant for the single disclosure moment
    /// right after generation.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
