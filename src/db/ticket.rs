use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{collections, log, Client, Error, Secret, Store};
use crate::token;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub password: Secret,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub comments: Vec<Comment>,
}

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
pub struct Id(String);

impl Id {
    pub fn generate() -> Self {
        Self(token::generate(token::ID_LEN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Freshly submitted, not yet picked up by an administrator.
    New,

    /// An administrator is working the report.
    InProgress,

    /// The underlying issue is considered handled.
    Resolved,

    /// The exchange is finished; the thread accepts no more comments.
    Closed,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_title: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Who is writing a comment. Admin authorship carries the directory
/// username so the comment can snapshot the admin's current identity.
#[derive(Clone, Copy, Debug)]
pub enum Author<'a> {
    Reporter,
    Admin(&'a str),
}

/// A freshly submitted ticket together with its plaintext password.
/// This is the only moment the password is disclosed; it cannot be
/// retrieved again.
pub struct Submission {
    pub ticket: Ticket,
    pub password: String,
}

impl<S: Store> Client<S> {
    /// All tickets in storage order; callers sort as needed.
    pub fn tickets(&self) -> Result<Vec<Ticket>, Error> {
        self.load(collections::TICKETS)
    }

    /// Lookup without the password check, for administrator views only.
    pub fn ticket_by_id(&self, id: &Id) -> Result<Option<Ticket>, Error> {
        Ok(self.tickets()?.into_iter().find(|t| &t.id == id))
    }

    /// The sole reporter-facing authentication: both fields must match
    /// exactly, case-sensitively. No rate limiting, no lockout.
    pub fn ticket_by_id_and_password(
        &self,
        id: &Id,
        password: &str,
    ) -> Result<Option<Ticket>, Error> {
        Ok(self
            .tickets()?
            .into_iter()
            .find(|t| &t.id == id && t.password.verify(password)))
    }

    pub fn submit_ticket(
        &self,
        title: &str,
        description: &str,
    ) -> Result<Submission, Error> {
        let password = Secret::generate();
        let ticket = Ticket {
            id: Id::generate(),
            title: title.to_string(),
            description: description.to_string(),
            status: Status::New,
            password: password.clone(),
            created_at: OffsetDateTime::now_utc(),
            comments: Vec::new(),
        };

        let mut tickets = self.tickets()?;
        tickets.push(ticket.clone());
        self.save(collections::TICKETS, &tickets)?;

        tracing::debug!(id = %ticket.id, "ticket submitted");

        Ok(Submission {
            password: password.expose().to_string(),
            ticket,
        })
    }

    /// Replaces the stored ticket matching `updated.id` wholesale.
    ///
    /// Returns `Ok(false)` when the id is unknown. No field validation
    /// happens here: callers pass a ticket obtained from a prior read,
    /// typically with only `status` changed, and any of the four
    /// statuses is accepted in any order.
    pub fn update_ticket(&self, updated: &Ticket) -> Result<bool, Error> {
        let mut tickets = self.tickets()?;
        let Some(slot) = tickets.iter_mut().find(|t| t.id == updated.id)
        else {
            return Ok(false);
        };

        *slot = updated.clone();
        self.save(collections::TICKETS, &tickets)?;
        Ok(true)
    }

    /// Appends a comment to the ticket's thread.
    ///
    /// Closed tickets reject further comments from either side. Admin
    /// authorship snapshots the admin's current name and title into the
    /// comment (a directory miss leaves those fields empty rather than
    /// failing) and records an `add_comment` activity entry.
    pub fn add_comment(
        &self,
        ticket_id: &Id,
        text: &str,
        author: Author<'_>,
    ) -> Result<Comment, AddCommentError> {
        use AddCommentError as E;

        let mut tickets = self.tickets()?;
        let ticket = tickets
            .iter_mut()
            .find(|t| &t.id == ticket_id)
            .ok_or(E::TicketNotFound)?;
        if ticket.status == Status::Closed {
            return Err(E::TicketClosed);
        }

        let (admin_username, admin_name, admin_title) = match author {
            Author::Reporter => (None, None, None),
            Author::Admin(username) => {
                let admin = self
                    .admins()?
                    .into_iter()
                    .find(|a| a.username == username);
                (
                    Some(username.to_string()),
                    admin.as_ref().map(|a| a.name.clone()),
                    admin.map(|a| a.title),
                )
            }
        };

        let comment = Comment {
            id: token::generate(token::ID_LEN),
            text: text.to_string(),
            is_admin: matches!(author, Author::Admin(_)),
            admin_username,
            admin_name,
            admin_title,
            created_at: OffsetDateTime::now_utc(),
        };

        ticket.comments.push(comment.clone());
        self.save(collections::TICKETS, &tickets)?;

        if let Author::Admin(username) = author {
            self.log_activity(
                username,
                log::Action::AddComment,
                Some(&format!("Added comment to ticket {ticket_id}")),
            )?;
        }

        Ok(comment)
    }
}

#[derive(Debug, From)]
pub enum AddCommentError {
    #[from]
    Store(Error),
    TicketClosed,
    TicketNotFound,
}
