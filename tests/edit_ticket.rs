pub mod common;

use whistleblower_portal::db::ticket::{Id, Status};

#[test]
fn replaces_the_stored_record_wholesale() {
    let client = common::client();
    let submission = client.submit_ticket("Report", "details").unwrap();

    let mut ticket = submission.ticket;
    ticket.status = Status::InProgress;
    assert!(client.update_ticket(&ticket).unwrap());

    let stored = client.ticket_by_id(&ticket.id).unwrap().unwrap();
    assert_eq!(stored, ticket);
}

#[test]
fn fails_for_an_unknown_id() {
    let client = common::client();
    let submission = client.submit_ticket("Report", "details").unwrap();

    let mut ticket = submission.ticket;
    ticket.id = Id::from("unknown1");
    ticket.status = Status::Resolved;
    assert!(!client.update_ticket(&ticket).unwrap());

    // The original record is untouched.
    let stored = client.tickets().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, Status::New);
}

#[test]
fn accepts_any_status_in_any_order() {
    let client = common::client();
    let mut ticket = client.submit_ticket("Report", "details").unwrap().ticket;

    for status in [
        Status::Closed,
        Status::New,
        Status::Resolved,
        Status::InProgress,
    ] {
        ticket.status = status;
        assert!(client.update_ticket(&ticket).unwrap());
        let stored = client.ticket_by_id(&ticket.id).unwrap().unwrap();
        assert_eq!(stored.status, status);
    }
}
