pub mod common;

use std::collections::HashSet;

use whistleblower_portal::db::ticket::Status;

#[test]
fn issues_credentials_and_starts_as_new() {
    let client = common::client();

    let submission = client
        .submit_ticket("Unsafe staffing", "Ward 4, night shift")
        .unwrap();

    assert!(submission.ticket.id.as_str().len() >= 8);
    assert!(submission.password.len() >= 16);
    assert_eq!(submission.ticket.status, Status::New);
    assert!(submission.ticket.comments.is_empty());

    let found = client
        .ticket_by_id_and_password(&submission.ticket.id, &submission.password)
        .unwrap()
        .expect("fresh credentials should retrieve the ticket");
    assert_eq!(found.title, "Unsafe staffing");
    assert_eq!(found.description, "Ward 4, night shift");
    assert_eq!(found.status, Status::New);
    assert!(found.comments.is_empty());
}

#[test]
fn generated_credentials_are_unique() {
    let client = common::client();

    let mut ids = HashSet::new();
    let mut passwords = HashSet::new();
    for n in 0..100 {
        let submission = client
            .submit_ticket(&format!("Report {n}"), "details")
            .unwrap();
        assert!(ids.insert(submission.ticket.id.clone()));
        assert!(passwords.insert(submission.password.clone()));
    }

    assert_eq!(client.tickets().unwrap().len(), 100);
}
