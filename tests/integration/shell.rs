//! End-to-end runs of the menu with scripted input

use std::io::Cursor;

use circulation_desk::{
    config::CirculationConfig,
    models::{BookId, CheckoutId, MemberId},
    seed,
    services::Services,
    shell::Shell,
};

fn run(services: Services, script: &str) -> (Services, String) {
    let mut shell = Shell::new(services, Cursor::new(script.to_string()), Vec::new());
    shell.run().unwrap();
    let (services, output) = shell.into_parts();
    (services, String::from_utf8(output).unwrap())
}

fn seeded() -> Services {
    let mut services = Services::default();
    seed::load(&mut services).unwrap();
    services
}

#[test]
fn test_exit_and_end_of_input() {
    let (_, output) = run(Services::default(), "9\n");
    assert_eq!(output.matches("Enter Your Choice: ").count(), 1);

    let (_, output) = run(Services::default(), "");
    assert!(output.contains("1. Add Member"));
}

#[test]
fn test_wrong_choice_keeps_going() {
    let (_, output) = run(Services::default(), "42\n9\n");
    assert!(output.contains("Wrong Choice!!!"));
    assert_eq!(output.matches("Enter Your Choice: ").count(), 2);
}

#[test]
fn test_add_member_and_book() {
    let script = "1\nAnn\nLee\n30\nX St\n2\nDune\nHerbert\n1965\n9\n";
    let (services, output) = run(Services::default(), script);

    assert!(output.contains("MemberID  First Name  Last Name  Age  Address  No. Books Lent"));
    assert!(output.contains("Dune"));
    assert_eq!(services.repository().members.len(), 1);
    let book = services.repository().books.get(BookId(1)).unwrap();
    assert_eq!(book.publication_year, 1965);
}

#[test]
fn test_bad_age_reported_and_not_stored() {
    let (services, output) = run(Services::default(), "1\nAnn\nLee\nabc\nX St\n5\n9\n");
    assert!(output.contains("Error [1]: Failed to parse age as an integer: \"abc\""));
    assert!(services.repository().members.is_empty());
}

#[test]
fn test_check_out_and_return() {
    let (services, output) = run(seeded(), "3\n2\n1\n8\n4\n1\n7\n10\n9\n");

    assert!(output.contains("Current Checkout View Table: "));
    assert!(output.contains("Checkout Transactions Table: "));
    assert!(output.contains("A Brief History of Time"));
    assert!(output.contains("Irfan Danish"));
    assert!(output.contains("All records consistent."));

    let repo = services.repository();
    assert!(repo.open_checkouts.is_empty());
    let logged = repo.checkouts.get(CheckoutId(1)).unwrap();
    assert_eq!(logged.book_id, BookId(2));
    assert_eq!(logged.member_id, MemberId(1));
    assert!(logged.check_in_time.is_some());
    assert!(repo.books.get(BookId(2)).unwrap().available);
}

#[test]
fn test_errors_are_not_fatal() {
    let script = "4\n99\n3\n1\n9\n3\n1\n1\n3\n1\n2\n3\nx\n9\n";
    let (services, output) = run(seeded(), script);

    assert!(output.contains("Error [2]: Not found: Checkout with id 99 not found"));
    assert!(output.contains("Error [3]: Invalid reference: Member with id 9 not found"));
    assert!(output.contains("Error [4]: Book 1 is already lent to member 1"));
    assert!(output.contains("Error [1]: Failed to parse book id as an integer: \"x\""));

    let repo = services.repository();
    assert_eq!(repo.checkouts.len(), 1);
    assert_eq!(repo.books.get(BookId(1)).unwrap().borrower, Some(MemberId(1)));
    assert!(repo.check_consistency().is_empty());
}

#[test]
fn test_transfer_prompt() {
    let config = CirculationConfig {
        allow_transfer: true,
        ..Default::default()
    };
    let mut services = Services::new(config);
    seed::load(&mut services).unwrap();

    let script = "3\n1\n1\nn\n3\n1\n2\ny\n9\n";
    let (services, output) = run(services, script);
    assert!(output.contains("Transfer if already lent (y/N): "));

    let repo = services.repository();
    assert_eq!(repo.checkouts.len(), 2);
    assert!(repo.checkouts.get(CheckoutId(1)).unwrap().check_in_time.is_some());
    assert_eq!(repo.books.get(BookId(1)).unwrap().borrower, Some(MemberId(2)));
    assert!(repo.members.get(MemberId(1)).unwrap().books_lent.is_empty());
    assert!(repo.check_consistency().is_empty());
}
