//! Circulation engine tests through the public API

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use circulation_desk::{
    config::{CirculationConfig, ParsePolicy},
    models::{BookId, BookState, CheckoutId, CreateCheckout, MemberId, NewBook, NewMember},
    services::{Clock, Services},
    AppError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn services() -> Services {
    Services::with_clock(CirculationConfig::default(), FixedClock(today()))
}

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn member(first: &str, last: &str) -> NewMember {
    NewMember {
        first_name: first.to_string(),
        last_name: last.to_string(),
        age: 30,
        address: "X St".to_string(),
    }
}

fn book(title: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Someone".to_string(),
        publication_year: 2000,
    }
}

#[test]
fn test_dune_scenario() {
    let mut services = services();

    let dune = services.catalog().register_book(NewBook {
        title: "Dune".into(),
        author: "Herbert".into(),
        publication_year: 1965,
    });
    assert_eq!(dune.id, BookId(1));
    assert!(dune.available);

    let ann = services.members().register_member(NewMember {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        age: 30,
        address: "X St".into(),
    });
    assert_eq!(ann.id, MemberId(1));
    assert!(ann.books_lent.is_empty());

    let checkout = services
        .loans()
        .check_out(CreateCheckout::new(BookId(1), MemberId(1)))
        .unwrap();
    assert_eq!(checkout.id, CheckoutId(1));
    let dune = services.catalog().get_book(BookId(1)).unwrap();
    assert!(!dune.available);
    assert_eq!(dune.borrower, Some(MemberId(1)));
    assert_eq!(
        services.members().get_member(MemberId(1)).unwrap().books_lent,
        vec![CheckoutId(1)]
    );

    services.loans().check_in(CheckoutId(1)).unwrap();
    let dune = services.catalog().get_book(BookId(1)).unwrap();
    assert!(dune.available);
    assert_eq!(dune.borrower, None);
    assert!(services
        .members()
        .get_member(MemberId(1))
        .unwrap()
        .books_lent
        .is_empty());

    let logged = services.loans().get_checkout(CheckoutId(1)).unwrap();
    assert_eq!(logged.check_in_time, Some(today()));
    assert!(services.loans().list_open().is_empty());
    assert_eq!(services.loans().list_history().len(), 1);
}

#[test]
fn test_check_in_on_empty_store() {
    let mut services = services();
    let err = services.loans().check_in(CheckoutId(99)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(services.loans().list_history().is_empty());
    assert!(services.repository().members.is_empty());
    assert!(services.repository().books.is_empty());
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn test_ids_are_sequential(#[case] n: u32) {
    let mut services = services();
    for i in 0..n {
        services.members().register_member(member("M", &i.to_string()));
        services.catalog().register_book(book(&i.to_string()));
    }

    let member_ids: Vec<MemberId> = services.repository().members.ids().collect();
    let book_ids: Vec<BookId> = services.repository().books.ids().collect();
    assert_eq!(member_ids, (1..=n).map(MemberId).collect::<Vec<_>>());
    assert_eq!(book_ids, (1..=n).map(BookId).collect::<Vec<_>>());
}

#[test]
fn test_checkout_ids_not_reused_after_check_in() {
    let mut services = services();
    services.catalog().register_book(book("A"));
    services.members().register_member(member("Ann", "Lee"));

    for expected in 1..=3 {
        let checkout = services
            .loans()
            .check_out(CreateCheckout::new(BookId(1), MemberId(1)))
            .unwrap();
        assert_eq!(checkout.id, CheckoutId(expected));
        services.loans().check_in(checkout.id).unwrap();
    }
    assert_eq!(services.loans().list_history().len(), 3);
    assert!(services.loans().list_open().is_empty());
}

#[test]
fn test_snapshot_survives_later_changes() {
    let mut services = services();
    services.catalog().register_book(book("A"));
    services.members().register_member(member("Ann", "Lee"));
    let checkout = services
        .loans()
        .check_out(CreateCheckout::new(BookId(1), MemberId(1)))
        .unwrap();

    let json = serde_json::to_value(&checkout).unwrap();
    assert_eq!(json["book_name"], "A");
    assert_eq!(json["member_name"], "Ann Lee");
    assert_eq!(json["check_out_time"], "2024-06-01");
    assert!(json["check_in_time"].is_null());
}

#[rstest]
#[case::strict(ParsePolicy::Strict, None)]
#[case::lenient(ParsePolicy::Lenient, Some(0))]
fn test_bad_age(#[case] parse_policy: ParsePolicy, #[case] stored_age: Option<i32>) {
    let config = CirculationConfig {
        parse_policy,
        ..Default::default()
    };
    let mut services = Services::with_clock(config, FixedClock(today()));
    let result = services.members().register_member_from_attributes(&attrs(&[
        ("firstName", "Ann"),
        ("lastName", "Lee"),
        ("age", "thirty"),
        ("address", "X St"),
    ]));

    match stored_age {
        None => {
            assert!(matches!(result, Err(AppError::Parse { field: "age", .. })));
            assert!(services.repository().members.is_empty());
        }
        Some(age) => {
            let member = result.unwrap();
            assert_eq!(member.age, age);
            assert_eq!(member.id, MemberId(1));
        }
    }
}

#[test]
fn test_bad_year_rejected_before_allocating() {
    let mut services = services();
    let err = services
        .catalog()
        .register_book_from_attributes(&attrs(&[("bookName", "Dune"), ("publicationYear", "")]))
        .unwrap_err();
    assert!(matches!(err, AppError::Parse { field: "publicationYear", .. }));

    let book = services
        .catalog()
        .register_book_from_attributes(&attrs(&[
            ("bookName", "Dune"),
            ("author", "Herbert"),
            ("publicationYear", "1965"),
        ]))
        .unwrap();
    assert_eq!(book.id, BookId(1));
    assert_eq!(book.publication_year, 1965);
}

/// Lent-list and availability stay in step with the open view over a long
/// random run of checkouts and check-ins
#[test]
fn test_invariants_hold_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut services = services();
    for i in 0..5 {
        services.catalog().register_book(book(&format!("B{}", i)));
        services.members().register_member(member("M", &i.to_string()));
    }

    for _ in 0..500 {
        if rng.gen_bool(0.5) {
            let request = CreateCheckout::new(
                BookId(rng.gen_range(1..=6)),
                MemberId(rng.gen_range(1..=6)),
            );
            let _ = services.loans().check_out(request);
        } else {
            let next = services.repository().checkouts.next_id();
            let _ = services.loans().check_in(CheckoutId(rng.gen_range(1..=next.0)));
        }

        let repo = services.repository();
        assert_eq!(repo.check_consistency(), Vec::<String>::new());

        for book in repo.books.iter() {
            let open = repo.open_checkouts.iter().find(|c| c.book_id == book.id);
            match (book.state(), open) {
                (BookState::Available, None) => {}
                (BookState::Lent(member_id), Some(c)) => assert_eq!(member_id, c.member_id),
                other => panic!("book {} out of step: {:?}", book.id, other),
            }
        }
        for member in repo.members.iter() {
            let lent: HashSet<CheckoutId> = member.books_lent.iter().copied().collect();
            let open: HashSet<CheckoutId> = repo
                .open_checkouts
                .iter()
                .filter(|c| c.member_id == member.id)
                .map(|c| c.id)
                .collect();
            assert_eq!(lent, open);
        }
    }
}
