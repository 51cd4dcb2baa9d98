//! In-memory entity store
//!
//! Holds the three collections plus the open-checkout view. No business
//! rules live here; the services keep the collections consistent.

pub mod table;

use std::collections::HashSet;

use crate::models::{Book, BookId, Checkout, CheckoutId, Member, MemberId};

pub use table::{next_id, Table};

/// Single source of truth for members, books and checkouts
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub members: Table<MemberId, Member>,
    pub books: Table<BookId, Book>,
    /// Permanent transaction log, closed checkouts included
    pub checkouts: Table<CheckoutId, Checkout>,
    /// Checkouts not yet checked in
    pub open_checkouts: Table<CheckoutId, Checkout>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the cross-collection invariants, returning one line per violation
    pub fn check_consistency(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for open in self.open_checkouts.iter() {
            match self.checkouts.get(open.id) {
                Some(logged) if logged.book_id == open.book_id
                    && logged.member_id == open.member_id
                    && logged.check_in_time.is_none()
                    && open.check_in_time.is_none() => {}
                Some(_) => violations.push(format!(
                    "Open checkout {} does not match the transaction log",
                    open.id
                )),
                None => violations.push(format!(
                    "Open checkout {} is missing from the transaction log",
                    open.id
                )),
            }
        }

        for logged in self.checkouts.iter() {
            if logged.is_open() && !self.open_checkouts.contains(logged.id) {
                violations.push(format!(
                    "Checkout {} has no check-in time but is not in the open view",
                    logged.id
                ));
            }
        }

        for book in self.books.iter() {
            let lending: Vec<&Checkout> = self
                .open_checkouts
                .iter()
                .filter(|c| c.book_id == book.id)
                .collect();
            if book.available == lending.is_empty() {
                match lending.as_slice() {
                    [] => {}
                    [only] if book.borrower == Some(only.member_id) => {}
                    [_] => violations.push(format!(
                        "Book {} borrower {:?} does not match its open checkout",
                        book.id, book.borrower
                    )),
                    _ => violations.push(format!(
                        "Book {} has {} open checkouts",
                        book.id,
                        lending.len()
                    )),
                }
                if book.available && book.borrower.is_some() {
                    violations.push(format!("Book {} is available but has a borrower", book.id));
                }
            } else {
                violations.push(format!(
                    "Book {} available={} but has {} open checkouts",
                    book.id,
                    book.available,
                    lending.len()
                ));
            }
        }

        for member in self.members.iter() {
            let lent: HashSet<CheckoutId> = member.books_lent.iter().copied().collect();
            let open: HashSet<CheckoutId> = self
                .open_checkouts
                .iter()
                .filter(|c| c.member_id == member.id)
                .map(|c| c.id)
                .collect();
            if lent != open || lent.len() != member.books_lent.len() {
                violations.push(format!(
                    "Member {} lent list {:?} does not match open checkouts {:?}",
                    member.id, member.books_lent, open
                ));
            }
        }

        violations
    }
}
