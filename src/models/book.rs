//! Book model and related types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::attributes;
use super::ids::{BookId, MemberId};
use crate::{config::ParsePolicy, error::AppResult};

/// Every book is a single copy
pub const COPIES_PER_BOOK: u32 = 1;

/// Circulation state of a book, derived from its availability and borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookState {
    Available,
    Lent(MemberId),
}

/// Catalogued book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub copies: u32,
    pub available: bool,
    pub borrower: Option<MemberId>,
}

impl Book {
    pub fn state(&self) -> BookState {
        match (self.available, self.borrower) {
            (false, Some(member_id)) => BookState::Lent(member_id),
            _ => BookState::Available,
        }
    }

    pub(crate) fn lend_to(&mut self, member_id: MemberId) {
        self.available = false;
        self.borrower = Some(member_id);
    }

    pub(crate) fn give_back(&mut self) {
        self.available = true;
        self.borrower = None;
    }
}

/// Register book request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl NewBook {
    /// Build from `bookName`, `author` and `publicationYear` attributes
    pub fn from_attributes(
        attributes: &HashMap<String, String>,
        policy: ParsePolicy,
    ) -> AppResult<Self> {
        Ok(Self {
            title: attributes::text(attributes, "bookName"),
            author: attributes::text(attributes, "author"),
            publication_year: attributes::integer(attributes, "publicationYear", policy)?,
        })
    }

    pub(crate) fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            copies: COPIES_PER_BOOK,
            available: true,
            borrower: None,
        }
    }
}
