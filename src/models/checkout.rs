//! Checkout transaction model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{BookId, CheckoutId, MemberId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckoutState {
    Open,
    Closed,
}

/// One lending of a book to a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkout {
    pub id: CheckoutId,
    pub book_id: BookId,
    pub member_id: MemberId,
    /// Book title as it was at checkout time
    pub book_name: String,
    /// Member full name as it was at checkout time
    pub member_name: String,
    pub check_out_time: NaiveDate,
    pub check_in_time: Option<NaiveDate>,
}

impl Checkout {
    pub fn state(&self) -> CheckoutState {
        if self.check_in_time.is_some() {
            CheckoutState::Closed
        } else {
            CheckoutState::Open
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == CheckoutState::Open
    }
}

/// Check out request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreateCheckout {
    pub book_id: BookId,
    pub member_id: MemberId,
    /// Move the book away from its current borrower if it is lent
    #[serde(default)]
    pub force: bool,
}

impl CreateCheckout {
    pub fn new(book_id: BookId, member_id: MemberId) -> Self {
        Self {
            book_id,
            member_id,
            force: false,
        }
    }

    pub fn forced(self) -> Self {
        Self { force: true, ..self }
    }
}
