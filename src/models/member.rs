//! Member model and related types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::attributes;
use super::ids::{CheckoutId, MemberId};
use crate::{config::ParsePolicy, error::AppResult};

/// Registered library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub address: String,
    /// Open checkouts held by this member, in checkout order
    pub books_lent: Vec<CheckoutId>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Drop the first occurrence of a checkout from the lent list
    pub(crate) fn release(&mut self, checkout_id: CheckoutId) -> bool {
        match self.books_lent.iter().position(|id| *id == checkout_id) {
            Some(pos) => {
                self.books_lent.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Register member request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub address: String,
}

impl NewMember {
    /// Build from `firstName`, `lastName`, `age` and `address` attributes
    pub fn from_attributes(
        attributes: &HashMap<String, String>,
        policy: ParsePolicy,
    ) -> AppResult<Self> {
        Ok(Self {
            first_name: attributes::text(attributes, "firstName"),
            last_name: attributes::text(attributes, "lastName"),
            age: attributes::integer(attributes, "age", policy)?,
            address: attributes::text(attributes, "address"),
        })
    }

    pub(crate) fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            address: self.address,
            books_lent: Vec::new(),
        }
    }
}
