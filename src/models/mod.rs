//! Data models for the circulation desk

pub mod book;
pub mod checkout;
pub mod ids;
pub mod member;

mod attributes;

// Re-export commonly used types
pub use book::{Book, BookState, NewBook};
pub use checkout::{Checkout, CheckoutState, CreateCheckout};
pub use ids::{BookId, CheckoutId, EntityId, MemberId};
pub use member::{Member, NewMember};
