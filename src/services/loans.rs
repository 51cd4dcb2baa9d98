//! Checkout and check-in service

use chrono::NaiveDate;

use super::Clock;
use crate::{
    config::CirculationConfig,
    error::{AppError, AppResult},
    models::{BookState, Checkout, CheckoutId, CreateCheckout, MemberId},
    repository::Repository,
};

pub struct LoansService<'a> {
    config: &'a CirculationConfig,
    clock: &'a dyn Clock,
    repository: &'a mut Repository,
}

impl<'a> LoansService<'a> {
    pub fn new(
        config: &'a CirculationConfig,
        clock: &'a dyn Clock,
        repository: &'a mut Repository,
    ) -> Self {
        Self {
            config,
            clock,
            repository,
        }
    }

    /// Lend a book to a member.
    ///
    /// Both ids must resolve. A book that is already lent is refused unless
    /// the request is forced and transfers are enabled, in which case the
    /// current checkout is closed before the new one is opened. Nothing is
    /// written until every check has passed.
    pub fn check_out(&mut self, request: CreateCheckout) -> AppResult<Checkout> {
        let book = self.repository.books.get(request.book_id).ok_or_else(|| {
            AppError::InvalidReference(format!("Book with id {} not found", request.book_id))
        })?;
        let member = self.repository.members.get(request.member_id).ok_or_else(|| {
            AppError::InvalidReference(format!("Member with id {} not found", request.member_id))
        })?;

        let transferred = match book.state() {
            BookState::Available => None,
            BookState::Lent(holder) => {
                if !(request.force && self.config.allow_transfer) {
                    tracing::warn!(
                        "Checkout refused: book {} is lent to member {}",
                        book.id,
                        holder
                    );
                    return Err(AppError::AlreadyLent {
                        book_id: book.id,
                        member_id: holder,
                    });
                }
                self.repository
                    .open_checkouts
                    .iter()
                    .find(|c| c.book_id == book.id)
                    .map(|c| c.id)
            }
        };

        let book_name = book.title.clone();
        let member_name = member.full_name();
        let today = self.clock.today();

        if let Some(previous) = transferred {
            if let Some(closed) = self.close(previous, today) {
                tracing::info!(
                    "Book {} transferred from member {} to member {}",
                    request.book_id,
                    closed.member_id,
                    request.member_id
                );
            }
        }

        let id = self.repository.checkouts.next_id();
        tracing::debug!("Allocated checkout id {}", id);

        let checkout = Checkout {
            id,
            book_id: request.book_id,
            member_id: request.member_id,
            book_name,
            member_name,
            check_out_time: today,
            check_in_time: None,
        };
        self.repository.checkouts.insert(id, checkout.clone());
        self.repository.open_checkouts.insert(id, checkout.clone());
        if let Some(member) = self.repository.members.get_mut(request.member_id) {
            member.books_lent.push(id);
        }
        if let Some(book) = self.repository.books.get_mut(request.book_id) {
            book.lend_to(request.member_id);
        }

        tracing::info!(
            "Checkout {} opened: book {} to member {}",
            id,
            request.book_id,
            request.member_id
        );
        Ok(checkout)
    }

    /// Return a lent book, closing its checkout
    pub fn check_in(&mut self, checkout_id: CheckoutId) -> AppResult<Checkout> {
        let today = self.clock.today();
        let closed = self.close(checkout_id, today).ok_or_else(|| {
            tracing::warn!("Invalid checkout id {}", checkout_id);
            AppError::NotFound(format!("Checkout with id {} not found", checkout_id))
        })?;

        tracing::info!(
            "Checkout {} closed: book {} returned by member {}",
            closed.id,
            closed.book_id,
            closed.member_id
        );
        Ok(closed)
    }

    /// Close an open checkout. Returns `None`, having changed nothing, when
    /// the id is not in the open view.
    fn close(&mut self, checkout_id: CheckoutId, today: NaiveDate) -> Option<Checkout> {
        let open = self.repository.open_checkouts.remove(checkout_id)?;

        if let Some(book) = self.repository.books.get_mut(open.book_id) {
            book.give_back();
        }
        if let Some(member) = self.repository.members.get_mut(open.member_id) {
            member.release(checkout_id);
        }

        let logged = self
            .repository
            .checkouts
            .get_mut(checkout_id)
            .map(|logged| {
                logged.check_in_time = Some(today);
                logged.clone()
            })
            .unwrap_or(Checkout {
                check_in_time: Some(today),
                ..open
            });
        Some(logged)
    }

    pub fn get_checkout(&self, id: CheckoutId) -> AppResult<Checkout> {
        self.repository
            .checkouts
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Checkout with id {} not found", id)))
    }

    /// Open checkouts held by a member, in checkout order
    pub fn get_member_loans(&self, member_id: MemberId) -> AppResult<Vec<Checkout>> {
        let member = self
            .repository
            .members
            .get(member_id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", member_id)))?;

        Ok(member
            .books_lent
            .iter()
            .filter_map(|id| self.repository.open_checkouts.get(*id))
            .cloned()
            .collect())
    }

    /// Every checkout ever opened, closed ones included
    pub fn list_history(&self) -> Vec<Checkout> {
        self.repository.checkouts.iter().cloned().collect()
    }

    /// Checkouts not yet checked in
    pub fn list_open(&self) -> Vec<Checkout> {
        self.repository.open_checkouts.iter().cloned().collect()
    }

    pub fn count_open(&self) -> usize {
        self.repository.open_checkouts.len()
    }
}
