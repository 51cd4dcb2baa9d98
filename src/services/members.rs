//! Member registration service

use std::collections::HashMap;

use crate::{
    config::CirculationConfig,
    error::{AppError, AppResult},
    models::{Member, MemberId, NewMember},
    repository::Repository,
};

pub struct MembersService<'a> {
    config: &'a CirculationConfig,
    repository: &'a mut Repository,
}

impl<'a> MembersService<'a> {
    pub fn new(config: &'a CirculationConfig, repository: &'a mut Repository) -> Self {
        Self { config, repository }
    }

    /// Register a member with an empty lent list
    pub fn register_member(&mut self, member: NewMember) -> Member {
        let id = self.repository.members.next_id();
        tracing::debug!("Allocated member id {}", id);

        let member = member.into_member(id);
        self.repository.members.insert(id, member.clone());
        tracing::info!("Registered member {} ({})", id, member.full_name());
        member
    }

    /// Register a member from `firstName`, `lastName`, `age` and `address` attributes
    pub fn register_member_from_attributes(
        &mut self,
        attributes: &HashMap<String, String>,
    ) -> AppResult<Member> {
        let member = NewMember::from_attributes(attributes, self.config.parse_policy)
            .inspect_err(|e| tracing::warn!("Member registration rejected: {}", e))?;
        Ok(self.register_member(member))
    }

    pub fn get_member(&self, id: MemberId) -> AppResult<Member> {
        self.repository
            .members
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// All members, in registration order
    pub fn list_members(&self) -> Vec<Member> {
        self.repository.members.iter().cloned().collect()
    }
}
