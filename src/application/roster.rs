use crate::domain::member::{parse_flag, MemberField, TeamMember};
use crate::domain::registration::{RegistrationData, MAX_TEAM_MEMBERS};
use crate::error::{RegistrationError, Result};
use tracing::{debug, warn};

/// Owns the team roster while it is being edited.
///
/// `RosterManager` enforces the roster's shape at every step: between one and
/// [`MAX_TEAM_MEMBERS`] members, and exactly one team lead. Field contents are
/// only checked by [`RosterManager::validate`], right before submission.
#[derive(Debug, Clone)]
pub struct RosterManager {
    data: RegistrationData,
}

impl Default for RosterManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterManager {
    /// Creates a roster with a single empty member who is the team lead.
    pub fn new() -> Self {
        Self {
            data: RegistrationData {
                team_name: String::new(),
                members: vec![TeamMember::empty_lead()],
            },
        }
    }

    pub fn team_name(&self) -> &str {
        &self.data.team_name
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.data.members
    }

    pub fn data(&self) -> &RegistrationData {
        &self.data
    }

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        self.data.team_name = name.into();
    }

    /// Appends an empty, non-lead member.
    ///
    /// Returns the new member's index, or [`RegistrationError::CapacityReached`]
    /// without touching the roster when it is already full.
    pub fn add_member(&mut self) -> Result<usize> {
        if self.data.members.len() >= MAX_TEAM_MEMBERS {
            warn!(max = MAX_TEAM_MEMBERS, "Maximum team size reached");
            return Err(RegistrationError::CapacityReached(MAX_TEAM_MEMBERS));
        }
        self.data.members.push(TeamMember::empty());
        debug!(size = self.data.members.len(), "Team member added");
        Ok(self.data.members.len() - 1)
    }

    /// Removes the member at `index`.
    ///
    /// Returns `false` when the roster is already at its single-member floor,
    /// whatever `index` is. If the removed member was the lead, the new first
    /// member takes over.
    pub fn remove_member(&mut self, index: usize) -> Result<bool> {
        if self.data.members.len() <= 1 {
            return Ok(false);
        }
        self.check_index(index)?;

        let removed = self.data.members.remove(index);
        if removed.is_team_lead {
            self.data.members[0].is_team_lead = true;
        }
        debug!(index, size = self.data.members.len(), "Team member removed");
        Ok(true)
    }

    /// Replaces a single field on the member at `index`.
    ///
    /// Setting the team-lead flag to `true` goes through [`Self::set_team_lead`];
    /// clearing it on the current lead is rejected since the roster would be left
    /// without one.
    pub fn update_field(&mut self, index: usize, field: MemberField, value: &str) -> Result<()> {
        self.check_index(index)?;

        match field {
            MemberField::IsTeamLead => {
                if parse_flag(value)? {
                    self.set_team_lead(index)?;
                } else if self.data.members[index].is_team_lead {
                    return Err(RegistrationError::LeadRequired);
                }
            }
            MemberField::Gender => {
                self.data.members[index].gender = value.parse()?;
            }
            MemberField::FullName => self.data.members[index].full_name = value.to_string(),
            MemberField::RollNo => self.data.members[index].roll_no = value.to_string(),
            MemberField::Email => self.data.members[index].email = value.to_string(),
            MemberField::Branch => self.data.members[index].branch = value.to_string(),
        }
        Ok(())
    }

    /// Makes the member at `index` the only team lead.
    pub fn set_team_lead(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        for (i, member) in self.data.members.iter_mut().enumerate() {
            member.is_team_lead = i == index;
        }
        Ok(())
    }

    /// Checks the roster is ready for submission, reporting only the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.data.team_name.trim().is_empty() {
            return Err(invalid("Team name required", "Please enter a team name"));
        }

        for (i, member) in self.data.members.iter().enumerate() {
            if member.full_name.trim().is_empty() {
                return Err(invalid(
                    "Full name required",
                    format!("Please enter full name for member {}", i + 1),
                ));
            }
            if member.roll_no.trim().is_empty() {
                return Err(invalid(
                    "Roll number required",
                    format!("Please enter roll number for {}", member.full_name),
                ));
            }
            if member.email.trim().is_empty() || !member.email.contains('@') {
                return Err(invalid(
                    "Valid email required",
                    format!("Please enter a valid email for {}", member.full_name),
                ));
            }
            if member.branch.trim().is_empty() {
                return Err(invalid(
                    "Branch required",
                    format!("Please select a branch for {}", member.full_name),
                ));
            }
        }

        if !self.data.members.iter().any(|m| m.is_team_lead) {
            return Err(invalid(
                "Team lead required",
                "Please designate one member as the team lead",
            ));
        }

        Ok(())
    }

    /// Validates and hands out the finished registration.
    pub fn finalize(&self) -> Result<RegistrationData> {
        self.validate()?;
        Ok(self.data.clone())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.data.members.len();
        if index >= len {
            return Err(RegistrationError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}

fn invalid(title: &str, description: impl Into<String>) -> RegistrationError {
    RegistrationError::Validation {
        title: title.to_string(),
        description: description.into(),
    }
}
