use crate::error::RegistrationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(RegistrationError::InvalidGender(s.to_string())),
        }
    }
}

/// The editable fields of a [`TeamMember`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MemberField {
    FullName,
    RollNo,
    Email,
    Branch,
    Gender,
    IsTeamLead,
}

impl FromStr for MemberField {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fullName" | "full_name" => Ok(MemberField::FullName),
            "rollNo" | "roll_no" => Ok(MemberField::RollNo),
            "email" => Ok(MemberField::Email),
            "branch" => Ok(MemberField::Branch),
            "gender" => Ok(MemberField::Gender),
            "isTeamLead" | "is_team_lead" | "team_lead" => Ok(MemberField::IsTeamLead),
            other => Err(RegistrationError::InvalidField(other.to_string())),
        }
    }
}

/// A single participant on a team roster.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct TeamMember {
    pub full_name: String,
    pub roll_no: String,
    pub email: String,
    /// A value from the branch reference set (e.g. `cse`), not the display name.
    pub branch: String,
    pub gender: Gender,
    pub is_team_lead: bool,
}

impl TeamMember {
    /// An empty, non-lead member as added by the roster.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An empty member designated as team lead.
    pub fn empty_lead() -> Self {
        Self {
            is_team_lead: true,
            ..Self::default()
        }
    }

    /// The team-lead flag as sent to the spreadsheet.
    pub fn team_lead_label(&self) -> &'static str {
        if self.is_team_lead { "Yes" } else { "No" }
    }
}

/// Parses the string-typed boolean used for the team-lead flag at input edges.
pub fn parse_flag(value: &str) -> Result<bool, RegistrationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" | "" => Ok(false),
        _ => Err(RegistrationError::InvalidBoolean(value.to_string())),
    }
}
