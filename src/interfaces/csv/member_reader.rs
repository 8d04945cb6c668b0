use crate::application::roster::RosterManager;
use crate::domain::member::{parse_flag, MemberField};
use crate::error::{RegistrationError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a roster CSV, kept as raw strings until applied to a roster.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct MemberRecord {
    pub full_name: String,
    pub roll_no: String,
    pub email: String,
    pub branch: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub team_lead: Option<String>,
}

impl MemberRecord {
    /// Writes this record into the roster member at `index`.
    pub fn apply(&self, roster: &mut RosterManager, index: usize) -> Result<()> {
        roster.update_field(index, MemberField::FullName, &self.full_name)?;
        roster.update_field(index, MemberField::RollNo, &self.roll_no)?;
        roster.update_field(index, MemberField::Email, &self.email)?;
        roster.update_field(index, MemberField::Branch, &self.branch)?;
        if let Some(gender) = self.gender.as_deref().filter(|g| !g.trim().is_empty()) {
            roster.update_field(index, MemberField::Gender, gender)?;
        }
        if let Some(flag) = &self.team_lead {
            // Only a raised flag changes the roster.
            if parse_flag(flag)? {
                roster.update_field(index, MemberField::IsTeamLead, flag)?;
            }
        }
        Ok(())
    }
}

/// Reads team members from a CSV source.
///
/// Headers are `full_name, roll_no, email, branch` with optional `gender` and
/// `team_lead` columns. Whitespace is trimmed and short rows are tolerated.
pub struct MemberReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MemberReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes member records, one `Result` per row.
    pub fn members(self) -> impl Iterator<Item = Result<MemberRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RegistrationError::from))
    }
}
