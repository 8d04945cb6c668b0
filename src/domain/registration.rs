use super::member::TeamMember;
use serde::{Deserialize, Serialize};

pub const MAX_TEAM_MEMBERS: usize = 3;

/// A team and its ordered roster.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct RegistrationData {
    pub team_name: String,
    pub members: Vec<TeamMember>,
}

impl RegistrationData {
    /// Flattens the registration into the field list the spreadsheet webhook expects.
    ///
    /// Member keys are 1-indexed by roster position: `member1Name`, `member1RollNo`,
    /// and so on, with the team-lead flag sent as `Yes`/`No`.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(1 + self.members.len() * 6);
        fields.push(("teamName".to_string(), self.team_name.clone()));

        for (i, member) in self.members.iter().enumerate() {
            let n = i + 1;
            fields.push((format!("member{n}Name"), member.full_name.clone()));
            fields.push((format!("member{n}RollNo"), member.roll_no.clone()));
            fields.push((format!("member{n}Email"), member.email.clone()));
            fields.push((format!("member{n}Branch"), member.branch.clone()));
            fields.push((format!("member{n}Gender"), member.gender.to_string()));
            fields.push((
                format!("member{n}IsTeamLead"),
                member.team_lead_label().to_string(),
            ));
        }

        fields
    }

    pub fn team_lead(&self) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.is_team_lead)
    }
}
