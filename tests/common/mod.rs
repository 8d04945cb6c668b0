use std::io::Write;
use tempfile::NamedTempFile;
use trapped_registration::domain::member::{Gender, TeamMember};
use trapped_registration::domain::registration::RegistrationData;

pub const HEADER: &str = "full_name, roll_no, email, branch, gender, team_lead";

/// Writes a roster CSV with the given data rows under the standard header.
pub fn roster_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn member(name: &str, lead: bool) -> TeamMember {
    TeamMember {
        full_name: name.to_string(),
        roll_no: "2105001".to_string(),
        email: format!("{}@kiit.ac.in", name.to_lowercase()),
        branch: "cse".to_string(),
        gender: Gender::Female,
        is_team_lead: lead,
    }
}

pub fn solo_team() -> RegistrationData {
    RegistrationData {
        team_name: "Solo".to_string(),
        members: vec![member("Asha", true)],
    }
}
