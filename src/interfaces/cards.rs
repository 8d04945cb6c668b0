use crate::domain::branch;
use crate::domain::member::{Gender, TeamMember};
use crate::domain::registration::RegistrationData;
use crate::error::Result;
use rand::Rng;
use std::io::Write;

pub const EVENT_TITLE: &str = "TRAPPED: Dare to Escape";

const CARD_WIDTH: usize = 48;
const ID_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An 8-character participant ID printed at the foot of each card.
pub fn card_id<R: Rng>(rng: &mut R) -> String {
    (0..8)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect()
}

fn avatar(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "spider-heroine",
        Gender::Male | Gender::Other => "spider-hero",
    }
}

/// Renders participant ID cards as plain text.
pub struct CardWriter<W: Write> {
    out: W,
}

impl<W: Write> CardWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the card sheet header followed by one card per member, in roster order.
    pub fn write_cards(&mut self, data: &RegistrationData) -> Result<()> {
        writeln!(self.out, "Your ID Cards")?;
        writeln!(
            self.out,
            "Your team has been successfully registered for {EVENT_TITLE}!"
        )?;

        let mut rng = rand::thread_rng();
        for member in &data.members {
            writeln!(self.out)?;
            let id = card_id(&mut rng);
            self.write_card(member, &data.team_name, &id)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn write_card(&mut self, member: &TeamMember, team_name: &str, id: &str) -> Result<()> {
        let rule = "=".repeat(CARD_WIDTH);
        let thin = "-".repeat(CARD_WIDTH);

        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{EVENT_TITLE:^CARD_WIDTH$}")?;
        writeln!(self.out, "{:^CARD_WIDTH$}", "OFFICIAL PARTICIPANT")?;
        writeln!(self.out, "{thin}")?;

        if member.is_team_lead {
            writeln!(self.out, "{}  [Team Lead]", member.full_name)?;
        } else {
            writeln!(self.out, "{}", member.full_name)?;
        }
        writeln!(self.out, "Avatar:  {}", avatar(member.gender))?;
        writeln!(self.out, "Team:    {team_name}")?;
        writeln!(self.out, "Roll No: {}", member.roll_no)?;
        writeln!(self.out, "Branch:  {}", branch::display_name(&member.branch))?;

        writeln!(self.out, "{thin}")?;
        writeln!(self.out, "{:^CARD_WIDTH$}", format!("ID: {id}"))?;
        writeln!(self.out, "{rule}")?;
        Ok(())
    }
}
