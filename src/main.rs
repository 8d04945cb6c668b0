use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use trapped_registration::application::dispatcher::{SubmissionDispatcher, SubmissionStrategy};
use trapped_registration::application::roster::RosterManager;
use trapped_registration::config::RegistrationConfig;
use trapped_registration::domain::ports::{Delivery, WebhookChannelBox};
use trapped_registration::infrastructure::in_memory::RecordingChannel;
use trapped_registration::infrastructure::webhook::{CallbackChannel, DirectPostChannel};
use trapped_registration::interfaces::cards::CardWriter;
use trapped_registration::interfaces::csv::member_reader::MemberReader;
use trapped_registration::telemetry;

#[derive(Parser)]
#[command(author, version, about = "Register a team for TRAPPED: Dare to Escape", long_about = None)]
struct Cli {
    /// Team members CSV file (full_name, roll_no, email, branch[, gender, team_lead])
    input: PathBuf,

    /// Name of the team
    #[arg(long)]
    team_name: String,

    /// Position (starting at 1) of the team lead; overrides the CSV team_lead column
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    lead: Option<usize>,

    /// Submission strategy: direct or dual
    #[arg(long)]
    strategy: Option<SubmissionStrategy>,

    /// Spreadsheet webhook URL
    #[arg(long)]
    webhook_url: Option<String>,

    /// Configuration file (defaults to ./trapped.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep the submission local instead of contacting the webhook
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RegistrationConfig::load_from(path).into_diagnostic()?,
        None => RegistrationConfig::load().into_diagnostic()?,
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(url) = cli.webhook_url {
        config.webhook_url = url;
    }
    telemetry::init_logging(config.log_format);

    // Build the roster from the CSV
    let mut roster = RosterManager::new();
    roster.set_team_name(cli.team_name);

    let file = File::open(&cli.input).into_diagnostic()?;
    let mut loaded = 0;
    for (row, record) in MemberReader::new(file).members().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Error reading member on row {}: {}", row + 1, e);
                continue;
            }
        };

        // Edits go to a scratch copy so a rejected row leaves no half-filled member
        let mut next = roster.clone();
        let applied = if loaded == 0 {
            Ok(0)
        } else {
            next.add_member()
        }
        .and_then(|index| record.apply(&mut next, index));

        match applied {
            Ok(()) => {
                roster = next;
                loaded += 1;
            }
            Err(e) => eprintln!("Skipping member {}: {}", record.full_name, e),
        }
    }

    if let Some(lead) = cli.lead {
        roster.set_team_lead(lead - 1).into_diagnostic()?;
    }

    let registration = roster.finalize().into_diagnostic()?;

    // Submit, then show the cards whatever the delivery outcome
    let dispatcher = if cli.dry_run {
        dispatcher_for(
            config.strategy,
            Box::new(RecordingChannel::new(Delivery::Sent)),
            Box::new(RecordingChannel::new(Delivery::Confirmed)),
        )
    } else {
        let client = reqwest::Client::builder()
            .user_agent(concat!("trapped-registration/", env!("CARGO_PKG_VERSION")))
            .timeout(config.fallback_window())
            .build()
            .into_diagnostic()?;
        dispatcher_for(
            config.strategy,
            Box::new(DirectPostChannel::new(client.clone(), &config.webhook_url)),
            Box::new(CallbackChannel::new(client, &config.webhook_url)),
        )
    }
    .with_window(config.fallback_window());

    let outcome = dispatcher.submit(&registration).await;
    eprintln!("{}: {}", outcome.notice.title(), outcome.notice.description());

    if outcome.proceed {
        let stdout = io::stdout();
        let mut writer = CardWriter::new(stdout.lock());
        writer.write_cards(&registration).into_diagnostic()?;
    }

    Ok(())
}

fn dispatcher_for(
    strategy: SubmissionStrategy,
    direct: WebhookChannelBox,
    fallback: WebhookChannelBox,
) -> SubmissionDispatcher {
    match strategy {
        SubmissionStrategy::Direct => SubmissionDispatcher::direct(direct),
        SubmissionStrategy::Dual => SubmissionDispatcher::dual_channel(direct, fallback),
    }
}
