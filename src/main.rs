// ============================================================================
// SIGN-UP FORM CLIENT
// ============================================================================

// - Interactive form on the terminal (default)
// - One-shot submission from flags (`signup submit ...`)
// - Field validation before anything leaves the machine
// - Single POST to {SERVER_URL}/api/users/create
// - Transient success/error notifications

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use signup::{
    Config, Field, FormState, SignupClient, SubmitOutcome,
    page::{Action, Page},
    telemetry,
    validation::current_year,
};
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::info;

const EXIT_CREATED: u8 = 0;
const EXIT_SUBMIT_FAILED: u8 = 1;
const EXIT_INVALID: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "signup", about = "Create a user account from the terminal")]
struct Cli {
    /// Base URL of the account service (overrides SERVER_URL)
    #[arg(long)]
    server_url: Option<String>,

    /// How long notifications stay up, in milliseconds (overrides NOTIFICATION_DURATION_MS)
    #[arg(long)]
    notification_ms: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill the form from flags and submit it once
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long, default_value = "")]
    full_name: String,
    #[arg(long, default_value = "")]
    contact_number: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    day: String,
    #[arg(long, default_value = "")]
    month: String,
    #[arg(long, default_value = "")]
    year: String,
    #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
    #[arg(long, env = "SIGNUP_CONFIRM_PASSWORD", hide_env_values = true, default_value = "")]
    confirm_password: String,
}

impl SubmitArgs {
    fn into_form(self, form: &mut FormState) {
        form.set_field(Field::FullName, self.full_name);
        form.set_field(Field::ContactNumber, self.contact_number);
        form.set_field(Field::Email, self.email);
        form.set_field(Field::Day, self.day);
        form.set_field(Field::Month, signup::page::normalize_month(&self.month));
        form.set_field(Field::Year, self.year);
        form.set_field(Field::Password, self.password);
        form.set_field(Field::ConfirmPassword, self.confirm_password);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(url) = &cli.server_url {
        config.set_server_url(url)?;
    }
    if let Some(ms) = &cli.notification_ms {
        config.set_notification_ms(ms)?;
    }

    telemetry::init();

    let client = SignupClient::new(&config);
    info!("Account service: {}", client.endpoint());

    match cli.command {
        Some(Command::Submit(args)) => submit_once(args, &config, &client).await,
        None => interactive(&config, &client).await,
    }
}

async fn interactive(config: &Config, client: &SignupClient) -> anyhow::Result<ExitCode> {
    let stdin = io::stdin();
    let mut page = Page::new(stdin.lock(), io::stdout(), current_year());
    let mut form = FormState::new(config.notification_duration);

    page.show_header()?;
    loop {
        match page.fill(&mut form)? {
            Action::Quit => return Ok(ExitCode::SUCCESS),
            Action::Cancel => {
                form.cancel();
                continue;
            }
            Action::Submit => {}
        }

        match form.submit(client).await {
            SubmitOutcome::Invalid => page.show_errors(&form)?,
            SubmitOutcome::Created | SubmitOutcome::Failed => {
                if let Some(notification) = form.notification() {
                    page.show_notification(notification)?;
                }
                form.dismiss().await;
            }
            SubmitOutcome::Busy => {}
        }
    }
}

async fn submit_once(
    args: SubmitArgs,
    config: &Config,
    client: &SignupClient,
) -> anyhow::Result<ExitCode> {
    let mut form = FormState::new(config.notification_duration);
    args.into_form(&mut form);

    let mut page = Page::new(io::empty(), io::stdout(), current_year());
    let outcome = form.submit(client).await;
    match outcome {
        SubmitOutcome::Invalid => page.show_errors(&form)?,
        _ => {
            if let Some(notification) = form.notification() {
                page.show_notification(notification)?;
            }
        }
    }
    page.into_output().flush()?;

    Ok(ExitCode::from(exit_status(&outcome)))
}

/// Process status for a one-shot submission.
fn exit_status(outcome: &SubmitOutcome) -> u8 {
    match outcome {
        SubmitOutcome::Created => EXIT_CREATED,
        SubmitOutcome::Invalid => EXIT_INVALID,
        SubmitOutcome::Failed | SubmitOutcome::Busy => EXIT_SUBMIT_FAILED,
    }
}
