//! Client Entry Point
//!
//! Wires configuration, logging and the HTTP services behind the
//! `tf-client` command line. Uses `anyhow` for top-level errors; library
//! errors keep their own types.

mod cli;

use std::sync::Arc;

use anyhow::{Context, bail};
use auth::application::{Navigator, SessionView};
use auth::domain::service::AuthService;
use auth::{AuthConfig, HttpAuthService, HttpUserService};
use clap::Parser;
use platform::http::ApiClient;
use platform::storage::{CredentialStore, FileCredentialStore};
use registration::domain::{Field, UserType};
use registration::{
    HttpRegistrationService, RegistrationConfig, RegistrationFormController, SubmitOutcome,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{AccountArgs, Cli, Command, RegisterCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "client=info,auth=info,registration=info,platform=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = ApiClient::new(&cli.http_config()).context("Invalid HTTP configuration")?;
    tracing::debug!(base_url = %client.base_url(), "API client ready");

    let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new(&cli.credentials_path));
    let auth_config = Arc::new(AuthConfig::default());
    let auth = Arc::new(HttpAuthService::new(client.clone(), store.clone()));
    let users = Arc::new(HttpUserService::new(client.clone(), store));

    match cli.command {
        Command::Login { email, password } => {
            if let Err(e) = auth.login(&email, &password).await {
                e.log();
                bail!("{}", e.to_app_error());
            }
            println!("Logged in as {email}");
        }
        Command::Logout => {
            auth.logout()?;
            println!("Logged out");
        }
        Command::Navigate { path } => {
            let navigator = Navigator::new(auth, users, auth_config);
            let navigation = navigator.navigate(&path).await;
            println!("{navigation}");
        }
        Command::Whoami => {
            let session = SessionView::new(auth, users, auth_config);
            session.start().await;
            let snapshot = session.snapshot();
            match (snapshot.logged_in, snapshot.user) {
                (false, _) => println!("Not logged in"),
                (true, None) => println!("Logged in (profile unavailable)"),
                (true, Some(user)) => {
                    println!("{} <{}> [{}]", user.display_name(), user.email, user.role);
                    if snapshot.is_admin {
                        println!("Administrator");
                    }
                }
            }
        }
        Command::Register { kind } => {
            let service = Arc::new(HttpRegistrationService::new(client));
            let controller = RegistrationFormController::with_system_clock(
                service,
                Arc::new(RegistrationConfig::default()),
            );
            fill_registration(&controller, &kind)?;

            match controller.submit().await {
                SubmitOutcome::Registered {
                    notice,
                    redirect_to,
                } => {
                    println!("{notice}");
                    println!("Next: {redirect_to}");
                }
                SubmitOutcome::Invalid(report) => {
                    for message in report.messages() {
                        eprintln!("- {message}");
                    }
                    bail!("Registration form is invalid");
                }
                SubmitOutcome::Busy => bail!("A registration is already in progress"),
                SubmitOutcome::Failed { message } => bail!(message),
            }
        }
    }

    Ok(())
}

fn fill_registration(
    controller: &RegistrationFormController<HttpRegistrationService>,
    kind: &RegisterCommand,
) -> anyhow::Result<()> {
    let account = match kind {
        RegisterCommand::Applicant(args) => {
            controller.select_user_type(UserType::Applicant);
            controller.set_text(Field::Surname, &args.surname)?;
            controller.set_text(Field::Gender, &args.gender)?;
            controller.set_text(Field::BirthDate, &args.birth_date)?;
            &args.account
        }
        RegisterCommand::Organization(args) => {
            controller.select_user_type(UserType::Organization);
            controller.set_text(Field::Description, &args.description)?;
            &args.account
        }
    };
    fill_account(controller, account)
}

fn fill_account(
    controller: &RegistrationFormController<HttpRegistrationService>,
    account: &AccountArgs,
) -> anyhow::Result<()> {
    let confirm = account.confirm_password.as_ref().unwrap_or(&account.password);
    controller.set_text(Field::Email, &account.email)?;
    controller.set_text(Field::Password, &account.password)?;
    controller.set_text(Field::ConfirmPassword, confirm)?;
    controller.set_text(Field::Name, &account.name)?;
    controller.set_terms(account.accept_terms);
    Ok(())
}
