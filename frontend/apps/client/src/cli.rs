//! Command-line interface

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use platform::http::{DEFAULT_BASE_URL, HttpConfig};

#[derive(Parser, Debug)]
#[command(
    name = "tf-client",
    about = "Job portal client: registration, login and guarded navigation"
)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "TF_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// File holding the access token
    #[arg(long, env = "TF_CREDENTIALS_PATH", default_value = ".tf-client/token")]
    pub credentials_path: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, env = "TF_HTTP_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Default::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the access token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TF_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// Resolve a path and run its guard
    Navigate { path: String },
    /// Show the current session
    Whoami,
    /// Create an account
    Register {
        #[command(subcommand)]
        kind: RegisterCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum RegisterCommand {
    /// Job seeker (candidato)
    Applicant(ApplicantArgs),
    /// Employer (empresa)
    Organization(OrganizationArgs),
}

#[derive(Args, Debug)]
pub struct AccountArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "TF_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Defaults to the password
    #[arg(long)]
    pub confirm_password: Option<String>,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub accept_terms: bool,
}

#[derive(Args, Debug)]
pub struct ApplicantArgs {
    #[command(flatten)]
    pub account: AccountArgs,
    #[arg(long)]
    pub surname: String,
    /// masculino, femenino, otro (or male, female, other)
    #[arg(long)]
    pub gender: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub birth_date: String,
}

#[derive(Args, Debug)]
pub struct OrganizationArgs {
    #[command(flatten)]
    pub account: AccountArgs,
    #[arg(long)]
    pub description: String,
}
