use std::path::PathBuf;
use std::sync::Arc;

use auditshield_client::auth::{AuthError, CurrentUser, Role};
use auditshield_client::config::{ClientConfig, ConfigError};
use auditshield_client::error::ErrorCode;
use auditshield_client::guards::{GuardOutcome, authorize};
use auditshield_client::http::ApiError;
use auditshield_client::nav::LoggingNavigator;
use auditshield_client::pipeline::Pipeline;
use auditshield_client::store::{FileStore, KeyValueStore, StoreError};
use auditshield_client::theme::Theme;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid query parameter `{0}`; expected key=value")]
    InvalidParam(String),
    #[error("unknown demo role `{0}`; expected admin or hr")]
    UnknownDemoRole(String),
    #[error("write {path} failed: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Auth(e) => e.error_code(),
            Self::Api(e) => e.error_code(),
            Self::InvalidParam(_) => "E_CLI_PARAM",
            Self::UnknownDemoRole(_) => "E_CLI_DEMO_ROLE",
            Self::Write { .. } => "E_CLI_WRITE",
            Self::InvalidJson(_) => "E_CLI_JSON",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "auditshield", about = "AuditShield console session and API client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login {
        #[arg(long, env = "AUDITSHIELD_EMAIL")]
        email: String,
        #[arg(long, env = "AUDITSHIELD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Start an offline demo session served from fixtures.
    Demo {
        #[arg(long, default_value = "admin")]
        role: String,
    },
    /// End the session and revoke the refresh token.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// GET an API path (relative to the API root) and print the JSON.
    Get {
        path: String,
        /// Query parameter as key=value; repeatable.
        #[arg(short = 'q', long = "query")]
        query: Vec<String>,
    },
    /// Download a binary payload to a file.
    Download {
        path: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Check whether navigating to a console path is allowed.
    Guard { path: String },
    /// Show or toggle the theme preference.
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("[{}] {e}", e.error_code());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.store_path)?);
    let pipeline = Pipeline::new(&config, Arc::clone(&kv), Arc::new(LoggingNavigator))?;
    let session = &pipeline.session;

    match cli.command {
        Command::Login { email, password } => {
            let auth = session.login(&email, &password).await?;
            println!("signed in as {} ({})", auth.user.full_name, auth.user.role);
        }
        Command::Demo { role } => {
            let user = match role.parse::<Role>() {
                Ok(Role::Admin) => CurrentUser::demo_admin(),
                Ok(Role::Hr) => CurrentUser::demo_hr(),
                _ => return Err(CliError::UnknownDemoRole(role)),
            };
            session.login_demo(user.clone())?;
            println!("demo session started as {} ({})", user.email, user.role);
        }
        Command::Logout => {
            if let Some(revoke) = session.logout() {
                let _ = revoke.await;
            }
            println!("signed out");
        }
        Command::Whoami => {
            let body = match session.current_user() {
                Some(user) => json!({
                    "user": user,
                    "demo": session.is_demo(),
                    "can_manage_employees": session.can_manage_employees(),
                    "can_manage_finance": session.can_manage_finance(),
                }),
                None => json!({ "user": null }),
            };
            print_json(&body)?;
        }
        Command::Get { path, query } => {
            let params = parse_params(&query)?;
            let params: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let body: Value = pipeline.api.get(&path, &params).await?;
            print_json(&body)?;
        }
        Command::Download { path, out } => {
            let blob = pipeline.api.download(&path).await?;
            std::fs::write(&out, &blob.bytes).map_err(|source| CliError::Write { path: out.clone(), source })?;
            println!(
                "{} bytes ({}) written to {}",
                blob.bytes.len(),
                blob.content_type.as_deref().unwrap_or("unknown type"),
                out.display()
            );
        }
        Command::Guard { path } => match authorize(&path, session) {
            GuardOutcome::Allow => println!("allow {path}"),
            GuardOutcome::Redirect(target) => println!("redirect {path} -> {target}"),
        },
        Command::Theme { toggle } => {
            let theme = if toggle { Theme::toggle(kv.as_ref())? } else { Theme::load(kv.as_ref()) };
            println!("{theme}");
        }
    }
    Ok(())
}

fn parse_params(raw: &[String]) -> Result<Vec<(String, String)>, CliError> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| CliError::InvalidParam(pair.clone()))
        })
        .collect()
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
