//! Twitch token tool
//!
//! Thin command-line front end over `twitch-auth`:
//! 1. Parses the command and `--config` flag
//! 2. Loads the TOML config and resolves the client secret
//! 3. Runs one OAuth operation against the configured provider
//! 4. Prints the result as JSON on stdout
//!
//! Logs go to stderr as JSON so stdout stays machine-readable.

mod cli;
mod config;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twitch_auth::{
    AuthorizationCodeAuthenticator, ClientCredentialsAuthenticator, ImplicitAuthenticator,
    OAuthClient, Outcome, generate_state,
};

use crate::cli::Command;
use crate::config::Config;

/// Exit status when the provider answered but refused the request.
const EXIT_PROVIDER_FAILURE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let args = match cli::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %format!("{e:#}"), "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args) -> Result<ExitCode> {
    let config_path = args.config_path.as_deref();

    match args.command {
        Command::State => print_state(),
        Command::AuthorizeUrl => {
            let (config, client) = setup(config_path)?;
            let url = authorization_code(&config, client)?.authorization_url();
            print_json(&serde_json::json!({ "url": url }))
        }
        Command::ImplicitUrl => {
            let (config, client) = setup(config_path)?;
            let url = implicit(&config, client)?.authorization_url();
            print_json(&serde_json::json!({ "url": url }))
        }
        Command::Exchange { code } => {
            let (config, client) = setup(config_path)?;
            let outcome = authorization_code(&config, client)?
                .exchange_code(&code)
                .await
                .context("authorization code exchange failed")?;
            print_outcome(&outcome)
        }
        Command::Refresh { refresh_token } => {
            let (config, client) = setup(config_path)?;
            let outcome = authorization_code(&config, client)?
                .refresh_token(&refresh_token)
                .await
                .context("token refresh failed")?;
            print_outcome(&outcome)
        }
        Command::AppToken => {
            let (config, client) = setup(config_path)?;
            let outcome = ClientCredentialsAuthenticator::new(
                client,
                config.client.client_id.as_str(),
                config.client_secret()?,
            )
            .request_token()
            .await
            .context("app token request failed")?;
            print_outcome(&outcome)
        }
        Command::Validate { token } => {
            let (_, client) = setup(config_path)?;
            let outcome = client
                .validate_token(&token)
                .await
                .context("token validation failed")?;
            print_outcome(&outcome)
        }
        Command::Revoke { token } => {
            let (config, client) = setup(config_path)?;
            let outcome = client
                .revoke_token(&config.client.client_id, &token)
                .await
                .context("token revocation failed")?;
            print_outcome(&outcome)
        }
    }
}

/// Load the config and build a client for its provider.
fn setup(cli_config_path: Option<&str>) -> Result<(Config, OAuthClient)> {
    let config_path = Config::resolve_path(cli_config_path);
    info!(path = %config_path.display(), "loading configuration");

    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    info!(
        client_id = %config.client.client_id,
        base_url = %config.provider.base_url,
        timeout_secs = config.provider.timeout_secs,
        scopes = config.client.scopes.len(),
        "configuration loaded"
    );

    let endpoints = config.provider.endpoints()?;
    let timeout = Duration::from_secs(config.provider.timeout_secs);
    let client =
        OAuthClient::with_timeout(endpoints, timeout).context("failed to build HTTP client")?;

    Ok((config, client))
}

fn authorization_code(
    config: &Config,
    client: OAuthClient,
) -> Result<AuthorizationCodeAuthenticator> {
    Ok(AuthorizationCodeAuthenticator::new(
        client,
        config.client.client_id.as_str(),
        config.client_secret()?,
        config.redirect_uri()?,
    )
    .with_force_verify(config.client.force_verify)
    .with_scopes(config.client.scopes.clone())
    .with_state(config.client.state.as_str()))
}

fn implicit(config: &Config, client: OAuthClient) -> Result<ImplicitAuthenticator> {
    Ok(ImplicitAuthenticator::new(
        client,
        config.client.client_id.as_str(),
        config.redirect_uri()?,
    )
    .with_force_verify(config.client.force_verify)
    .with_scopes(config.client.scopes.clone())
    .with_state(config.client.state.as_str()))
}

fn print_state() -> Result<ExitCode> {
    print_json(&serde_json::json!({ "state": generate_state() }))
}

fn print_outcome<T: Serialize>(outcome: &Outcome<T>) -> Result<ExitCode> {
    print_json(outcome)?;
    Ok(ExitCode::from(exit_status(outcome)))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<ExitCode> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(ExitCode::SUCCESS)
}

fn exit_status<T>(outcome: &Outcome<T>) -> u8 {
    match outcome.failure() {
        None => 0,
        Some(failure) => {
            warn!(status = failure.status, message = %failure.message, "provider refused request");
            EXIT_PROVIDER_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twitch_auth::{AccessToken, FailedRequest};

    #[test]
    fn success_outcome_exits_zero() {
        let outcome = Outcome::Success(AccessToken {
            access_token: "tok".into(),
            refresh_token: None,
            expires_in: 3600,
            token_type: "bearer".into(),
            scopes: vec![],
        });
        assert_eq!(exit_status(&outcome), 0);
    }

    #[test]
    fn provider_failure_exits_two() {
        let outcome: Outcome<()> = Outcome::Failure(FailedRequest {
            status: 401,
            message: "invalid access token".into(),
        });
        assert_eq!(exit_status(&outcome), 2);
    }

    #[tokio::test]
    async fn state_command_runs_without_a_config_file() {
        let args = cli::Args {
            config_path: Some("/nonexistent/path/twitch-token.toml".into()),
            command: Command::State,
        };
        assert!(run(args).await.is_ok());
    }

    #[tokio::test]
    async fn config_commands_fail_without_a_config_file() {
        let args = cli::Args {
            config_path: Some("/nonexistent/path/twitch-token.toml".into()),
            command: Command::AppToken,
        };
        let err = run(args).await.unwrap_err();
        assert!(
            format!("{err:#}").contains("failed to load config"),
            "got: {err:#}"
        );
    }

    #[test]
    fn outcome_renders_tagged_json() {
        let outcome: Outcome<()> = Outcome::Failure(FailedRequest {
            status: 400,
            message: "invalid token".into(),
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "failure": { "status": 400, "message": "invalid token" } })
        );
    }
}
