//! Command-line parsing
//!
//! `twitch-token [--config PATH] <command> [ARG]`

pub const USAGE: &str = "\
usage: twitch-token [--config PATH] <command> [ARG]

commands:
  authorize-url          print the authorization code consent URL
  implicit-url           print the implicit grant consent URL
  exchange <code>        trade an authorization code for a user token
  refresh <token>        trade a refresh token for a new user token
  app-token              request an app access token (client credentials)
  validate <token>       check a token and report its scopes and expiry
  revoke <token>         invalidate a token
  state                  print a random state value";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AuthorizeUrl,
    ImplicitUrl,
    Exchange { code: String },
    Refresh { refresh_token: String },
    AppToken,
    Validate { token: String },
    Revoke { token: String },
    State,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config_path: Option<String>,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no command given")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} requires <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("--config requires a path")]
    MissingConfigPath,
}

/// Parse arguments, excluding the program name.
pub fn parse<I>(args: I) -> Result<Args, ParseError>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path = None;
    let mut positional = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = Some(args.next().ok_or(ParseError::MissingConfigPath)?);
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let name = positional.next().ok_or(ParseError::MissingCommand)?;
    let mut operand = |command, argument| {
        positional
            .next()
            .ok_or(ParseError::MissingArgument { command, argument })
    };

    let command = match name.as_str() {
        "authorize-url" => Command::AuthorizeUrl,
        "implicit-url" => Command::ImplicitUrl,
        "exchange" => Command::Exchange {
            code: operand("exchange", "code")?,
        },
        "refresh" => Command::Refresh {
            refresh_token: operand("refresh", "refresh_token")?,
        },
        "app-token" => Command::AppToken,
        "validate" => Command::Validate {
            token: operand("validate", "token")?,
        },
        "revoke" => Command::Revoke {
            token: operand("revoke", "token")?,
        },
        "state" => Command::State,
        _ => return Err(ParseError::UnknownCommand(name)),
    };

    if let Some(extra) = positional.next() {
        return Err(ParseError::UnexpectedArgument(extra));
    }

    Ok(Args {
        config_path,
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(args: &[&str]) -> Result<Args, ParseError> {
        parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_commands_without_operands() {
        assert_eq!(parse_str(&["authorize-url"]).unwrap().command, Command::AuthorizeUrl);
        assert_eq!(parse_str(&["implicit-url"]).unwrap().command, Command::ImplicitUrl);
        assert_eq!(parse_str(&["app-token"]).unwrap().command, Command::AppToken);
        assert_eq!(parse_str(&["state"]).unwrap().command, Command::State);
    }

    #[test]
    fn parses_commands_with_operands() {
        assert_eq!(
            parse_str(&["exchange", "abc"]).unwrap().command,
            Command::Exchange { code: "abc".into() }
        );
        assert_eq!(
            parse_str(&["refresh", "rt"]).unwrap().command,
            Command::Refresh {
                refresh_token: "rt".into()
            }
        );
        assert_eq!(
            parse_str(&["validate", "tok"]).unwrap().command,
            Command::Validate { token: "tok".into() }
        );
        assert_eq!(
            parse_str(&["revoke", "tok"]).unwrap().command,
            Command::Revoke { token: "tok".into() }
        );
    }

    #[test]
    fn config_flag_may_appear_anywhere() {
        let before = parse_str(&["--config", "/etc/t.toml", "validate", "tok"]).unwrap();
        let after = parse_str(&["validate", "tok", "--config", "/etc/t.toml"]).unwrap();
        assert_eq!(before, after);
        assert_eq!(before.config_path.as_deref(), Some("/etc/t.toml"));
    }

    #[test]
    fn missing_operand_is_reported() {
        assert_eq!(
            parse_str(&["exchange"]).unwrap_err(),
            ParseError::MissingArgument {
                command: "exchange",
                argument: "code"
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_str(&[]).unwrap_err(), ParseError::MissingCommand);
        assert_eq!(
            parse_str(&["login"]).unwrap_err(),
            ParseError::UnknownCommand("login".into())
        );
        assert_eq!(
            parse_str(&["state", "extra"]).unwrap_err(),
            ParseError::UnexpectedArgument("extra".into())
        );
        assert_eq!(
            parse_str(&["state", "--config"]).unwrap_err(),
            ParseError::MissingConfigPath
        );
    }

    #[test]
    fn parse_errors_render_for_the_user() {
        assert_eq!(
            parse_str(&["refresh"]).unwrap_err().to_string(),
            "refresh requires <refresh_token>"
        );
        assert_eq!(
            parse_str(&["login"]).unwrap_err().to_string(),
            "unknown command: login"
        );
        assert_eq!(
            ParseError::MissingConfigPath.to_string(),
            "--config requires a path"
        );
        assert_eq!(ParseError::MissingCommand.to_string(), "no command given");
    }

    #[test]
    fn parse_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(ParseError::UnexpectedArgument("extra".into()));
        assert_eq!(err.to_string(), "unexpected argument: extra");
    }
}
