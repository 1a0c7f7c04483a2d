use std::io::Write;

use crate::command::{CommandError, match_pattern};
use crate::completer::Completer;
use crate::config::{Config, ConfigSource};

use super::{CompleteArgs, MatchArgs};

/// Run `cmdpat match`: print the bound arguments as JSON.
///
/// Returns exit code 0 on a match, 1 when the input does not fit the
/// pattern, 2 when the pattern itself is malformed.
pub fn run_match(
    args: &MatchArgs,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, anyhow::Error> {
    match match_pattern(&args.pattern, &args.input) {
        Ok(arguments) => {
            writeln!(out, "{}", serde_json::to_string(&arguments)?)?;
            Ok(0)
        }
        Err(CommandError::Mismatch(e)) => {
            writeln!(err, "cmdpat: {e}")?;
            Ok(1)
        }
        Err(e @ CommandError::PatternParse(_)) => {
            writeln!(err, "cmdpat: {e}")?;
            Ok(2)
        }
    }
}

/// Run `cmdpat complete`: print one completion candidate per line.
pub fn run_complete(
    args: &CompleteArgs,
    config: &Config,
    out: &mut impl Write,
) -> Result<i32, anyhow::Error> {
    for candidate in config.completer().complete(&args.buffer) {
        writeln!(out, "{candidate}")?;
    }
    Ok(0)
}

/// Run `cmdpat validate`. The config was already validated while loading,
/// so this only reports what was found and where it came from.
pub fn run_validate(
    config: &Config,
    sources: &[ConfigSource],
    out: &mut impl Write,
) -> Result<i32, anyhow::Error> {
    for source in sources {
        writeln!(out, "loaded {source}")?;
    }
    let http = config.http_request_config();
    writeln!(
        out,
        "config ok: {} command(s), connect timeout {:?}, read timeout {:?}, verify ssl cert {}",
        config.commands().len(),
        http.connect_timeout(),
        http.read_timeout(),
        http.verify_ssl_cert(),
    )?;
    Ok(0)
}
