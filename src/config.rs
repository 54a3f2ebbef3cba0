/// Configuration resolution module
///
/// This module handles:
/// - Building `RunOptions` from CLI arguments
/// - Resolving credentials: flag, then environment, then interactive prompt
/// - Resolving the signing secret
///
/// Environment lookup and prompt I/O are passed in, so the core never touches
/// the process environment or stdin directly.
use crate::auth::Credentials;
use crate::cli::CliArgs;
use crate::models::DisplayZone;
use log::debug;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_ROLL_KEYS: &[&str] = &["TNJR_ROLL_NUMBER", "ROLL_NUMBER"];
pub const ENV_EMAIL_KEYS: &[&str] = &["TNJR_EMAIL", "EMAIL"];
pub const ENV_PASSWORD_KEYS: &[&str] = &["TNJR_PASSWORD", "PASSWORD"];
pub const ENV_SIGNATURE_KEYS: &[&str] = &["TNJR_SIGNATURE_KEY"];

/// Application key the portal's web client signs with
pub const DEFAULT_SIGNATURE_KEY: &str = "6ECD762D4776742AFFB192CE8A148";

/// Everything a run needs besides credentials
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub base_url: String,
    pub signature_key: String,
    pub timeout: Duration,
    pub max_items: usize,
    /// 0 = no limit
    pub records_limit: usize,
    pub page_size: usize,
    pub show_recent: bool,
    pub export_path: Option<PathBuf>,
    pub zone: DisplayZone,
}

/// Build run options from parsed arguments
pub fn build_run_options<E>(args: &CliArgs, env: E) -> RunOptions
where
    E: Fn(&str) -> Option<String>,
{
    let signature_key = args
        .signature_key
        .clone()
        .filter(|k| !k.is_empty())
        .or_else(|| resolve_from_env(ENV_SIGNATURE_KEYS, &env))
        .unwrap_or_else(|| DEFAULT_SIGNATURE_KEY.to_string());

    RunOptions {
        base_url: args.base_url.clone(),
        signature_key,
        timeout: Duration::from_secs(args.timeout.max(1)),
        max_items: args.max_items,
        records_limit: args.records_limit,
        page_size: args.page_size.max(1),
        show_recent: args.recent,
        export_path: args.export.clone(),
        zone: if args.utc { DisplayZone::Utc } else { DisplayZone::Local },
    }
}

/// First non-empty value among `keys`
pub fn resolve_from_env<E>(keys: &[&str], env: &E) -> Option<String>
where
    E: Fn(&str) -> Option<String>,
{
    keys.iter().find_map(|key| {
        let value = env(key).filter(|v| !v.is_empty());
        if value.is_some() {
            debug!("using {} from environment", key);
        }
        value
    })
}

/// Resolve roll number, email and password
///
/// Each comes from its flag, else the environment, else a prompt written to
/// `out` and answered on `input`. Roll number and email are trimmed.
pub fn resolve_credentials<E, R, W>(args: &CliArgs, env: E, input: &mut R, out: &mut W) -> Result<Credentials, String>
where
    E: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
{
    let roll_number = match args.roll.clone().filter(|v| !v.is_empty()).or_else(|| resolve_from_env(ENV_ROLL_KEYS, &env)) {
        Some(v) => v,
        None => prompt("Roll number: ", input, out)?,
    };
    let email = match args.email.clone().filter(|v| !v.is_empty()).or_else(|| resolve_from_env(ENV_EMAIL_KEYS, &env)) {
        Some(v) => v,
        None => prompt("Email: ", input, out)?,
    };
    let password =
        match args.password.clone().filter(|v| !v.is_empty()).or_else(|| resolve_from_env(ENV_PASSWORD_KEYS, &env)) {
            Some(v) => v,
            None => prompt("Password: ", input, out)?,
        };

    let credentials =
        Credentials { roll_number: roll_number.trim().to_string(), email: email.trim().to_string(), password };

    if credentials.roll_number.is_empty() {
        return Err("Roll number is required".to_string());
    }
    if credentials.email.is_empty() {
        return Err("Email is required".to_string());
    }
    if credentials.password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(credentials)
}

/// Ask for one value; the line ending is stripped, nothing else
fn prompt<R: BufRead, W: Write>(label: &str, input: &mut R, out: &mut W) -> Result<String, String> {
    write!(out, "{}", label).and_then(|_| out.flush()).map_err(|e| format!("Failed to write prompt: {}", e))?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
        return Err(format!("No input for '{}'", label.trim_end_matches(": ")));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
