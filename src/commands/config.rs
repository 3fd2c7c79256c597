use crate::core::Config;
use crate::platform::RemoteSessionPolicy;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

/// Parse a policy name as written on the command line
pub fn parse_remote_policy(value: &str) -> Option<RemoteSessionPolicy> {
    match value.to_lowercase().as_str() {
        "absent-is-remote" => Some(RemoteSessionPolicy::AbsentIsRemote),
        "absent-is-local" => Some(RemoteSessionPolicy::AbsentIsLocal),
        _ => None,
    }
}

fn policy_name(policy: RemoteSessionPolicy) -> &'static str {
    match policy {
        RemoteSessionPolicy::AbsentIsRemote => "absent-is-remote",
        RemoteSessionPolicy::AbsentIsLocal => "absent-is-local",
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("get", _)) => handle_get(),
        Some(("set", sub_matches)) => handle_set(sub_matches),
        _ => {
            println!("Use 'hostprobe config --help' for more information.");
            Ok(())
        }
    }
}

fn handle_get() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let path = Config::get_config_path()?;

    println!("{} {}", "Config file:".dimmed(), path.display());
    println!(
        "remote-policy = {}",
        policy_name(config.remote_session_policy).cyan()
    );

    Ok(())
}

fn handle_set(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("remote-policy", sub_matches)) => {
            let value = sub_matches
                .get_one::<String>("policy")
                .context("Policy argument is required")?;

            let Some(policy) = parse_remote_policy(value) else {
                bail!(
                    "Unknown remote policy '{}' (expected absent-is-remote or absent-is-local)",
                    value
                );
            };

            let mut config = Config::load().context("Failed to load configuration")?;
            config.set_remote_session_policy(policy);
            config.save().context("Failed to save configuration")?;

            println!(
                "{} {}",
                "✓ Remote policy set to:".green(),
                policy_name(policy)
            );
            Ok(())
        }
        _ => {
            println!("Use 'hostprobe config set --help' for more information.");
            Ok(())
        }
    }
}
