use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use hostprobe::commands;

fn build_cli() -> Command {
    Command::new("hostprobe")
        .about("Report the host platform, Windows edition, and user privileges")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("info")
                .about("Show platform, privilege and session information")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("admin")
                .about("Check whether the current user is an administrator (exit code 1 if not)"),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'hostprobe config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("get").about("Show current configuration"))
                .subcommand(
                    Command::new("set")
                        .about("Set configuration values")
                        .subcommand_required(true)
                        .arg_required_else_help(true)
                        .subcommand(
                            Command::new("remote-policy")
                                .about("How an unset SESSIONNAME is treated when detecting remote sessions")
                                .arg(
                                    Arg::new("policy")
                                        .help("absent-is-remote or absent-is-local")
                                        .required(true)
                                        .index(1),
                                ),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    hostprobe::init_logging(matches.get_flag("verbose"));

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("info", sub_matches)) => commands::info(sub_matches)?,
        Some(("admin", _)) => {
            if !commands::admin()? {
                std::process::exit(1);
            }
        }
        Some(("config", sub_matches)) => commands::config::execute(sub_matches)?,
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut cli)?
        }
        Some(("version", _)) => commands::version()?,
        _ => {
            println!("Welcome to hostprobe!");
            println!("Use 'hostprobe --help' for more information.");
        }
    }

    Ok(())
}
