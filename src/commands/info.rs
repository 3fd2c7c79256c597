use crate::core::{Config, HostReport};
use crate::platform::PrivilegeDetector;
use crate::ui::format_host_report;
use anyhow::{Context, Result};
use clap::ArgMatches;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let detector = PrivilegeDetector::system().with_remote_policy(config.remote_session_policy);
    let report = HostReport::collect(&detector);

    if matches.get_flag("json") {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize host report")?;
        println!("{}", json);
    } else {
        format_host_report(&report);
    }

    Ok(())
}
