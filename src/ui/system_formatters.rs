use crate::core::report::{HostReport, PrivilegeReport, SessionReport};
use crate::platform::AdminDecision;
use crate::ui::formatters::format_flag;
use colored::*;

pub fn format_host_report(report: &HostReport) {
    println!("\n{}", "HOST INFORMATION".bold().bright_cyan());
    println!("{}", "=".repeat(80));

    print_os_info(report);
    print_privilege_info(&report.privileges);
    print_session_info(&report.session);

    println!();
}

pub fn format_admin_decision(decision: &AdminDecision) {
    let verdict = if decision.is_admin {
        "User is an administrator".green().bold()
    } else {
        "User is not an administrator".yellow().bold()
    };

    println!("{}", verdict);
    println!("  {} {}", "Decided by:".dimmed(), decision.check);
}

fn print_section_header(title: &str) {
    println!("\n{}", title.bold().green());
    println!("{}", "-".repeat(title.len()));
}

fn print_os_info(report: &HostReport) {
    print_section_header("Operating System");

    println!("  Name: {}", report.name);
    println!("  Family: {}", report.platform);
    println!("  Version: {}", report.version);
    println!("  Architecture: {}", report.architecture);

    if let Some(ref kernel) = report.kernel_version {
        println!("  Kernel: {}", kernel);
    }
}

fn print_privilege_info(privileges: &PrivilegeReport) {
    print_section_header("Privileges");

    println!("  Elevated: {}", format_flag(privileges.elevated));
    println!(
        "  Administrator: {} ({})",
        format_flag(privileges.administrator.is_admin),
        privileges.administrator.check.to_string().dimmed()
    );
    println!("  System account: {}", format_flag(privileges.system_account));
}

fn print_session_info(session: &SessionReport) {
    print_section_header("Session");

    match session.session_name {
        Some(ref name) if !name.is_empty() => println!("  Session name: {}", name),
        Some(_) => println!("  Session name: {}", "(empty)".dimmed()),
        None => println!("  Session name: {}", "(not set)".dimmed()),
    }

    println!(
        "  Terminal services: {}",
        format_flag(session.terminal_services)
    );
    println!("  Remote: {}", format_flag(session.remote));
}
