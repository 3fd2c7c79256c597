use crate::platform::PrivilegeDetector;
use crate::ui::format_admin_decision;
use anyhow::Result;

/// Prints the administrator decision; returns whether the user is an administrator
pub fn execute() -> Result<bool> {
    let decision = PrivilegeDetector::system().administrator_decision();
    log::debug!("Administrator decision: {:?}", decision);

    format_admin_decision(&decision);

    Ok(decision.is_admin)
}
