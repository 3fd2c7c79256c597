use colored::*;

/// Colored yes/no for boolean facts
pub fn format_flag(value: bool) -> ColoredString {
    if value {
        "yes".green()
    } else {
        "no".normal()
    }
}
