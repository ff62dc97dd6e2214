//! Command parser for the : command system

use crate::app::Section;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Go(Section),

    // View commands
    Add,
    Export,
    Status(Option<String>),
    Search(Option<String>),
    Clear,

    // App commands
    Settings,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "dashboard" | "home" | "dash" => Command::Go(Section::Dashboard),
        "labour" | "labor" | "workers" | "worker" => Command::Go(Section::Labour),
        "work" | "projects" | "project" => Command::Go(Section::Work),
        "payments" | "payment" | "pay" => Command::Go(Section::Payments),
        "reports" | "report" => Command::Go(Section::Reports),
        "help" | "support" => Command::Go(Section::Help),

        // View
        "add" | "new" => Command::Add,
        "export" | "exp" => Command::Export,
        "status" | "filter" => Command::Status(args),
        "search" | "find" => Command::Search(args),
        "clear" | "reset" => Command::Clear,

        // App
        "settings" | "prefs" => Command::Settings,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("dashboard"), Command::Go(Section::Dashboard));
        assert_eq!(parse_command("workers"), Command::Go(Section::Labour));
        assert_eq!(parse_command("PROJECTS"), Command::Go(Section::Work));
        assert_eq!(parse_command("pay"), Command::Go(Section::Payments));
        assert_eq!(parse_command(" help "), Command::Go(Section::Help));
    }

    #[test]
    fn test_parse_view_commands() {
        assert_eq!(parse_command("add"), Command::Add);
        assert_eq!(parse_command("status"), Command::Status(None));
        assert_eq!(
            parse_command("status almost done"),
            Command::Status(Some("almost done".to_string()))
        );
        assert_eq!(
            parse_command("search  amit "),
            Command::Search(Some("amit".to_string()))
        );
        assert_eq!(parse_command("clear"), Command::Clear);
    }

    #[test]
    fn test_parse_app_commands() {
        assert_eq!(parse_command("settings"), Command::Settings);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
