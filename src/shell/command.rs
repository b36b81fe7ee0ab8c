//! Command line parsing
//!
//! A raw line is split at the first space into a command token and an
//! argument. The token is matched case-insensitively; the argument is kept
//! verbatim, inner spaces included, so `cat Rasa 3.x.txt` reads the file
//! `Rasa 3.x.txt`.

/// Canonical command names, in the order tab completion tries them
pub const COMMAND_NAMES: [&str; 11] = [
    "help",
    "ls",
    "cd",
    "cat",
    "whois",
    "skills",
    "projects",
    "experience",
    "contact",
    "clear",
    "exit",
];

/// Usage and one-line description for each command, as listed by `help`
pub const HELP_ENTRIES: [(&str, &str); 10] = [
    ("ls [dir]", "list directory contents"),
    ("cd <dir>", "change directory"),
    ("cat <file>", "display file contents"),
    ("whois", "display info about me"),
    ("skills", "show technical skills"),
    ("projects", "list all projects"),
    ("experience", "show work experience"),
    ("contact", "get contact information"),
    ("clear", "clear terminal"),
    ("exit", "return to normal mode"),
];

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// `ls [path]`
    Ls(Option<String>),
    /// `cd [path]`; no argument goes home
    Cd(Option<String>),
    /// `cat <file>`; a missing argument is an empty file name
    Cat(String),
    Whois,
    /// `skills [category]`
    Skills(Option<String>),
    Projects,
    Experience,
    Contact,
    Clear,
    Exit,
    /// Anything else, with the token as typed
    Unknown(String),
}

impl Command {
    /// Parse a raw input line. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (token, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(token, rest)| (token, rest.trim_start()));
        let optional = || (!arg.is_empty()).then(|| arg.to_string());

        let command = match token.to_lowercase().as_str() {
            "help" => Command::Help,
            "ls" => Command::Ls(optional()),
            "cd" => Command::Cd(optional()),
            "cat" => Command::Cat(arg.to_string()),
            "whois" => Command::Whois,
            "skills" => Command::Skills(optional()),
            "projects" => Command::Projects,
            "experience" => Command::Experience,
            "contact" => Command::Contact,
            "clear" => Command::Clear,
            "exit" => Command::Exit,
            _ => Command::Unknown(token.to_string()),
        };
        Some(command)
    }

    /// Canonical name, or the typed token for [`Command::Unknown`]
    pub fn name(&self) -> &str {
        match self {
            Command::Help => "help",
            Command::Ls(_) => "ls",
            Command::Cd(_) => "cd",
            Command::Cat(_) => "cat",
            Command::Whois => "whois",
            Command::Skills(_) => "skills",
            Command::Projects => "projects",
            Command::Experience => "experience",
            Command::Contact => "contact",
            Command::Clear => "clear",
            Command::Exit => "exit",
            Command::Unknown(token) => token.as_str(),
        }
    }
}

/// First command name that starts with `prefix`. Case-sensitive; an empty
/// prefix matches the first name in the list.
pub fn complete(prefix: &str) -> Option<&'static str> {
    COMMAND_NAMES
        .iter()
        .copied()
        .find(|name| name.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_parse_to_none() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t "), None);
    }

    #[test]
    fn test_token_is_case_insensitive() {
        assert_eq!(Command::parse("LS"), Some(Command::Ls(None)));
        assert_eq!(Command::parse("  Whois  "), Some(Command::Whois));
    }

    #[test]
    fn test_argument_kept_verbatim() {
        assert_eq!(
            Command::parse("cat Rasa 3.x.txt"),
            Some(Command::Cat("Rasa 3.x.txt".into()))
        );
        assert_eq!(
            Command::parse("cd ../skills"),
            Some(Command::Cd(Some("../skills".into())))
        );
        assert_eq!(Command::parse("cat"), Some(Command::Cat(String::new())));
    }

    #[test]
    fn test_token_ends_at_any_whitespace() {
        assert_eq!(
            Command::parse("ls\tprojects"),
            Some(Command::Ls(Some("projects".into())))
        );
        assert_eq!(
            Command::parse("cd  \t skills/edge-ai-iot"),
            Some(Command::Cd(Some("skills/edge-ai-iot".into())))
        );
    }

    #[test]
    fn test_unknown_keeps_original_token() {
        let cmd = Command::parse("Sudo rm -rf").unwrap();
        assert_eq!(cmd, Command::Unknown("Sudo".into()));
        assert_eq!(cmd.name(), "Sudo");
    }

    #[test]
    fn test_complete() {
        assert_eq!(complete("wh"), Some("whois"));
        assert_eq!(complete("c"), Some("cd"));
        assert_eq!(complete("cl"), Some("clear"));
        assert_eq!(complete("e"), Some("experience"));
        assert_eq!(complete("W"), None);
        assert_eq!(complete("zz"), None);
        assert_eq!(complete(""), Some("help"));
    }

    #[test]
    fn test_every_name_parses_to_itself() {
        for name in COMMAND_NAMES {
            let cmd = Command::parse(name).unwrap();
            assert_eq!(cmd.name(), name);
            assert!(!matches!(cmd, Command::Unknown(_)));
        }
    }
}
