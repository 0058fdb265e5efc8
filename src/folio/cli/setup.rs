use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use folio::model::CollectionKind;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version = get_version())]
#[command(
    about = "Filter and browse a portfolio's projects and timeline",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

/// Clap-facing mirror of [`CollectionKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Projects,
    Timeline,
}

impl From<KindArg> for CollectionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Projects => CollectionKind::Projects,
            KindArg::Timeline => CollectionKind::Timeline,
        }
    }
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Page,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse Commands:",
            CommandGroup::Page => "Page Widgets:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "projects" | "timeline" | "tags" | "session" => Some(CommandGroup::Browse),
            "skills" | "theme" | "contact" | "email" => Some(CommandGroup::Page),
            "config" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Browse, CommandGroup::Page, CommandGroup::Misc]
    }
}

/// The top-level help, with subcommands listed by group.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("folio {version}\n"));
    output.push_str("Filter and browse a portfolio's projects and timeline\n");
    output.push('\n');
    output.push_str("Usage: folio [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Debug logging on stderr\n");
    output.push_str("      --no-color   Disable colored output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the project grid
    #[command(alias = "p", display_order = 1)]
    Projects {
        /// Tag to filter by ("All" shows everything)
        #[arg(short, long)]
        tag: Option<String>,

        #[command(flatten)]
        browse: BrowseArgs,
    },

    /// Show the experience timeline
    #[command(alias = "t", display_order = 2)]
    Timeline {
        /// Group to filter by, e.g. work or education ("all" shows everything)
        #[arg(short, long)]
        filter: Option<String>,

        #[command(flatten)]
        browse: BrowseArgs,
    },

    /// List the tags a collection can be filtered by
    #[command(display_order = 3)]
    Tags {
        /// Which collection
        #[arg(value_enum, default_value = "projects")]
        kind: KindArg,
    },

    /// Replay an event script and show the view after each event
    #[command(display_order = 4)]
    Session {
        /// Which collection
        #[arg(value_enum)]
        kind: KindArg,

        /// Script file (reads stdin when omitted)
        script: Option<PathBuf>,

        /// Collection JSON file
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },

    /// List skill areas, or show one
    #[command(display_order = 10)]
    Skills {
        /// Skill key (backend, frontend, data, infrastructure)
        key: Option<String>,
    },

    /// Show or change the saved theme
    #[command(display_order = 11)]
    Theme {
        /// toggle, light or dark
        action: Option<String>,
    },

    /// Screen a contact form submission and print its payload
    #[command(display_order = 12)]
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Honeypot field; anything here blocks the submission
        #[arg(long, default_value = "", hide = true)]
        website: String,
    },

    /// Print the address behind a contact link, ready to copy
    #[command(display_order = 13)]
    Email {
        /// Link target, e.g. mailto:me@example.com
        href: String,

        /// Link text, used when the target is not a mailto: link
        #[arg(long)]
        text: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (projects-file, timeline-file, theme)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct BrowseArgs {
    /// Free-text search (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Id of the entry to select
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Id of the entry to preview without selecting it
    #[arg(long, value_name = "ID")]
    pub preview: Option<String>,

    /// Collection JSON file
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_projects_flags() {
        let cli = parse(&["projects", "--tag", "Rust", "-s", "ledger", "--select", "a"]);
        match cli.command {
            Some(Commands::Projects { tag, browse }) => {
                assert_eq!(tag.as_deref(), Some("Rust"));
                assert_eq!(browse.search.as_deref(), Some("ledger"));
                assert_eq!(browse.select.as_deref(), Some("a"));
                assert!(browse.preview.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_timeline_filter_and_globals() {
        let cli = parse(&["timeline", "--filter", "work", "-v", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Some(Commands::Timeline { filter: Some(ref f), .. }) if f == "work"
        ));
    }

    #[test]
    fn tags_default_to_projects() {
        let cli = parse(&["tags"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Tags {
                kind: KindArg::Projects
            })
        ));
    }

    #[test]
    fn parses_email_link() {
        let cli = parse(&["email", "#contact", "--text", "me@example.com"]);
        match cli.command {
            Some(Commands::Email { href, text }) => {
                assert_eq!(href, "#contact");
                assert_eq!(text.as_deref(), Some("me@example.com"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for name in [
            "projects", "timeline", "tags", "session", "skills", "theme", "contact", "email",
            "config",
        ] {
            assert!(help.contains(name), "help is missing {}", name);
        }
        assert!(help.contains("Browse Commands:"));
    }
}
