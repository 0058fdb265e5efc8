//! # CLI Handlers
//!
//! The CLI is the only place that knows about stdout, stderr, stdin and exit
//! codes. Each `handle_*` function turns parsed arguments into an API call and
//! renders the `CmdResult` it gets back.
//!
//! Views go to stdout. Diagnostics go to stderr through `tracing`.

use super::logging;
use super::render::{print_messages, Renderer};
use super::setup::{print_grouped_help, BrowseArgs, Cli, Commands};
use super::styles::system_prefers_dark;
use clap::Parser;
use directories::ProjectDirs;
use folio::api::{BrowseOptions, ConfigAction, FolioApi, FolioPaths};
use folio::config::FolioConfig;
use folio::contact::ContactForm;
use folio::error::{FolioError, Result};
use folio::model::CollectionKind;
use folio::store::fs::FileSource;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

/// Overrides both the config and the data directory.
pub const HOME_ENV: &str = "FOLIO_HOME";

struct AppContext {
    paths: FolioPaths,
    config: FolioConfig,
    renderer: Renderer,
    system_dark: bool,
}

impl AppContext {
    /// An API whose source reads `kind` from `data` when given, then from the
    /// configured file, then from the data directory.
    fn api(&self, kind: CollectionKind, data: Option<PathBuf>) -> FolioApi<FileSource> {
        let source = FileSource::new(self.paths.data_dir.clone())
            .with_file(
                CollectionKind::Projects,
                self.config.file_for(CollectionKind::Projects).cloned(),
            )
            .with_file(
                CollectionKind::Timeline,
                self.config.file_for(CollectionKind::Timeline).cloned(),
            )
            .with_file(kind, data);
        FolioApi::new(source, self.paths.clone())
    }

    fn base_api(&self) -> FolioApi<FileSource> {
        self.api(CollectionKind::Projects, None)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    colored::control::set_override(use_color);
    if let Err(e) = logging::init(cli.verbose, use_color && std::io::stderr().is_terminal()) {
        eprintln!("Warning: {}", e);
    }

    let Some(command) = cli.command else {
        print_grouped_help();
        return Ok(());
    };

    let ctx = init_context(use_color)?;

    match command {
        Commands::Projects { tag, browse } => {
            handle_browse(&ctx, CollectionKind::Projects, tag, browse)
        }
        Commands::Timeline { filter, browse } => {
            handle_browse(&ctx, CollectionKind::Timeline, filter, browse)
        }
        Commands::Tags { kind } => handle_tags(&ctx, kind.into()),
        Commands::Session { kind, script, data } => {
            handle_session(&ctx, kind.into(), script, data)
        }
        Commands::Skills { key } => handle_skills(&ctx, key),
        Commands::Theme { action } => handle_theme(&ctx, action),
        Commands::Contact {
            name,
            email,
            message,
            website,
        } => handle_contact(
            &ctx,
            ContactForm {
                name,
                email,
                message,
                website,
            },
        ),
        Commands::Email { href, text } => handle_email(&ctx, &href, text.as_deref()),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn resolve_paths() -> Result<FolioPaths> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        let home = PathBuf::from(home);
        return Ok(FolioPaths {
            config_dir: home.clone(),
            data_dir: home,
        });
    }

    let dirs = ProjectDirs::from("dev", "folio", "folio")
        .ok_or_else(|| FolioError::Config("Could not determine config dir".into()))?;
    Ok(FolioPaths {
        config_dir: dirs.config_dir().to_path_buf(),
        data_dir: dirs.data_dir().to_path_buf(),
    })
}

fn init_context(use_color: bool) -> Result<AppContext> {
    let paths = resolve_paths()?;
    let config = FolioConfig::load_or_default(&paths.config_dir);
    debug!(config_dir = %paths.config_dir.display(), data_dir = %paths.data_dir.display(), "resolved paths");

    // Plain output never needs the system theme.
    let system_dark = use_color && system_prefers_dark();
    let mode = config.theme_mode(system_dark);

    Ok(AppContext {
        renderer: Renderer::new(mode, use_color),
        paths,
        config,
        system_dark,
    })
}

fn handle_browse(
    ctx: &AppContext,
    kind: CollectionKind,
    tag: Option<String>,
    args: BrowseArgs,
) -> Result<()> {
    let options = BrowseOptions {
        select: args.select,
        tag,
        search: args.search,
        preview: args.preview,
    };
    let result = ctx.api(kind, args.data).browse(kind, &options)?;
    if let Some(view) = &result.view {
        print!("{}", ctx.renderer.view(view));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_tags(ctx: &AppContext, kind: CollectionKind) -> Result<()> {
    let result = ctx.api(kind, None).tags(kind)?;
    print!("{}", ctx.renderer.tags(&result.tags));
    print_messages(&result.messages);
    Ok(())
}

fn handle_session(
    ctx: &AppContext,
    kind: CollectionKind,
    script: Option<PathBuf>,
    data: Option<PathBuf>,
) -> Result<()> {
    let script = match script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = ctx.api(kind, data).session(kind, &script)?;
    print!("{}", ctx.renderer.session(&result.steps));
    print_messages(&result.messages);
    Ok(())
}

fn handle_skills(ctx: &AppContext, key: Option<String>) -> Result<()> {
    let result = ctx.base_api().skills(key.as_deref())?;
    print!("{}", ctx.renderer.skills(&result.skills));
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &AppContext, action: Option<String>) -> Result<()> {
    let result = ctx
        .base_api()
        .theme(action.as_deref(), ctx.system_dark)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_contact(ctx: &AppContext, form: ContactForm) -> Result<()> {
    let result = ctx.base_api().contact(&form)?;
    if let Some(submission) = &result.submission {
        println!("{}", serde_json::to_string_pretty(submission)?);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_email(ctx: &AppContext, href: &str, text: Option<&str>) -> Result<()> {
    let result = ctx.base_api().email(href, text)?;
    if let Some(address) = &result.email {
        println!("{}", address);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.base_api().config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", ctx.renderer.config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

