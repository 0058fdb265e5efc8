//! # CLI Behavior
//!
//! This is one possible UI client for folio, not the application itself.
//! For the overall architecture, see the crate-level documentation of the
//! `folio` library.
//!
//! ## Widgets as Commands
//!
//! Each page widget is a subcommand. `folio projects` and `folio timeline`
//! render one view of their engine after applying `--select`, the tag or
//! group filter, `--search` and `--preview`, in that order. `folio session`
//! replays a whole script of input events and renders the view after each one,
//! which is how the selection rules are easiest to watch.
//!
//! Running `folio` with no subcommand prints the grouped help.
//!
//! ## Data Location
//!
//! `$FOLIO_HOME` holds `config.json`, `projects.json` and `timeline.json` when
//! set. Otherwise the platform config and data directories are used. The
//! `projects-file` and `timeline-file` config keys, and `--data` per command,
//! point at other files.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `logging`: `tracing` subscriber setup
//! - `render`: Templated output and message printing
//! - `setup`: Argument parsing via clap, grouped help
//! - `styles`: Light and dark palettes
//! - `templates`: Output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
