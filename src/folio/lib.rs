//! # Folio Architecture
//!
//! Folio is the filter and selection core behind a portfolio site's project
//! grid and experience timeline. Each widget shows a collection of items that
//! can be narrowed by a tag and a free-text search, and keeps one item
//! selected for its detail card. The terminal client is just one way to drive it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders views, owns stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, normalizes raw input          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads collections, drives engines, returns CmdResult     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                ┌─────────────┴──────────────┐
//!                ▼                            ▼
//! ┌──────────────────────────────┐ ┌──────────────────────────────┐
//! │  Engine (engine.rs)          │ │  Sources (store/)            │
//! │  - One per widget            │ │  - ItemSource trait          │
//! │  - Filter, pin, fallback     │ │  - FileSource, InMemory      │
//! └──────────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! ## The Selection Engine
//!
//! [`engine::SelectionEngine`] is total: every operation succeeds, and every
//! view it computes is a pure function of its collection, filter and pin. A
//! user's explicit choice (the pin) survives any filter change that keeps it
//! visible. When a filter hides it, the first visible item is adopted. When
//! nothing is visible, nothing is selected but the pin is left alone.
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never prints, never exits, and never assumes a
//! terminal. Load failures become empty collections plus a warning message.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`engine`]: Selection resolution and view computation
//! - [`filter`]: Tag filter and search normalization
//! - [`tags`]: Tag universe derivation
//! - [`model`]: `Item`, `CollectionKind`, detail cards
//! - [`loader`]: JSON records to items
//! - [`store`]: Item sources
//! - [`events`]: Scripted input events and sessions
//! - [`skills`], [`theme`], [`contact`]: The rest of the page's widgets
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod contact;
pub mod engine;
pub mod error;
pub mod events;
pub mod filter;
pub mod loader;
pub mod model;
pub mod skills;
pub mod store;
pub mod tags;
pub mod theme;
