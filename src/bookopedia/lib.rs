//! # Bookopedia Architecture
//!
//! Bookopedia is an address book for people and the parcels they are waiting
//! on, driven by a small line-based command language:
//!
//! ```text
//! add n/Amy Bee p/11111111 e/amy@example.com a/Block 312, Amy Street 1 t/Shopee
//! edit 1 p/98765432 t/Lazada
//! find amy
//! ```
//!
//! Like any UI-agnostic core, the library never touches the terminal. The
//! `bookopedia` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - clap flags, stdin loop, coloured output, exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - parse → run → save                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                      │
//!                    ▼                      ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Parser (parser/)            │ │  Commands (commands/)      │
//! │  - text → Command            │ │  - Command × Model → result│
//! └──────────────────────────────┘ └────────────────────────────┘
//!                                          │
//!                                          ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait, FileStore (JSON), InMemoryStore         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Everything a user can get wrong is a typed error with a ready-to-show
//! message: [`error::ParseError`] for malformed input (including each field's
//! constraint message), [`error::CommandError`] for well-formed commands that
//! cannot apply. Parsing fails on the first problem it finds and never
//! collects several.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`parser`]: Command text to [`commands::Command`]
//! - [`commands`]: Execution of each command
//! - [`model`]: `Person`, its validated fields, parcels, the address book
//! - [`index`]: One-based display indexes
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
