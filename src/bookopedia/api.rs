//! # API Facade
//!
//! The single entry point for UI clients. [`BookopediaApi::execute`] takes a
//! raw command line and runs it end to end:
//!
//! 1. parse it into a [`Command`](crate::commands::Command)
//! 2. run the command against the in-memory [`Model`]
//! 3. save the book through the [`DataStore`] if the command can change it
//!
//! The facade holds no logic of its own beyond that sequence. It never prints
//! and never exits; errors come back as [`BookopediaError`](crate::error::BookopediaError).
//!
//! `BookopediaApi<S: DataStore>` is generic over storage so tests can use
//! `InMemoryStore` and the binary `FileStore`.

use crate::commands::{self, displayed_persons, CmdResult, DisplayPerson};
use crate::error::Result;
use crate::model::Model;
use crate::parser::parse_command;
use crate::store::DataStore;
use tracing::{debug, warn};

pub struct BookopediaApi<S: DataStore> {
    store: S,
    model: Model,
}

impl<S: DataStore> BookopediaApi<S> {
    /// Loads the book from `store`.
    pub fn new(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            model: Model::new(book),
        })
    }

    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let command = parse_command(line).inspect_err(|e| debug!(error = %e, "parse failed"))?;
        let result = commands::run(&mut self.model, &command)
            .inspect_err(|e| warn!(error = %e, "command failed"))?;

        if command.mutates_book() {
            self.store.save(self.model.book())?;
        }
        Ok(result)
    }

    /// The currently displayed persons with their indexes.
    pub fn persons(&self) -> Vec<DisplayPerson> {
        displayed_persons(&self.model)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
