//! Command execution layer for benchplot
//!
//! This is the structured request/reply boundary a front end (web layer,
//! CLI, pipe) talks to. Every operation is a [`Command`]; executing one
//! yields an [`Output`] or a classified error.
//!
//! - [`Executor::execute`] returns typed results for Rust callers
//! - [`Executor::handle`] and [`Executor::handle_json`] never fail: errors
//!   are logged with full context and turned into a [`Reply`] carrying only
//!   a user-safe message
//! - [`Session`] wraps the executor with typed methods
//!
//! Each command that touches the database opens its own read-only
//! connection, scoped to that call.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
mod executor;
mod handlers;
mod output;

#[cfg(test)]
mod tests;

pub use api::Session;
pub use command::Command;
pub use executor::{Executor, Reply};
pub use output::Output;

pub use benchplot_core::{Error, Result, Status};
