//! # Table Module
//!
//! This module provides the transition table at the heart of the engine: an
//! ordered, immutable sequence of `(from, on, to)` rows encoding every legal
//! transition of one machine design, plus the lookup that resolves a
//! `(state, event)` pair against it.
//!
//! ## Key Features
//!
//! - Declare transitions as data through [TableBuilder]
//! - Reject duplicate `(from, on)` rows at construction time
//! - Resolve lookups to an explicit [Resolution] rather than a guessed state
//! - Share one read-only table across any number of machine instances
//!
//! The table is generic over the state type `S` and the event type `E`; both
//! are typically small caller-defined enums.
//!
//! ## Examples
//!
//! ```
//! use table_fsm::table::{Resolution, TableBuilder};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Light { Red, Yellow, Green }
//!
//! #[derive(Debug, PartialEq)]
//! enum Tick { Timeout }
//!
//! let table = TableBuilder::new()
//!     .with_transition(Light::Red, Tick::Timeout, Light::Yellow)
//!     .with_transition(Light::Yellow, Tick::Timeout, Light::Green)
//!     .with_transition(Light::Green, Tick::Timeout, Light::Red)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     table.resolve(&Light::Red, &Tick::Timeout),
//!     Resolution::Found(Light::Yellow),
//! );
//! ```

use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, warn};

/// A single row of a transition table: in state `from`, event `on` moves the
/// machine to state `to`.
#[derive(Clone, Debug)]
pub struct Transition<S, E> {
    pub from: S,
    pub on: E,
    pub to: S,
}

/// The outcome of a table lookup.
///
/// An unmatched `(state, event)` pair is a reportable condition, not a crash
/// and never a silently defaulted state, so the resolver distinguishes it
/// from a hit in the return value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution<S> {
    /// A row matched; the machine may commit to the contained state.
    Found(S),
    /// No row matched; the caller decides whether to hold or escalate.
    NotFound,
}

/// Errors raised while constructing a [TransitionTable].
#[derive(Debug, Error)]
pub enum TableError {
    /// Two rows share the same `(from, on)` pair, so the table would not be
    /// a function of state and event.
    #[error("duplicate transition: rows {first} and {second} share (from: {from}, on: {on})")]
    DuplicateTransition {
        from: String,
        on: String,
        first: usize,
        second: usize,
    },
}

/// An ordered, immutable collection of [Transitions](Transition), fixed at
/// construction and read-only for the lifetime of the machine.
///
/// Use the [builder](TableBuilder) to construct one. Because `build` rejects
/// duplicate `(from, on)` rows, the table is a partial function from
/// `(state, event)` to state and the first matching row is the only matching
/// row.
#[derive(Clone, Debug)]
pub struct TransitionTable<S, E> {
    rows: Vec<Transition<S, E>>,
}

impl<S, E> TransitionTable<S, E>
where
    S: Clone + PartialEq + Debug,
    E: PartialEq + Debug,
{
    /// Looks up the next state for `(state, event)`.
    ///
    /// Scans rows in declaration order and returns the `to` state of the
    /// first match. Pure apart from trace output; calling it twice with the
    /// same arguments yields the same resolution.
    ///
    /// ```
    /// use table_fsm::table::{Resolution, TableBuilder};
    ///
    /// let table = TableBuilder::new()
    ///     .with_transition("idle", "command", "busy")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(table.resolve(&"idle", &"command"), Resolution::Found("busy"));
    /// assert_eq!(table.resolve(&"busy", &"command"), Resolution::NotFound);
    /// ```
    pub fn resolve(&self, state: &S, event: &E) -> Resolution<S> {
        for row in &self.rows {
            if row.from == *state && row.on == *event {
                debug!("resolved ({:?}, {:?}) to {:?}", state, event, row.to);
                return Resolution::Found(row.to.clone());
            }
        }

        warn!("no transition from {:?} on {:?}", state, event);
        Resolution::NotFound
    }
}

impl<S, E> TransitionTable<S, E> {
    pub fn rows(&self) -> &[Transition<S, E>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Helps with specifying [tables](TransitionTable).
pub struct TableBuilder<S, E> {
    rows: Vec<Transition<S, E>>,
}

impl<S, E> TableBuilder<S, E>
where
    S: Clone + PartialEq + Debug,
    E: PartialEq + Debug,
{
    /// Create a new table builder.
    pub fn new() -> Self {
        TableBuilder { rows: Vec::new() }
    }

    /// Add a row: in state `from`, event `on` leads to state `to`.
    pub fn with_transition(mut self, from: S, on: E, to: S) -> Self {
        debug!("add transition {:?} on {:?} to {:?}", from, on, to);
        self.rows.push(Transition { from, on, to });
        self
    }

    /// Create and return a new table from the current rows.
    ///
    /// Fails with [TableError::DuplicateTransition] if two rows share a
    /// `(from, on)` pair. The reference implementations disagree on whether
    /// the first or the last duplicate wins at lookup time; rejecting the
    /// table here removes the dependence on scan order.
    pub fn build(self) -> Result<TransitionTable<S, E>, TableError> {
        for (i, row) in self.rows.iter().enumerate() {
            for (j, later) in self.rows.iter().enumerate().skip(i + 1) {
                if row.from == later.from && row.on == later.on {
                    return Err(TableError::DuplicateTransition {
                        from: format!("{:?}", row.from),
                        on: format!("{:?}", row.on),
                        first: i,
                        second: j,
                    });
                }
            }
        }

        debug!("build table with {} rows", self.rows.len());
        Ok(TransitionTable { rows: self.rows })
    }
}

impl<S, E> Default for TableBuilder<S, E>
where
    S: Clone + PartialEq + Debug,
    E: PartialEq + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
