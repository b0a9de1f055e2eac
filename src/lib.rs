//! # Table-Driven Finite State Machine
//!
//! `table_fsm` provides a minimal table-driven FSM engine for firmware-style
//! control logic. The legal transitions of a machine are declared as data, an
//! ordered list of `(from, on, to)` rows held in a [table](TransitionTable),
//! and the next state is found by lookup instead of nested conditionals, so
//! the transition logic can be audited and tested independently of the loop
//! that drives it. Tables should be specified using the
//! [builder](TableBuilder), which rejects ambiguous duplicate rows up front.
//!
//! An unmatched `(state, event)` pair resolves to an explicit
//! [NotFound](Resolution::NotFound) rather than a guessed state; the
//! [machine](Machine) applies a configurable [policy](UnmatchedPolicy) when
//! that happens, holding its state by default.
//!
//! ```
//! use table_fsm::{Machine, Resolution, TableBuilder};
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
//! let mut light = Machine::new(&table, Light::Red);
//! light.step(&Tick::Timeout);
//! assert_eq!(*light.state(), Light::Yellow);
//! ```

pub mod machine;
pub mod name;
pub mod table;

pub use machine::{Machine, UnmatchedPolicy};
pub use name::NameTable;
pub use table::{Resolution, TableBuilder, TableError, Transition, TransitionTable};
