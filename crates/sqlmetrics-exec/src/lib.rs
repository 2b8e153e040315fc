//! SQLMetrics Exec - Statement executor contract and timing decorator.
//!
//! This crate fixes the capability set a statement executor exposes
//! ([`StatementExecutor`]) and provides [`InstrumentedExecutor`], a wrapper
//! that times every delegated call and records the duration into a shared
//! metrics registry under a name derived from the executed SQL.
//!
//! # Quick Start
//!
//! ```ignore
//! use sqlmetrics_core::new_shared_registry;
//! use sqlmetrics_exec::{InstrumentedExecutor, StatementExecutor};
//!
//! // Wrap whatever executor the database library provides.
//! let registry = new_shared_registry();
//! let executor = InstrumentedExecutor::with_registry(db_executor, registry.clone());
//!
//! // Calls behave exactly as before; durations land in the registry.
//! let rows = executor.execute(UpdateUsers::new("UPDATE users SET active = 1"))?;
//!
//! for name in registry.names() {
//!     println!("{name}: {} samples", registry.get(&name).unwrap().count());
//! }
//! ```

pub mod action;
pub mod error;
pub mod executor;
pub mod instrument;

pub use action::{
    CallableAction, CallableCreator, ConnectionAction, PreparedAction, SqlDisclosure,
    StatementAction, StatementPreparer,
};
pub use error::Error;
pub use executor::{FromConnectionSource, StatementExecutor};
pub use instrument::{
    InstrumentedExecutor, BATCH_DISCRIMINATOR, CALLABLE_CATEGORY, CONNECTION_CATEGORY,
    METRIC_GROUP, PREPARED_CATEGORY, STATEMENT_CATEGORY,
};

/// Re-export metrics primitives.
pub use sqlmetrics_core as metrics;
