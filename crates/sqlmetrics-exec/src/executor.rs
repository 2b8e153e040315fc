//! The statement executor capability set.

use crate::action::{
    CallableAction, CallableCreator, ConnectionAction, PreparedAction, StatementAction,
    StatementPreparer,
};
use crate::error::Error;

/// The set of execution entry points a statement executor exposes.
///
/// Implementations own connection management, execution semantics, and
/// result mapping; this trait only fixes the shape of the call surface so a
/// wrapper can delegate one-to-one. Entry points take `&self` — executors
/// handle their own interior mutability, and callers may share one executor
/// across threads when the implementation allows it.
pub trait StatementExecutor {
    /// Raw connection handle passed to preparers, creators, and connection
    /// actions.
    type Connection;

    /// Plain statement handle passed to statement actions.
    type Statement;

    /// Run an action against a plain statement.
    fn execute<A>(&self, action: A) -> Result<A::Output, Error>
    where
        A: StatementAction<Self::Statement>;

    /// Prepare a statement, then run an action against it.
    fn execute_prepared<P, A>(&self, preparer: P, action: A) -> Result<A::Output, Error>
    where
        P: StatementPreparer<Self::Connection>,
        A: PreparedAction<P::Prepared>;

    /// Create a callable statement, then run an action against it.
    fn execute_callable<C, A>(&self, creator: C, action: A) -> Result<A::Output, Error>
    where
        C: CallableCreator<Self::Connection>,
        A: CallableAction<C::Callable>;

    /// Run an action directly against the raw connection.
    fn with_connection<A>(&self, action: A) -> Result<A::Output, Error>
    where
        A: ConnectionAction<Self::Connection>;
}

/// Construction options for executors backed by a connection source.
///
/// A connection source is whatever the executor draws connections from: a
/// pool, a factory, or a single reusable connection.
pub trait FromConnectionSource: StatementExecutor + Sized {
    /// The connection source the executor is built over.
    type Source;

    /// Build an executor over `source`, initializing eagerly.
    fn from_source(source: Self::Source) -> Self;

    /// Build an executor over `source`; `lazy_init` defers connection setup
    /// until first use.
    fn from_source_lazy(source: Self::Source, lazy_init: bool) -> Self;
}
