//! Units of work handed to a statement executor.
//!
//! Callers describe work as small descriptor values: actions run against a
//! statement handle, preparers/creators build derived statements from a live
//! connection, and connection actions operate on the raw connection itself.
//! Actions and creators additionally answer a SQL-disclosure query, which is
//! what drives metric naming.

use crate::error::Error;

/// SQL text an action or creator is able to disclose about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDisclosure<'a> {
    /// The value does not carry SQL text at all.
    Opaque,
    /// SQL-aware, but no single statement describes the work (a batch,
    /// usually).
    Batch,
    /// The single SQL statement about to run.
    Statement(&'a str),
}

/// Work performed against a plain statement handle.
pub trait StatementAction<S> {
    /// Value produced when the action completes.
    type Output;

    /// SQL this action is about to run, when it can say.
    fn sql(&self) -> SqlDisclosure<'_>;

    /// Run the action against an open statement handle.
    fn run(self, statement: &mut S) -> Result<Self::Output, Error>;
}

/// Builds a prepared statement from a live connection.
pub trait StatementPreparer<C> {
    /// Prepared statement handle this preparer produces.
    type Prepared;

    /// SQL the prepared statement will carry, when the preparer can say.
    fn sql(&self) -> SqlDisclosure<'_>;

    /// Prepare a statement on `connection`.
    fn prepare(&self, connection: &mut C) -> Result<Self::Prepared, Error>;
}

/// Work performed against a prepared statement.
pub trait PreparedAction<P> {
    /// Value produced when the action completes.
    type Output;

    /// Run the action against the prepared statement.
    fn run(self, prepared: &mut P) -> Result<Self::Output, Error>;
}

/// Builds a callable (stored-procedure) statement from a live connection.
pub trait CallableCreator<C> {
    /// Callable statement handle this creator produces.
    type Callable;

    /// SQL the call will carry, when the creator can say.
    fn sql(&self) -> SqlDisclosure<'_>;

    /// Create a callable statement on `connection`.
    fn create(&self, connection: &mut C) -> Result<Self::Callable, Error>;
}

/// Work performed against a callable statement.
pub trait CallableAction<K> {
    /// Value produced when the action completes.
    type Output;

    /// Run the action against the callable statement.
    fn run(self, callable: &mut K) -> Result<Self::Output, Error>;
}

/// Work performed directly against the raw connection.
pub trait ConnectionAction<C> {
    /// Value produced when the action completes.
    type Output;

    /// Run the action against the connection.
    fn run(self, connection: &mut C) -> Result<Self::Output, Error>;
}
