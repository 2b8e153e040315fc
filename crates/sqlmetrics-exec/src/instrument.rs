//! Timing instrumentation for statement executors.
//!
//! [`InstrumentedExecutor`] wraps any [`StatementExecutor`] and records the
//! wall-clock duration of each delegated call into a shared
//! [`MetricsRegistry`](sqlmetrics_core::MetricsRegistry), keyed by the SQL
//! text the call discloses.

use std::fmt;

use sqlmetrics_core::{MetricName, RunningTimer, SharedMetricsRegistry};
use tracing::trace;

use crate::action::{
    CallableAction, CallableCreator, ConnectionAction, PreparedAction, SqlDisclosure,
    StatementAction, StatementPreparer,
};
use crate::error::Error;
use crate::executor::{FromConnectionSource, StatementExecutor};

/// Namespace every timer emitted by [`InstrumentedExecutor`] lives under.
pub const METRIC_GROUP: &str = "JdbcTemplate";

/// Category for plain statement actions.
pub const STATEMENT_CATEGORY: &str = "execute.StatementCallback";

/// Category for prepared statement execution.
pub const PREPARED_CATEGORY: &str = "execute.PreparedStatementCreator.PreparedStatementCallback";

/// Category for callable (stored-procedure) execution.
pub const CALLABLE_CATEGORY: &str = "callable.CallableStatementCreator.CallableStatementCallback";

/// Category for raw connection actions.
pub const CONNECTION_CATEGORY: &str = "connectionCallback";

/// Discriminator recorded when a SQL-aware action has no single statement.
pub const BATCH_DISCRIMINATOR: &str = "batchUpdate";

/// A statement executor that times every delegated call.
///
/// The wrapper implements the same [`StatementExecutor`] capability set as
/// the executor it holds, delegating each entry point unchanged. Around the
/// delegation it resolves a timer from the configured registry, starts it
/// immediately before the call, and stops it exactly once immediately after
/// — whether the delegate returns or fails. Results and errors pass through
/// untouched.
///
/// Plain and prepared execution are only timed when the descriptor discloses
/// its SQL; callable and connection execution are always timed, under a
/// category-only name when no SQL is available.
///
/// The registry must be configured before call traffic begins. A call that
/// needs a timer while the registry is unset fails with
/// [`Error::RegistryUnset`] before the delegate is invoked.
pub struct InstrumentedExecutor<E> {
    inner: E,
    registry: Option<SharedMetricsRegistry>,
}

impl<E> InstrumentedExecutor<E> {
    /// Wrap an existing executor. No registry is configured yet.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            registry: None,
        }
    }

    /// Wrap an existing executor with a registry already configured.
    pub fn with_registry(inner: E, registry: SharedMetricsRegistry) -> Self {
        Self {
            inner,
            registry: Some(registry),
        }
    }

    /// Get the configured metrics registry, if any.
    pub fn registry(&self) -> Option<&SharedMetricsRegistry> {
        self.registry.as_ref()
    }

    /// Configure the metrics registry.
    ///
    /// Configuration must complete before call traffic begins; the reference
    /// is read on every instrumented call.
    pub fn set_registry(&mut self, registry: SharedMetricsRegistry) {
        self.registry = Some(registry);
    }

    /// Get the wrapped executor.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Get the wrapped executor mutably.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    /// Unwrap into the underlying executor.
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Resolve `name` against the registry and begin a measurement interval.
    ///
    /// Fails fast when no registry has been configured.
    fn start_timer(&self, name: MetricName) -> Result<RunningTimer, Error> {
        let registry = self.registry.as_ref().ok_or(Error::RegistryUnset)?;
        trace!(metric = %name, "timing statement execution");
        Ok(registry.timer(name).start())
    }
}

impl<E: Default> Default for InstrumentedExecutor<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: FromConnectionSource> InstrumentedExecutor<E> {
    /// Build over a connection source, mirroring the underlying executor.
    pub fn from_source(source: E::Source) -> Self {
        Self::new(E::from_source(source))
    }

    /// Build over a connection source with optionally deferred
    /// initialization, mirroring the underlying executor.
    pub fn from_source_lazy(source: E::Source, lazy_init: bool) -> Self {
        Self::new(E::from_source_lazy(source, lazy_init))
    }
}

impl<E: StatementExecutor> StatementExecutor for InstrumentedExecutor<E> {
    type Connection = E::Connection;
    type Statement = E::Statement;

    fn execute<A>(&self, action: A) -> Result<A::Output, Error>
    where
        A: StatementAction<E::Statement>,
    {
        let timer = match action.sql() {
            SqlDisclosure::Opaque => None,
            SqlDisclosure::Batch => Some(self.start_timer(MetricName::discriminated(
                METRIC_GROUP,
                STATEMENT_CATEGORY,
                BATCH_DISCRIMINATOR,
            ))?),
            SqlDisclosure::Statement(sql) => Some(self.start_timer(MetricName::discriminated(
                METRIC_GROUP,
                STATEMENT_CATEGORY,
                sql,
            ))?),
        };

        let result = self.inner.execute(action);
        if let Some(timer) = timer {
            timer.stop();
        }
        result
    }

    fn execute_prepared<P, A>(&self, preparer: P, action: A) -> Result<A::Output, Error>
    where
        P: StatementPreparer<Self::Connection>,
        A: PreparedAction<P::Prepared>,
    {
        let timer = match preparer.sql() {
            SqlDisclosure::Statement(sql) => Some(self.start_timer(MetricName::discriminated(
                METRIC_GROUP,
                PREPARED_CATEGORY,
                sql,
            ))?),
            SqlDisclosure::Opaque | SqlDisclosure::Batch => None,
        };

        let result = self.inner.execute_prepared(preparer, action);
        if let Some(timer) = timer {
            timer.stop();
        }
        result
    }

    fn execute_callable<C, A>(&self, creator: C, action: A) -> Result<A::Output, Error>
    where
        C: CallableCreator<Self::Connection>,
        A: CallableAction<C::Callable>,
    {
        let name = match creator.sql() {
            SqlDisclosure::Statement(sql) => {
                MetricName::discriminated(METRIC_GROUP, CALLABLE_CATEGORY, sql)
            }
            SqlDisclosure::Opaque | SqlDisclosure::Batch => {
                MetricName::new(METRIC_GROUP, CALLABLE_CATEGORY)
            }
        };
        let timer = self.start_timer(name)?;

        let result = self.inner.execute_callable(creator, action);
        timer.stop();
        result
    }

    fn with_connection<A>(&self, action: A) -> Result<A::Output, Error>
    where
        A: ConnectionAction<E::Connection>,
    {
        let timer = self.start_timer(MetricName::new(METRIC_GROUP, CONNECTION_CATEGORY))?;

        let result = self.inner.with_connection(action);
        timer.stop();
        result
    }
}

impl<E> fmt::Debug for InstrumentedExecutor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentedExecutor")
            .field("registry_configured", &self.registry.is_some())
            .finish()
    }
}
