//! Metric naming.

use std::fmt;

/// Identifies one timer within a [`MetricsRegistry`](crate::MetricsRegistry).
///
/// A name is the tuple of a group label, an operation category, and an
/// optional discriminator (typically the SQL text that was executed).
/// Names with identical components compare equal and resolve to the same
/// timer instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricName {
    group: String,
    category: String,
    discriminator: Option<String>,
}

impl MetricName {
    /// Create a category-only metric name.
    pub fn new(group: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            category: category.into(),
            discriminator: None,
        }
    }

    /// Create a metric name carrying a discriminator.
    pub fn discriminated(
        group: impl Into<String>,
        category: impl Into<String>,
        discriminator: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            category: category.into(),
            discriminator: Some(discriminator.into()),
        }
    }

    /// Get the group label.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Get the operation category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the discriminator, if the name carries one.
    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }
}

/// Renders as `group.category` or `group.category.discriminator`.
impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.category)?;
        if let Some(discriminator) = &self.discriminator {
            write!(f, ".{}", discriminator)?;
        }
        Ok(())
    }
}
