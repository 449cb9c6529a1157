//! Cursor-style wrapper over a native driver connection.
//!
//! The wrapper is what the host framework sees as both connection handle and
//! cursor: it tracks at most one native cursor, inlines bindings as literals,
//! and turns transactional calls into no-ops since Hive has no rollback.

use crate::driver::{ColumnDescription, ExecuteResult, NativeConnection, NativeCursor, Row};
use crate::error::DriverError;
use crate::query::{to_literals, Binding};
use std::fmt;
use tracing::Span;

/// Wrap a native connection in a way that no-ops transactions.
pub struct ConnectionWrapper {
    handle: Box<dyn NativeConnection>,
    cursor: Option<Box<dyn NativeCursor>>,
    span: Span,
}

impl ConnectionWrapper {
    /// Wrap a native connection handle.
    pub fn new(handle: Box<dyn NativeConnection>) -> Self {
        Self::with_span(handle, Span::none())
    }

    /// Wrap a native connection handle, logging under `span`.
    pub fn with_span(handle: Box<dyn NativeConnection>, span: Span) -> Self {
        Self {
            handle,
            cursor: None,
            span,
        }
    }

    /// Open a new native cursor, replacing any previous one.
    pub async fn cursor(&mut self) -> Result<&mut Self, DriverError> {
        self.cursor = Some(self.handle.cursor().await?);
        Ok(self)
    }

    /// Whether a cursor has been opened.
    pub fn has_cursor(&self) -> bool {
        self.cursor.is_some()
    }

    /// Execute a statement on the current cursor.
    ///
    /// One trailing `;` is stripped, since Hive-family dialects reject it.
    /// Bindings are translated with [`Binding::to_literal`] and substituted
    /// into the statement by the driver.
    ///
    /// # Errors
    ///
    /// Returns a programming-class `DriverError` if no cursor is open, or
    /// whatever the driver reports.
    pub async fn execute(
        &mut self,
        sql: &str,
        bindings: Option<&[Binding]>,
    ) -> Result<ExecuteResult, DriverError> {
        let sql = strip_terminator(sql);
        let bindings = bindings.map(to_literals);
        self.open_cursor()?.execute(sql, bindings).await
    }

    pub async fn fetchall(&mut self) -> Result<Vec<Row>, DriverError> {
        self.open_cursor()?.fetchall().await
    }

    pub async fn fetchone(&mut self) -> Result<Option<Row>, DriverError> {
        self.open_cursor()?.fetchone().await
    }

    /// Request cancellation of the running statement.
    ///
    /// Never fails: the driver reports spurious errors when a cursor is
    /// cancelled, so they are logged and dropped.
    pub async fn cancel(&mut self) {
        if let Some(cursor) = self.cursor.as_deref_mut() {
            if let Err(err) = cursor.cancel().await {
                log_cleanup_error(&self.span, "cancelling query", &err);
            }
        }
    }

    /// Close the current cursor. Same error policy as [`Self::cancel`].
    pub async fn close(&mut self) {
        if let Some(cursor) = self.cursor.as_deref_mut() {
            if let Err(err) = cursor.close().await {
                log_cleanup_error(&self.span, "closing cursor", &err);
            }
        }
    }

    /// Hive has no transactional rollback.
    pub fn rollback(&self) {
        tracing::debug!(parent: &self.span, "NotImplemented: rollback");
    }

    /// Column metadata of the current result.
    pub fn description(&self) -> Option<Vec<ColumnDescription>> {
        self.cursor.as_ref().and_then(|cursor| cursor.description())
    }

    fn open_cursor(&mut self) -> Result<&mut dyn NativeCursor, DriverError> {
        match self.cursor.as_deref_mut() {
            Some(cursor) => Ok(cursor),
            None => Err(DriverError::programming("No cursor has been opened")),
        }
    }
}

impl fmt::Debug for ConnectionWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionWrapper")
            .field("has_cursor", &self.has_cursor())
            .finish()
    }
}

fn log_cleanup_error(span: &Span, action: &str, err: &DriverError) {
    if err.is_io() {
        tracing::debug!(parent: span, "Exception while {}: {}", action, err);
    } else {
        tracing::warn!(parent: span, "Unexpected exception while {}: {}", action, err);
    }
}

/// Drop a single trailing statement terminator.
fn strip_terminator(sql: &str) -> &str {
    sql.trim().strip_suffix(';').unwrap_or(sql)
}
