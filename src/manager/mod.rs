//! Connection lifecycle management.
//!
//! A [`ConnectionManager`] is the fixed capability set the host framework
//! drives: open, cancel and close connections, wrap execution errors, report
//! results, and answer the transaction hooks. [`HiveConnectionManager`] is
//! the implementation backed by a [`NativeDriver`](crate::driver::NativeDriver).

pub mod hive;
pub mod response;

pub use hive::HiveConnectionManager;
pub use response::AdapterResponse;

use crate::connection::{Connection, ConnectionWrapper};
use crate::credentials::Credentials;
use crate::error::{ConfigurationError, DriverError, HiveError};
use async_trait::async_trait;
use std::future::Future;

/// Adapter plugin interface used by the host framework.
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    /// Open `connection` if it is not already open.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` for an unsupported authentication method
    /// and `ConnectionError` if the driver cannot connect.
    async fn open(&self, connection: &mut Connection) -> Result<(), HiveError>;

    /// Request cancellation of the statement running on `connection`.
    async fn cancel(&self, connection: &mut Connection);

    /// Close `connection`; a connection without a handle is left untouched.
    async fn close(&self, connection: &mut Connection);

    /// Report the outcome of the last execution on `cursor`.
    fn get_response(&self, cursor: &ConnectionWrapper) -> AdapterResponse;

    /// Run a statement future, translating driver errors.
    ///
    /// # Errors
    ///
    /// A driver error carrying a message becomes
    /// `QueryError::ExecutionFailed`; one without a message is returned as is.
    async fn exception_handler<T, F>(&self, sql: &str, fut: F) -> Result<T, HiveError>
    where
        T: Send,
        F: Future<Output = Result<T, DriverError>> + Send;

    fn add_begin_query(&self);

    fn add_commit_query(&self);

    fn commit(&self);

    fn rollback(&self);

    /// Check that every `required` credential field is set.
    ///
    /// A field counts as present only when it carries a value: a declared
    /// but unset field such as a missing `password` is reported as missing,
    /// and so is an unknown field name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingCredential` for the first missing
    /// field.
    fn validate_creds(
        &self,
        creds: &Credentials,
        required: &[&str],
    ) -> Result<(), ConfigurationError>;
}
