//! Native driver abstraction traits.
//!
//! The wire protocol, authentication and statement execution all live in an
//! external driver. These traits describe the part of its API the adapter
//! uses: connect, open a cursor, execute, fetch, cancel and close.

use crate::credentials::Password;
use crate::error::DriverError;
use crate::query::Binding;
use async_trait::async_trait;
use std::fmt;

/// One fetched row.
pub type Row = Vec<serde_json::Value>;

/// Parameters handed to [`NativeDriver::connect`].
///
/// Options not set explicitly are left to the driver's defaults, which is
/// what an unauthenticated connection relies on.
#[derive(Clone)]
pub struct ConnectOptions {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// SASL mechanism, e.g. `LDAP`
    pub auth_mechanism: Option<String>,
    /// Use the HTTP transport instead of binary Thrift
    pub use_http_transport: bool,
    /// Username
    pub user: Option<String>,
    password: Option<Password>,
    /// Use TLS/SSL
    pub use_ssl: bool,
    /// HTTP endpoint path when using the HTTP transport
    pub http_path: Option<String>,
}

impl ConnectOptions {
    /// Create connect options for host and port only.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            auth_mechanism: None,
            use_http_transport: false,
            user: None,
            password: None,
            use_ssl: false,
            http_path: None,
        }
    }

    pub fn with_auth_mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.auth_mechanism = Some(mechanism.into());
        self
    }

    pub fn with_http_transport(mut self, enabled: bool) -> Self {
        self.use_http_transport = enabled;
        self
    }

    pub fn with_user(mut self, user: Option<&str>) -> Self {
        self.user = user.map(str::to_string);
        self
    }

    pub fn with_password(mut self, password: Option<&str>) -> Self {
        self.password = password.map(Password::new);
        self
    }

    pub fn with_ssl(mut self, enabled: bool) -> Self {
        self.use_ssl = enabled;
        self
    }

    pub fn with_http_path(mut self, http_path: Option<&str>) -> Self {
        self.http_path = http_path.map(str::to_string);
        self
    }

    /// Password for the driver's authentication handshake.
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(Password::expose)
    }
}

impl fmt::Debug for ConnectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("auth_mechanism", &self.auth_mechanism)
            .field("use_http_transport", &self.use_http_transport)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("use_ssl", &self.use_ssl)
            .field("http_path", &self.http_path)
            .finish()
    }
}

/// Column metadata in the usual seven-field cursor description layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescription {
    pub name: String,
    pub type_code: String,
    pub display_size: Option<i64>,
    pub internal_size: Option<i64>,
    pub precision: Option<i64>,
    pub scale: Option<i64>,
    pub null_ok: Option<bool>,
}

impl ColumnDescription {
    pub fn new(name: impl Into<String>, type_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_code: type_code.into(),
            display_size: None,
            internal_size: None,
            precision: None,
            scale: None,
            null_ok: None,
        }
    }
}

/// What the driver reports after executing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteResult {
    /// Statement produced a result set to fetch from
    ResultSet,
    /// Statement reported an affected row count
    RowCount { count: i64 },
    /// Statement completed without further information
    Done,
}

/// Entry point of a native driver.
#[async_trait]
pub trait NativeDriver: Send + Sync {
    /// Open a connection to the database server.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the connection or authentication fails.
    async fn connect(
        &self,
        options: &ConnectOptions,
    ) -> Result<Box<dyn NativeConnection>, DriverError>;
}

/// Open connection handle returned by the driver.
#[async_trait]
pub trait NativeConnection: Send {
    /// Create a new cursor on this connection.
    async fn cursor(&mut self) -> Result<Box<dyn NativeCursor>, DriverError>;
}

/// Cursor over a native connection.
#[async_trait]
pub trait NativeCursor: Send {
    /// Execute a statement.
    ///
    /// When `bindings` is present the driver substitutes them, in order, for
    /// the ordinal placeholders in `sql` (see [`super::format_ordinal`]).
    async fn execute(
        &mut self,
        sql: &str,
        bindings: Option<Vec<Binding>>,
    ) -> Result<ExecuteResult, DriverError>;

    /// Fetch every remaining row.
    async fn fetchall(&mut self) -> Result<Vec<Row>, DriverError>;

    /// Fetch the next row, `None` when exhausted.
    async fn fetchone(&mut self) -> Result<Option<Row>, DriverError>;

    /// Request cancellation of the running statement.
    async fn cancel(&mut self) -> Result<(), DriverError>;

    /// Close the cursor.
    async fn close(&mut self) -> Result<(), DriverError>;

    /// Column metadata of the current result, if any.
    fn description(&self) -> Option<Vec<ColumnDescription>>;
}
