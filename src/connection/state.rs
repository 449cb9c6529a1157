//! Connection record and its lifecycle state.

use crate::connection::wrapper::ConnectionWrapper;
use crate::credentials::Credentials;
use std::fmt;
use std::sync::Arc;

/// Lifecycle state of a [`Connection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Created, never opened
    #[default]
    Init,

    /// Native connection established
    Open,

    /// Closed by the manager
    Closed,

    /// The last open attempt failed
    Fail,
}

impl ConnectionState {
    /// Check if the connection holds a live native handle.
    pub fn is_open(&self) -> bool {
        matches!(self, ConnectionState::Open)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Init => write!(f, "init"),
            ConnectionState::Open => write!(f, "open"),
            ConnectionState::Closed => write!(f, "closed"),
            ConnectionState::Fail => write!(f, "fail"),
        }
    }
}

/// Connection record owned by the host framework.
///
/// State and handle change only through a connection manager's `open` and
/// `close`.
pub struct Connection {
    /// Logical connection name, used in diagnostics
    name: String,

    /// Current lifecycle state
    state: ConnectionState,

    /// Credentials the connection opens with
    credentials: Arc<Credentials>,

    /// Wrapped native connection while open
    handle: Option<ConnectionWrapper>,
}

impl Connection {
    /// Create a connection record in the `Init` state.
    pub fn new(name: impl Into<String>, credentials: Arc<Credentials>) -> Self {
        Self {
            name: name.into(),
            state: ConnectionState::Init,
            credentials,
            handle: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    pub fn handle(&self) -> Option<&ConnectionWrapper> {
        self.handle.as_ref()
    }

    /// Mutable access to the wrapped connection, for executing statements.
    pub fn handle_mut(&mut self) -> Option<&mut ConnectionWrapper> {
        self.handle.as_mut()
    }

    pub(crate) fn set_state(&mut self, state: ConnectionState) {
        self.state = state;
    }

    pub(crate) fn set_handle(&mut self, handle: ConnectionWrapper) {
        self.handle = Some(handle);
    }

    pub(crate) fn take_handle(&mut self) -> Option<ConnectionWrapper> {
        self.handle.take()
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("credentials", &self.credentials)
            .field("handle", &self.handle)
            .finish()
    }
}
