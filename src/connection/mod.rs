//! Connection records and the cursor-style wrapper around native connections.
//!
//! A [`Connection`] is the record the host framework keeps per logical
//! connection; while open it carries a [`ConnectionWrapper`] around the
//! native driver connection.
//!
//! # Example
//!
//! ```no_run
//! # use hive_adapter::connection::Connection;
//! # use hive_adapter::credentials::Credentials;
//! # use std::sync::Arc;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::builder()
//!     .host("hive.internal")
//!     .schema("analytics")
//!     .build()?;
//!
//! let connection = Connection::new("default", Arc::new(credentials));
//! assert!(!connection.state().is_open());
//! # Ok(())
//! # }
//! ```

pub mod state;
pub mod wrapper;

pub use state::{Connection, ConnectionState};
pub use wrapper::ConnectionWrapper;
