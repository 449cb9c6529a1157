//! # hive-adapter
//!
//! Connection adapter for Hive and Impala-compatible databases.
//!
//! The adapter sits between a host orchestration framework and a native
//! database driver. It validates credentials, opens and closes connections,
//! inlines positional bindings as SQL literals, and answers transaction hooks
//! with no-ops, since Hive has no transactional control. The wire protocol
//! itself is delegated to an implementation of [`driver::NativeDriver`].
//!
//! ## Example
//!
//! ```no_run
//! # use hive_adapter::*;
//! # use std::sync::Arc;
//! # async fn example(driver: Arc<dyn driver::NativeDriver>) -> Result<(), Box<dyn std::error::Error>> {
//! let credentials: Credentials = "hive://localhost:10000/analytics".parse()?;
//! let manager = HiveConnectionManager::new(driver);
//!
//! let mut connection = Connection::new("default", Arc::new(credentials));
//! manager.open(&mut connection).await?;
//!
//! manager
//!     .execute(&mut connection, "INSERT INTO events VALUES (?, ?)", Some(&[1.into(), "click".into()]))
//!     .await?;
//!
//! let rows = connection
//!     .handle_mut()
//!     .ok_or("connection not open")?
//!     .fetchall()
//!     .await?;
//! println!("Rows: {}", rows.len());
//!
//! manager.close(&mut connection).await;
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod credentials;
pub mod driver;
pub mod error;
pub mod manager;
pub mod query;

pub use connection::{Connection, ConnectionState, ConnectionWrapper};
pub use credentials::{AuthType, Credentials, CredentialsBuilder};
pub use error::{ConfigurationError, ConnectionError, DriverError, HiveError, QueryError};
pub use manager::{AdapterResponse, ConnectionManager, HiveConnectionManager};
pub use query::Binding;

/// Adapter version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
