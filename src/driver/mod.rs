//! Native driver seam.
//!
//! The adapter never speaks the HiveServer2 protocol itself. A concrete
//! driver implements the traits in [`protocol`] and the adapter drives it.
//!
//! # Architecture
//!
//! - `protocol` - driver, connection and cursor traits plus connect options
//! - `format` - ordinal placeholder substitution for driver implementations

pub mod format;
pub mod protocol;

pub use format::format_ordinal;
pub use protocol::{
    ColumnDescription, ConnectOptions, ExecuteResult, NativeConnection, NativeCursor,
    NativeDriver, Row,
};
