//! Common test utilities for hive-adapter integration tests.
//!
//! The tests run against [`MemoryDriver`], an in-memory native driver that
//! records every call it receives and substitutes bindings into statements
//! with [`format_ordinal`], the way a real Hive driver formats parameters.
//!
//! Set `RUST_LOG=hive_adapter=debug` to see the adapter's log output while
//! running them.

#![allow(dead_code)]

use async_trait::async_trait;
use hive_adapter::driver::{
    format_ordinal, ColumnDescription, ConnectOptions, ExecuteResult, NativeConnection,
    NativeCursor, NativeDriver, Row,
};
use hive_adapter::error::DriverError;
use hive_adapter::{Binding, Connection, Credentials, HiveConnectionManager};
use serde_json::json;
use std::sync::{Arc, Mutex, Once};

/// Call observed by the in-memory driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Connect {
        host: String,
        port: u16,
        auth_mechanism: Option<String>,
        user: Option<String>,
    },
    Cursor,
    Execute(String),
    Fetch,
    Cancel,
    Close,
}

type Recorder = Arc<Mutex<Vec<Call>>>;

fn record(calls: &Recorder, call: Call) {
    calls.lock().unwrap().push(call);
}

/// In-memory native driver.
#[derive(Clone, Default)]
pub struct MemoryDriver {
    calls: Recorder,
    rows: Vec<Row>,
    connect_error: Option<DriverError>,
    statement_error: Option<DriverError>,
    cleanup_error: Option<DriverError>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows every query returns.
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn failing_connect(mut self, err: DriverError) -> Self {
        self.connect_error = Some(err);
        self
    }

    pub fn failing_statements(mut self, err: DriverError) -> Self {
        self.statement_error = Some(err);
        self
    }

    /// Error raised by every cursor cancel and close.
    pub fn failing_cleanup(mut self, err: DriverError) -> Self {
        self.cleanup_error = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Statements as the driver executed them, bindings substituted.
    pub fn executed(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Execute(sql) => Some(sql),
                _ => None,
            })
            .collect()
    }

    pub fn connect_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Connect { .. }))
            .count()
    }
}

#[async_trait]
impl NativeDriver for MemoryDriver {
    async fn connect(
        &self,
        options: &ConnectOptions,
    ) -> Result<Box<dyn NativeConnection>, DriverError> {
        record(
            &self.calls,
            Call::Connect {
                host: options.host.clone(),
                port: options.port,
                auth_mechanism: options.auth_mechanism.clone(),
                user: options.user.clone(),
            },
        );
        if let Some(err) = &self.connect_error {
            return Err(err.clone());
        }
        Ok(Box::new(MemoryConnection {
            driver: self.clone(),
        }))
    }
}

struct MemoryConnection {
    driver: MemoryDriver,
}

#[async_trait]
impl NativeConnection for MemoryConnection {
    async fn cursor(&mut self) -> Result<Box<dyn NativeCursor>, DriverError> {
        record(&self.driver.calls, Call::Cursor);
        Ok(Box::new(MemoryCursor {
            driver: self.driver.clone(),
            pending: Vec::new(),
            has_result: false,
        }))
    }
}

struct MemoryCursor {
    driver: MemoryDriver,
    pending: Vec<Row>,
    has_result: bool,
}

#[async_trait]
impl NativeCursor for MemoryCursor {
    async fn execute(
        &mut self,
        sql: &str,
        bindings: Option<Vec<Binding>>,
    ) -> Result<ExecuteResult, DriverError> {
        let statement = match bindings {
            Some(bindings) => format_ordinal(sql, &bindings)
                .map_err(|err| DriverError::programming(err.to_string()))?,
            None => sql.to_string(),
        };
        record(&self.driver.calls, Call::Execute(statement.clone()));

        if let Some(err) = &self.driver.statement_error {
            return Err(err.clone());
        }

        if statement.trim_start().to_uppercase().starts_with("SELECT") {
            self.pending = self.driver.rows.clone();
            self.has_result = true;
            Ok(ExecuteResult::ResultSet)
        } else {
            self.pending.clear();
            self.has_result = false;
            Ok(ExecuteResult::RowCount { count: 1 })
        }
    }

    async fn fetchall(&mut self) -> Result<Vec<Row>, DriverError> {
        record(&self.driver.calls, Call::Fetch);
        Ok(std::mem::take(&mut self.pending))
    }

    async fn fetchone(&mut self) -> Result<Option<Row>, DriverError> {
        record(&self.driver.calls, Call::Fetch);
        if self.pending.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.pending.remove(0)))
    }

    async fn cancel(&mut self) -> Result<(), DriverError> {
        record(&self.driver.calls, Call::Cancel);
        match &self.driver.cleanup_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn close(&mut self) -> Result<(), DriverError> {
        record(&self.driver.calls, Call::Close);
        match &self.driver.cleanup_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn description(&self) -> Option<Vec<ColumnDescription>> {
        self.has_result.then(|| {
            vec![
                ColumnDescription::new("id", "INT"),
                ColumnDescription::new("name", "STRING"),
            ]
        })
    }
}

/// Two sample rows matching [`MemoryCursor::description`].
pub fn sample_rows() -> Vec<Row> {
    vec![vec![json!(1), json!("alice")], vec![json!(2), json!("bob")]]
}

pub fn test_credentials() -> Credentials {
    Credentials::builder()
        .host("hive.test")
        .schema("analytics")
        .build()
        .unwrap()
}

/// Manager over `driver` plus a fresh connection record.
pub fn setup(driver: &MemoryDriver, credentials: Credentials) -> (HiveConnectionManager, Connection) {
    init_tracing();
    let manager = HiveConnectionManager::with_span(
        Arc::new(driver.clone()),
        tracing::info_span!("hive_adapter_test"),
    );
    let connection = Connection::new("test", Arc::new(credentials));
    (manager, connection)
}

/// Install a test subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
