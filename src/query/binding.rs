//! Bind values and their translation into inline SQL literals.
//!
//! Hive-family drivers do not execute parameterized statements reliably, so
//! positional bindings are turned into literal SQL fragments before they
//! reach the driver. The escaping rules here are intentionally narrow:
//! strings only get their single quotes doubled.

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Positional bind value supplied alongside SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// NULL value
    Null,
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// Exact decimal value
    Decimal(BigDecimal),
    /// Date/time value
    Timestamp(NaiveDateTime),
    /// String value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Binary data
    Bytes(Vec<u8>),
    /// Already-rendered SQL fragment, inlined verbatim
    Literal(String),
}

impl Binding {
    /// Translate this value into what the driver receives.
    ///
    /// - NULL becomes the `NULL` token
    /// - every numeric value, booleans included, becomes a floating-point
    ///   literal, so exact decimals may lose precision
    /// - timestamps become `'YYYY-MM-DD HH:MM:SS.mmm'`, milliseconds truncated
    /// - strings are single-quoted with embedded quotes doubled
    /// - anything else is passed through unchanged
    ///
    /// Decimals outside the `f64` range come out as `inf` or `NaN`, which
    /// Hive does not accept as literals. Such values have to be bound as
    /// [`Binding::Literal`] text instead.
    pub fn to_literal(&self) -> Binding {
        match self {
            Binding::Null => Binding::Literal("NULL".to_string()),
            Binding::Int(i) => Binding::Literal(float_literal(*i as f64)),
            Binding::Float(f) => Binding::Literal(float_literal(*f)),
            Binding::Decimal(d) => {
                Binding::Literal(float_literal(d.to_f64().unwrap_or(f64::NAN)))
            }
            Binding::Bool(b) => Binding::Literal(float_literal(if *b { 1.0 } else { 0.0 })),
            Binding::Timestamp(ts) => {
                Binding::Literal(format!("'{}'", ts.format(TIMESTAMP_FORMAT)))
            }
            Binding::Text(s) => Binding::Literal(format!("'{}'", s.replace('\'', "''"))),
            other => other.clone(),
        }
    }

    /// Render this value as SQL text for ordinal placeholder substitution.
    pub fn render(&self) -> String {
        match self {
            Binding::Null => "NULL".to_string(),
            Binding::Int(i) => i.to_string(),
            Binding::Float(f) => float_literal(*f),
            Binding::Decimal(d) => d.to_string(),
            Binding::Timestamp(ts) => format!("'{}'", ts.format(TIMESTAMP_FORMAT)),
            Binding::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Binding::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
            Binding::Bytes(b) => format!("'{}'", hex::encode(b)),
            Binding::Literal(fragment) => fragment.clone(),
        }
    }
}

/// Translate a full binding list.
pub fn to_literals(bindings: &[Binding]) -> Vec<Binding> {
    bindings.iter().map(Binding::to_literal).collect()
}

/// Float literal with a guaranteed fractional part for integral values.
fn float_literal(value: f64) -> String {
    format!("{:?}", value)
}

impl<T: Into<Binding>> From<Option<T>> for Binding {
    fn from(value: Option<T>) -> Self {
        value.map_or(Binding::Null, Into::into)
    }
}

impl From<i32> for Binding {
    fn from(value: i32) -> Self {
        Binding::Int(value as i64)
    }
}

impl From<i64> for Binding {
    fn from(value: i64) -> Self {
        Binding::Int(value)
    }
}

impl From<f64> for Binding {
    fn from(value: f64) -> Self {
        Binding::Float(value)
    }
}

impl From<BigDecimal> for Binding {
    fn from(value: BigDecimal) -> Self {
        Binding::Decimal(value)
    }
}

impl From<NaiveDateTime> for Binding {
    fn from(value: NaiveDateTime) -> Self {
        Binding::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for Binding {
    fn from(value: DateTime<Utc>) -> Self {
        Binding::Timestamp(value.naive_utc())
    }
}

impl From<String> for Binding {
    fn from(value: String) -> Self {
        Binding::Text(value)
    }
}

impl From<&str> for Binding {
    fn from(value: &str) -> Self {
        Binding::Text(value.to_string())
    }
}

impl From<bool> for Binding {
    fn from(value: bool) -> Self {
        Binding::Bool(value)
    }
}

impl From<Vec<u8>> for Binding {
    fn from(value: Vec<u8>) -> Self {
        Binding::Bytes(value)
    }
}
