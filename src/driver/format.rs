//! Ordinal placeholder substitution.
//!
//! Drivers that do not implement server-side parameters inline bindings by
//! replacing each `?` placeholder, in order, with the rendered binding.
//! Placeholders inside quoted strings, quoted identifiers and comments are
//! left alone. Inside `'` and `"` strings a backslash escapes the next
//! character, as in Hive string literals.

use crate::error::QueryError;
use crate::query::Binding;

/// Replace `?` placeholders in `sql` with `bindings`, in order.
///
/// # Errors
///
/// Returns `QueryError::PlaceholderMismatch` if the number of placeholders
/// differs from the number of bindings.
pub fn format_ordinal(sql: &str, bindings: &[Binding]) -> Result<String, QueryError> {
    let mut out = String::with_capacity(sql.len());
    let mut placeholders = 0;
    let mut quote: Option<char> = None;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                out.push(c);
                if c == '\\' && (q == '\'' || q == '"') {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    out.push(c);
                }
                '-' if chars.peek() == Some(&'-') => {
                    // line comment runs to end of line
                    quote = Some('\n');
                    out.push(c);
                }
                '?' => {
                    if let Some(binding) = bindings.get(placeholders) {
                        out.push_str(&binding.render());
                    }
                    placeholders += 1;
                }
                _ => out.push(c),
            },
        }
    }

    if placeholders != bindings.len() {
        return Err(QueryError::PlaceholderMismatch {
            placeholders,
            bindings: bindings.len(),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_placeholder() {
        let sql = format_ordinal("SELECT * FROM users WHERE id = ?", &[Binding::Int(42)]).unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE id = 42");
    }

    #[test]
    fn test_multiple_placeholders_in_order() {
        let bindings = vec![
            Binding::Literal("18.0".to_string()),
            Binding::Literal("'John'".to_string()),
        ];
        let sql = format_ordinal("SELECT * FROM users WHERE age > ? AND name = ?", &bindings)
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE age > 18.0 AND name = 'John'");
    }

    #[test]
    fn test_placeholder_in_string_is_ignored() {
        let sql = format_ordinal("SELECT 'why?', ? FROM t", &[Binding::Null]).unwrap();
        assert_eq!(sql, "SELECT 'why?', NULL FROM t");
    }

    #[test]
    fn test_placeholder_in_identifier_and_comment_is_ignored() {
        let sql = format_ordinal(
            "SELECT `col?` FROM t -- really?\nWHERE x = ?",
            &[Binding::Int(1)],
        )
        .unwrap();
        assert_eq!(sql, "SELECT `col?` FROM t -- really?\nWHERE x = 1");
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let sql = format_ordinal("SELECT 'it''s ?' , ?", &[Binding::Int(1)]).unwrap();
        assert_eq!(sql, "SELECT 'it''s ?' , 1");
    }

    #[test]
    fn test_backslash_escaped_quote_inside_string() {
        let sql = format_ordinal(r"SELECT 'it\'s ?', ?", &[Binding::Int(1)]).unwrap();
        assert_eq!(sql, r"SELECT 'it\'s ?', 1");
    }

    #[test]
    fn test_escaped_backslash_still_closes_string() {
        let sql = format_ordinal(r"SELECT '\\', ?", &[Binding::Int(2)]).unwrap();
        assert_eq!(sql, r"SELECT '\\', 2");
    }

    #[test]
    fn test_no_placeholders_no_bindings() {
        let sql = format_ordinal("SELECT 1", &[]).unwrap();
        assert_eq!(sql, "SELECT 1");
    }

    #[test]
    fn test_too_few_bindings() {
        let err = format_ordinal("SELECT ?, ?", &[Binding::Int(1)]).unwrap_err();
        assert_eq!(
            err,
            QueryError::PlaceholderMismatch {
                placeholders: 2,
                bindings: 1
            }
        );
    }

    #[test]
    fn test_too_many_bindings() {
        assert!(format_ordinal("SELECT ?", &[Binding::Int(1), Binding::Int(2)]).is_err());
    }
}
