//! Core data types: one transient [`Entry`] per usable line of the env file.

/// One `KEY=VALUE` assignment extracted from a line of the env file.
///
/// Entries are transient: created when a line is split, consumed when the
/// external command for it is built, and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    /// The dotted configuration path for this entry's key:
    /// lowercased, with every underscore replaced by a period.
    ///
    /// `DB_PASSWORD` → `db.password`
    pub fn path(&self) -> String {
        self.key.to_lowercase().replace('_', ".")
    }
}

/// Splits a line on the first `=` into a key and a trimmed value.
///
/// Returns `None` when the separator is missing or when either half is empty
/// after trimming the value. No quoting, escaping, or comment syntax is
/// recognized; the value is everything after the first `=`.
pub fn parse_line(line: &str) -> Option<Entry> {
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some(Entry {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> Entry {
        Entry {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_simple_assignment() {
        assert_eq!(
            parse_line("DB_PASSWORD=secret123"),
            Some(entry("DB_PASSWORD", "secret123"))
        );
    }

    #[test]
    fn test_parse_trims_value_whitespace() {
        assert_eq!(
            parse_line("API_KEY=abc123   "),
            Some(entry("API_KEY", "abc123"))
        );
        assert_eq!(
            parse_line("API_KEY=   abc123"),
            Some(entry("API_KEY", "abc123"))
        );
    }

    #[test]
    fn test_parse_value_keeps_later_separators() {
        // Only the first `=` splits; the rest belongs to the value.
        assert_eq!(
            parse_line("DB_URL=postgres://u:p@host?a=b"),
            Some(entry("DB_URL", "postgres://u:p@host?a=b"))
        );
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(parse_line("JUST_A_KEY"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_parse_empty_key() {
        assert_eq!(parse_line("=value"), None);
    }

    #[test]
    fn test_parse_empty_value() {
        assert_eq!(parse_line("KEY="), None);
        assert_eq!(parse_line("KEY=   "), None);
    }

    #[test]
    fn test_path_lowercases_and_dots() {
        assert_eq!(entry("DB_PASSWORD", "x").path(), "db.password");
        assert_eq!(entry("SMTP_SERVER_HOST", "x").path(), "smtp.server.host");
    }

    #[test]
    fn test_path_key_without_underscores() {
        assert_eq!(entry("TOKEN", "x").path(), "token");
        assert_eq!(entry("already.dotted", "x").path(), "already.dotted");
    }
}
