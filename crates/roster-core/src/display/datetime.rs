//! DateTime display utilities.

use std::fmt;

use jiff::civil::DateTime;

/// Formats a civil datetime as `YYYY-MM-DD HH:MM`.
pub struct ShortDateTime<'a>(pub &'a DateTime);

impl fmt::Display for ShortDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_short_format_drops_seconds() {
        let value = date(2024, 1, 1).at(23, 59, 59, 999_999_999);
        assert_eq!(ShortDateTime(&value).to_string(), "2024-01-01 23:59");
    }
}
