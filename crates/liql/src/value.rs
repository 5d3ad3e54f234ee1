//! Clause values and their LiQL rendering.
//!
//! A [`Value`] is the right-hand side of a clause. How it is rendered depends
//! only on whether it converts to an integer: integers go out bare, anything
//! else is wrapped in single quotes. A string such as `"5"` therefore renders
//! as `5`, exactly like the integer `5`.

/// Scalar value on the right-hand side of a clause.
///
/// # Example
///
/// ```
/// use liql::Value;
///
/// assert_eq!(Value::from(5).to_liql(), "5");
/// assert_eq!(Value::from("abc").to_liql(), "'abc'");
/// assert_eq!(Value::from("5").to_liql(), "5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value above `i64::MAX`.
    UInt(u64),
    /// Text value.
    Str(String),
}

impl Value {
    /// Returns the canonical integer text of this value, if it has one.
    ///
    /// Strings count as integers when, after trimming surrounding whitespace,
    /// they are an optionally signed run of ASCII digits, whatever their
    /// length. The canonical form drops a `+` sign and leading zeros.
    pub fn integer_form(&self) -> Option<String> {
        match self {
            Value::Int(n) => Some(n.to_string()),
            Value::UInt(n) => Some(n.to_string()),
            Value::Str(s) => canonical_integer(s),
        }
    }

    /// Renders the value for a LiQL clause.
    pub fn to_liql(&self) -> String {
        format_value(self)
    }
}

/// Renders a clause value: unquoted integer form, or single-quoted text.
///
/// Quotes inside the text are not escaped.
pub fn format_value(value: &Value) -> String {
    match value.integer_form() {
        Some(digits) => digits,
        None => format!("'{value}'"),
    }
}

fn canonical_integer(text: &str) -> Option<String> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = digits.trim_start_matches('0');
    Some(match (digits.is_empty(), negative) {
        (true, _) => "0".to_string(),
        (false, true) => format!("-{digits}"),
        (false, false) => digits.to_string(),
    })
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<i8> for Value {
    fn from(n: i8) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::UInt(n),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_bare() {
        assert_eq!(format_value(&Value::Int(5)), "5");
        assert_eq!(format_value(&Value::Int(-12)), "-12");
        assert_eq!(format_value(&Value::Int(0)), "0");
    }

    #[test]
    fn text_renders_quoted() {
        assert_eq!(format_value(&Value::from("abc")), "'abc'");
        assert_eq!(format_value(&Value::from("")), "''");
        assert_eq!(format_value(&Value::from("5.5")), "'5.5'");
        assert_eq!(format_value(&Value::from("1_000")), "'1_000'");
    }

    #[test]
    fn quotes_are_not_escaped() {
        assert_eq!(format_value(&Value::from("it's")), "'it's'");
    }

    // Numeric-looking identifiers lose their quotes and leading zeros.
    // Callers rely on this, so it stays.
    #[test]
    fn numeric_strings_render_as_integers() {
        assert_eq!(format_value(&Value::from("5")), "5");
        assert_eq!(format_value(&Value::from("007")), "7");
        assert_eq!(format_value(&Value::from(" -3 ")), "-3");
        assert_eq!(format_value(&Value::from("+4")), "4");
    }

    #[test]
    fn zero_forms_collapse() {
        assert_eq!(format_value(&Value::from("000")), "0");
        assert_eq!(format_value(&Value::from("-0")), "0");
        assert_eq!(format_value(&Value::from("+")), "'+'");
        assert_eq!(format_value(&Value::from("-")), "'-'");
        assert_eq!(format_value(&Value::from("--5")), "'--5'");
    }

    #[test]
    fn large_unsigned_stays_numeric() {
        let big = Value::from(u64::MAX);
        assert_eq!(big, Value::UInt(u64::MAX));
        assert_eq!(format_value(&big), u64::MAX.to_string());
        assert_eq!(Value::from(7u64), Value::Int(7));
    }

    #[test]
    fn long_digit_strings_are_integers() {
        assert_eq!(
            format_value(&Value::from("99999999999999999999")),
            "99999999999999999999"
        );
        assert_eq!(
            format_value(&Value::from("-000123456789012345678901234567890")),
            "-123456789012345678901234567890"
        );
    }

    #[test]
    fn integer_form() {
        assert_eq!(Value::from("12").integer_form().as_deref(), Some("12"));
        assert_eq!(Value::from(-4).integer_form().as_deref(), Some("-4"));
        assert_eq!(Value::from("x").integer_form(), None);
        assert_eq!(Value::from("1 2").integer_form(), None);
    }
}
