//! Loose scalar coercions for request parameters and stored fields.
//!
//! Callers send numbers, numeric strings, booleans or arrays, and stored
//! documents are not schema-checked, so values are read the permissive way:
//! a relational comparison sees [`loose_number`], a match sees the
//! [`leading_integer`] of the value's text form.

use mongodb::bson::Bson;
use serde_json::Value;

pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

pub fn bson_is_truthy(value: &Bson) -> bool {
    match value {
        Bson::Null | Bson::Undefined => false,
        Bson::Boolean(b) => *b,
        Bson::Int32(n) => *n != 0,
        Bson::Int64(n) => *n != 0,
        Bson::Double(d) => *d != 0.0 && !d.is_nan(),
        Bson::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Number seen by `<` and `>`; `NaN` when the value has no numeric reading.
pub fn loose_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => text_number(s),
        Value::Array(_) => text_number(&loose_text(value)),
        Value::Object(_) => f64::NAN,
    }
}

/// Text form of a request value; arrays join their items with commas.
pub fn loose_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => loose_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Text form of a stored field.
pub fn bson_text(value: &Bson) -> String {
    match value {
        Bson::String(s) => s.clone(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        Bson::Double(d) => number_text(*d),
        Bson::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Shortest text form; exponent notation outside `[1e-6, 1e21)`.
pub fn number_text(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if x == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&x.abs()) {
        format!("{}", x)
    } else {
        format!("{:e}", x)
    }
}

/// Integer prefix of `text` after leading whitespace and an optional sign;
/// `0x` switches to hexadecimal. `None` when no digit follows.
pub fn leading_integer(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    let value = accumulate(&s[..end], radix);
    Some(if negative { -value } else { value })
}

/// [`leading_integer`] of the value's text form.
pub fn leading_integer_of(value: &Value) -> Option<f64> {
    leading_integer(&loose_text(value))
}

fn text_number(text: &str) -> f64 {
    let s = text.trim();
    match s {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return if !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)) {
                accumulate(digits, radix)
            } else {
                f64::NAN
            };
        }
    }

    // f64::from_str also takes "inf" and "nan"; only plain decimal literals count.
    if s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn accumulate(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}
