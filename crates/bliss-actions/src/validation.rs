//! Form validation for message requests
//!
//! Rules live in a static `(field, predicate, message)` table; every failing
//! rule contributes one issue, in table order.

use bliss_llm::GenerateMessageInput;
use indexmap::IndexMap;

/// Untrusted form submission, field name to raw value
pub type RawForm = IndexMap<String, String>;

/// Outcome of validating a [`RawForm`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(GenerateMessageInput),
    Invalid(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Age,
    Interests,
}

impl Field {
    const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Interests => "interests",
        }
    }
}

/// A field value after coercion, before rule checks
#[derive(Debug, Clone, Copy)]
enum Value<'a> {
    Text(&'a str),
    Number(f64),
}

struct Rule {
    field: Field,
    predicate: fn(Value<'_>) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        predicate: at_least_2_chars,
        message: "Name must be at least 2 characters.",
    },
    Rule {
        field: Field::Age,
        predicate: is_integer,
        message: "Expected integer, received float",
    },
    Rule {
        field: Field::Age,
        predicate: is_positive,
        message: "Age must be a positive number.",
    },
    Rule {
        field: Field::Age,
        predicate: fits_u32,
        message: "Number must be less than or equal to 4294967295",
    },
    Rule {
        field: Field::Interests,
        predicate: at_least_5_chars,
        message: "Please list some interests.",
    },
];

/// Length in UTF-16 code units, as browsers measure strings
fn text_len(value: Value<'_>) -> usize {
    match value {
        Value::Text(text) => text.encode_utf16().count(),
        Value::Number(_) => 0,
    }
}

fn at_least_2_chars(value: Value<'_>) -> bool {
    text_len(value) >= 2
}

fn at_least_5_chars(value: Value<'_>) -> bool {
    text_len(value) >= 5
}

fn is_integer(value: Value<'_>) -> bool {
    matches!(value, Value::Number(n) if n.is_finite() && n.fract() == 0.0)
}

fn is_positive(value: Value<'_>) -> bool {
    matches!(value, Value::Number(n) if n > 0.0)
}

fn fits_u32(value: Value<'_>) -> bool {
    matches!(value, Value::Number(n) if n <= f64::from(u32::MAX))
}

/// Coerce a raw age the way a browser `Number()` call would
///
/// Blank input becomes `0`. Decimal literals, unsigned `0x`/`0o`/`0b`
/// integers and a case-sensitive `Infinity` are accepted; anything else,
/// including `inf` and `nan`, becomes `NaN`.
fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let (Some(radix), Some(digits)) = (radix, trimmed.get(2..)) {
        return parse_radix(digits, radix);
    }

    let is_decimal_literal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// Unsigned integer digits in `radix`, accumulated as a float like JS does
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
        })
        .unwrap_or(f64::NAN)
}

/// Coerce one field, or report the type-level issue that stops its rules
fn coerce(form: &RawForm, field: Field) -> Result<Value<'_>, &'static str> {
    let raw = form.get(field.key()).map(String::as_str);

    match (field, raw) {
        (Field::Age, raw) => {
            let number = raw.map_or(f64::NAN, coerce_number);
            if number.is_nan() {
                Err("Expected number, received nan")
            } else {
                Ok(Value::Number(number))
            }
        }
        (_, Some(text)) => Ok(Value::Text(text.trim())),
        (_, None) => Err("Required"),
    }
}

/// Validate a message form against the rule table
pub fn validate_message_form(form: &RawForm) -> Validation {
    let mut issues = Vec::new();
    let mut values = Vec::with_capacity(3);

    for field in [Field::Name, Field::Age, Field::Interests] {
        match coerce(form, field) {
            Ok(value) => {
                issues.extend(
                    RULES
                        .iter()
                        .filter(|rule| rule.field == field && !(rule.predicate)(value))
                        .map(|rule| rule.message.to_owned()),
                );
                values.push(value);
            }
            Err(issue) => issues.push(issue.to_owned()),
        }
    }

    match (issues.is_empty(), values.as_slice()) {
        (true, [Value::Text(name), Value::Number(age), Value::Text(interests)]) => {
            // range checked by the rules above
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let age = *age as u32;

            Validation::Valid(GenerateMessageInput {
                name: (*name).to_owned(),
                age,
                interests: (*interests).to_owned(),
            })
        }
        _ => Validation::Invalid(issues),
    }
}
