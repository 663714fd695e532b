//! Sequences over dynamically shaped JSON values.
//!
//! [`from_json`] classifies a [`Value`] at runtime, the way untyped callers hand
//! over collection-like inputs: arrays and strings are sequences directly, and
//! an object with a numeric `length` member is read as an array-like with keys
//! `"0"`, `"1"`, and so on.

use std::rc::Rc;

use log::debug;
use serde_json::{Map, Value};

use crate::{InvalidSourceError, Sequence, Source};

/// Build a sequence over a JSON value.
///
/// - an array yields its elements;
/// - a string yields each character as a one-character string value;
/// - an object with a `length` member yields `value["0"]` up to
///   `value[length - 1]`, with missing keys read as `null`.
///
/// Any other value is rejected, as is an array-like whose `length` is not a
/// non-negative integer.
///
/// ```rust
/// use lazyseq::from_json;
/// use serde_json::json;
///
/// let letters = from_json(&json!("hi")).unwrap();
/// assert_eq!(letters.collect(), vec![json!("h"), json!("i")]);
///
/// let array_like = from_json(&json!({"length": 2, "0": true})).unwrap();
/// assert_eq!(array_like.collect(), vec![json!(true), json!(null)]);
///
/// assert!(from_json(&json!(42)).is_err());
/// ```
pub fn from_json(value: &Value) -> Result<Sequence<'static, Value>, InvalidSourceError> {
    match value {
        Value::Array(items) => Ok(Sequence::new(items.clone())),
        Value::String(text) => {
            let chars: Vec<Value> = text.chars().map(|c| Value::String(c.into())).collect();
            Ok(Sequence::new(chars))
        }
        Value::Object(members) => match members.get("length") {
            Some(length) => array_like(members, length),
            None => reject("object without a length"),
        },
        Value::Null => reject("null"),
        Value::Bool(_) => reject("boolean"),
        Value::Number(_) => reject("number"),
    }
}

fn array_like(
    members: &Map<String, Value>,
    length: &Value,
) -> Result<Sequence<'static, Value>, InvalidSourceError> {
    let Some(count) = length.as_i64() else {
        debug!("rejected array-like with length {length}");
        return Err(InvalidSourceError::InvalidLength(length.to_string()));
    };
    let members = Rc::new(members.clone());
    let source = Source::array_like(count, move |index| {
        members.get(&index.to_string()).cloned().unwrap_or(Value::Null)
    })
    .inspect_err(|err| debug!("rejected array-like: {err}"))?;
    Ok(Sequence::new(source))
}

fn reject(kind: &'static str) -> Result<Sequence<'static, Value>, InvalidSourceError> {
    debug!("rejected {kind} as a sequence source");
    Err(InvalidSourceError::Unrecognized(kind))
}
