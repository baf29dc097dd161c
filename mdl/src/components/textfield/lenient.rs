//! Forgiving field deserializers for [`super::TextfieldProps`].
//!
//! A key holding the wrong kind of value falls back to its default and is
//! logged, so one bad option never rejects the whole configuration.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Null(()),
    Valid(T),
    Invalid(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Null(()),
    Number(u32),
    Text(String),
    Invalid(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D, expected: &str) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Null(()) => None,
        Lenient::Valid(value) => Some(value),
        Lenient::Invalid(IgnoredAny) => {
            log::warn!("Ignoring textfield option: expected {expected}");
            None
        }
    })
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    lenient(deserializer, "text")
}

pub fn label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    text(deserializer).map(Option::unwrap_or_default)
}

pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    lenient(deserializer, "true or false").map(|v| v.unwrap_or(false))
}

/// Row counts also accept numeric strings (`"3"`).
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(match Count::deserialize(deserializer)? {
        Count::Null(()) => None,
        Count::Number(n) => Some(n),
        Count::Text(text) => match text.trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                log::warn!("Ignoring textfield option: {text:?} is not a row count");
                None
            }
        },
        Count::Invalid(IgnoredAny) => {
            log::warn!("Ignoring textfield option: expected a row count");
            None
        }
    })
}
