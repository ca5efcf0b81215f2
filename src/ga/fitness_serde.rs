//! Serde adapter for fitness values.
//!
//! JSON has no representation for infinities, and `serde_json` writes them
//! as `null`. Infeasible fitness (`-∞`) is a normal value in run results, so
//! non-finite values are written as the strings `"-inf"`, `"inf"` and
//! `"nan"`; finite values stay plain numbers.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "u_cropland::ga::fitness_serde")]
//!     fitness: f64,
//! }
//!
//! let json = serde_json::to_string(&Row { fitness: f64::NEG_INFINITY }).unwrap();
//! assert_eq!(json, r#"{"fitness":"-inf"}"#);
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let repr = if value.is_finite() {
        Repr::Number(*value)
    } else if value.is_nan() {
        Repr::Text("nan".into())
    } else if value.is_sign_negative() {
        Repr::Text("-inf".into())
    } else {
        Repr::Text("inf".into())
    };
    repr.serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => match text.as_str() {
            "-inf" => Ok(f64::NEG_INFINITY),
            "inf" => Ok(f64::INFINITY),
            "nan" => Ok(f64::NAN),
            other => Err(D::Error::custom(format!(
                "expected a number, \"-inf\", \"inf\" or \"nan\", got \"{other}\""
            ))),
        },
    }
}
