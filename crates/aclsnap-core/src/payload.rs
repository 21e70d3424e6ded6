//! Opaque ACL payload.
//!
//! Whatever the device returned for `show ip access-lists <name>` is kept
//! as a generic JSON value (null, bool, number, string, ordered array,
//! ordered object). Nothing in this crate looks inside it beyond asking
//! whether it is empty.

use std::io::Write;
use std::num::FpCategory;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// The structured reply to an ACL query, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `true` for values that carry no data: `null`, `false`, zero, and
    /// empty strings, arrays, or objects.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }

    /// Serialize with 4-space indentation into `writer`.
    pub fn write_pretty<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
        self.0.serialize(&mut ser)
    }

    /// Serialize with 4-space indentation into a byte buffer.
    pub fn to_pretty_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::with_capacity(256);
        self.write_pretty(&mut buf)?;
        Ok(buf)
    }

    /// Serialize with 4-space indentation into a string.
    pub fn to_pretty_string(&self) -> Result<String, serde_json::Error> {
        let buf = self.to_pretty_vec()?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_values_are_detected() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(Payload::new(value.clone()).is_empty(), "{value} should be empty");
        }
    }

    #[test]
    fn values_with_data_are_not_empty() {
        for value in [
            json!(true),
            json!(7),
            json!(-0.5),
            json!("edge-in"),
            json!([null]),
            json!({ "aclList": [] }),
        ] {
            assert!(!Payload::new(value.clone()).is_empty(), "{value} should not be empty");
        }
    }

    #[test]
    fn pretty_output_uses_four_space_indent() {
        let payload = Payload::new(json!({ "aclList": [{ "name": "edge-in", "readonly": false }] }));

        let expected = "{\n    \"aclList\": [\n        {\n            \"name\": \"edge-in\",\n            \"readonly\": false\n        }\n    ]\n}";
        assert_eq!(payload.to_pretty_string().unwrap(), expected);
    }

    #[test]
    fn object_key_order_is_preserved() {
        let payload: Payload =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let text = payload.to_pretty_string().unwrap();

        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        let mid = text.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid, "keys reordered:\n{text}");
    }
}
