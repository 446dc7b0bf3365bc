/*
[INPUT]:  Raw JSON response bodies from /services/rest
[OUTPUT]: Decoded envelope split into payload or error body
[POS]:    Data layer - response envelope decoding
[UPDATE]: When the response envelope format changes
*/

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::http::{MindMeisterError, Result};

/// Payload of a successful call: the `rsp` object, `stat` included.
pub type Payload = Map<String, Value>;

const STAT_FAIL: &str = "fail";

/// Top level `{"rsp": {...}}` wrapper.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope {
    pub rsp: Payload,
}

/// Error body carried by a failed envelope.
///
/// Decoding never fails: a missing or unreadable `code` becomes 0 and a
/// missing or null `msg` becomes empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_code")]
    pub code: i64,
    #[serde(default, deserialize_with = "lenient_msg")]
    pub msg: String,
}

impl ErrorBody {
    fn from_value(err: Option<Value>) -> Self {
        match err {
            Some(Value::Object(fields)) => Self {
                code: fields.get("code").map(code_from_value).unwrap_or_default(),
                msg: fields.get("msg").map(msg_from_value).unwrap_or_default(),
            },
            Some(Value::String(msg)) => Self { code: 0, msg },
            _ => Self::default(),
        }
    }
}

impl ApiEnvelope {
    /// Parse a response body. Non-JSON bodies surface as serialization
    /// errors, JSON without a `rsp` object as an invalid response.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        match value {
            Value::Object(mut root) => match root.remove("rsp") {
                Some(Value::Object(rsp)) => Ok(Self { rsp }),
                Some(other) => Err(MindMeisterError::InvalidResponse(format!(
                    "rsp is not an object: {other}"
                ))),
                None => Err(MindMeisterError::InvalidResponse(
                    "missing rsp envelope".to_string(),
                )),
            },
            other => Err(MindMeisterError::InvalidResponse(format!(
                "expected JSON object, got {other}"
            ))),
        }
    }

    pub fn stat(&self) -> Option<&str> {
        self.rsp.get("stat").and_then(Value::as_str)
    }

    pub fn is_fail(&self) -> bool {
        self.stat() == Some(STAT_FAIL)
    }

    /// Split into the payload or, for `stat == "fail"`, the error body.
    ///
    /// Every failed envelope yields an [`ErrorBody`], even when `err` is
    /// absent or malformed.
    pub fn into_result(mut self) -> std::result::Result<Payload, ErrorBody> {
        if !self.is_fail() {
            return Ok(self.rsp);
        }
        Err(ErrorBody::from_value(self.rsp.remove("err")))
    }
}

fn lenient_code<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .map(code_from_value)
        .unwrap_or_default())
}

fn lenient_msg<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .map(msg_from_value)
        .unwrap_or_default())
}

// Integers as is, floats truncated, strings by leading digits, anything else 0.
fn code_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|code| code as i64))
            .unwrap_or_default(),
        Value::String(text) => leading_integer(text),
        _ => 0,
    }
}

fn msg_from_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// Lenient like the service's own clients: "112" -> 112, "12abc" -> 12, "abc" -> 0.
fn leading_integer(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
