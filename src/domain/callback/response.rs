//! Reply body returned to the processor.
//!
//! The reply is a URL-encoded query string used as the whole HTTP body,
//! `Reference=<ref>&Action=<action>&Reponse=<value>`. An unrecognised action
//! is answered with an empty body.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{decode_query, encode_query};

use super::request::{ACTION_PARAM, REFERENCE_PARAM};

pub const RESPONSE_FIELD: &str = "Reponse";

const OK_VALUE: &str = "OK";
const ERROR_VALUE: &str = "ERROR";

/// Value of the `Reponse` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseValue {
    /// Transition accepted.
    Ok,
    /// Order total answering a `DETAIL` query, already formatted.
    Amount(String),
    /// The callback could not be honoured (unknown order, bad parameters...).
    Error,
}

impl ResponseValue {
    pub fn as_str(&self) -> &str {
        match self {
            ResponseValue::Ok => OK_VALUE,
            ResponseValue::Amount(amount) => amount,
            ResponseValue::Error => ERROR_VALUE,
        }
    }

    fn from_wire(raw: String) -> Self {
        match raw.as_str() {
            OK_VALUE => ResponseValue::Ok,
            ERROR_VALUE => ResponseValue::Error,
            _ => ResponseValue::Amount(raw),
        }
    }
}

/// Failure to read a reply body back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Reply is missing field '{0}'")]
pub struct ResponseDecodeError(pub &'static str);

/// Reply to a processor callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackResponse {
    /// Recognised action, echoed with its result.
    Reply {
        reference: String,
        action: String,
        value: ResponseValue,
    },
    /// Unrecognised action; encodes to the empty string.
    Unrecognized,
}

impl CallbackResponse {
    pub fn ok(reference: impl Into<String>, action: impl Into<String>) -> Self {
        Self::reply(reference, action, ResponseValue::Ok)
    }

    pub fn amount(
        reference: impl Into<String>,
        action: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self::reply(reference, action, ResponseValue::Amount(amount.into()))
    }

    pub fn error(reference: impl Into<String>, action: impl Into<String>) -> Self {
        Self::reply(reference, action, ResponseValue::Error)
    }

    fn reply(reference: impl Into<String>, action: impl Into<String>, value: ResponseValue) -> Self {
        CallbackResponse::Reply {
            reference: reference.into(),
            action: action.into(),
            value,
        }
    }

    /// The `Reponse` value, if any.
    pub fn value(&self) -> Option<&ResponseValue> {
        match self {
            CallbackResponse::Reply { value, .. } => Some(value),
            CallbackResponse::Unrecognized => None,
        }
    }

    /// Flattens the reply to the body sent to the processor.
    pub fn encode(&self) -> String {
        match self {
            CallbackResponse::Reply {
                reference,
                action,
                value,
            } => encode_query(&[
                (REFERENCE_PARAM, reference.as_str()),
                (ACTION_PARAM, action.as_str()),
                (RESPONSE_FIELD, value.as_str()),
            ]),
            CallbackResponse::Unrecognized => String::new(),
        }
    }

    /// Reads a reply body back. The empty body is `Unrecognized`.
    pub fn decode(body: &str) -> Result<Self, ResponseDecodeError> {
        if body.trim().is_empty() {
            return Ok(CallbackResponse::Unrecognized);
        }

        let mut reference = None;
        let mut action = None;
        let mut value = None;
        for (key, v) in decode_query(body) {
            match key.as_str() {
                REFERENCE_PARAM => reference = Some(v),
                ACTION_PARAM => action = Some(v),
                RESPONSE_FIELD => value = Some(v),
                _ => {}
            }
        }

        Ok(CallbackResponse::Reply {
            reference: reference.ok_or(ResponseDecodeError(REFERENCE_PARAM))?,
            action: action.ok_or(ResponseDecodeError(ACTION_PARAM))?,
            value: ResponseValue::from_wire(value.ok_or(ResponseDecodeError(RESPONSE_FIELD))?),
        })
    }
}

impl fmt::Display for CallbackResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
