//! Inbound callback parameters.
//!
//! The processor calls back with plain GET parameters. They are collected
//! into [`CallbackParams`] untouched, then validated into a typed
//! [`CallbackRequest`] before any order is looked up.

use thiserror::Error;

use crate::domain::foundation::{decode_query, OrderReference, TransactionId};

use super::CallbackAction;

pub const REFERENCE_PARAM: &str = "Reference";
pub const ACTION_PARAM: &str = "Action";
pub const TRANSACTION_PARAM: &str = "Param";

/// Errors raised while validating callback parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackParseError {
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

/// Raw callback parameters as received.
///
/// Parameter names are case-sensitive. When a name is repeated the last
/// value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub reference: Option<String>,
    pub action: Option<String>,
    pub param: Option<String>,
}

impl CallbackParams {
    /// Collects the recognised parameters from a raw query string.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in decode_query(query) {
            match key.as_str() {
                REFERENCE_PARAM => params.reference = Some(value),
                ACTION_PARAM => params.action = Some(value),
                TRANSACTION_PARAM => params.param = Some(value),
                _ => {}
            }
        }
        params
    }

    /// Validates the parameters into a typed request.
    ///
    /// # Errors
    ///
    /// - `MissingParameter("Action")` when the action is absent or blank
    /// - `MissingParameter("Reference")` when the reference is absent or blank
    /// - `MissingParameter("Param")` for an approval without transaction id
    pub fn parse(&self) -> Result<CallbackRequest, CallbackParseError> {
        let raw_action = non_blank(self.action.as_deref())
            .ok_or(CallbackParseError::MissingParameter(ACTION_PARAM))?;
        let action = CallbackAction::parse(raw_action);

        let reference = non_blank(self.reference.as_deref())
            .ok_or(CallbackParseError::MissingParameter(REFERENCE_PARAM))?;
        let reference = OrderReference::new(reference).map_err(|e| {
            CallbackParseError::InvalidParameter {
                field: REFERENCE_PARAM,
                reason: e.to_string(),
            }
        })?;

        let transaction_id = match self.param.as_deref().filter(|p| !p.is_empty()) {
            Some(param) => Some(TransactionId::new(param).map_err(|e| {
                CallbackParseError::InvalidParameter {
                    field: TRANSACTION_PARAM,
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        if action.requires_transaction_id() && transaction_id.is_none() {
            return Err(CallbackParseError::MissingParameter(TRANSACTION_PARAM));
        }

        Ok(CallbackRequest {
            reference,
            action,
            transaction_id,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validated processor callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackRequest {
    pub reference: OrderReference,
    pub action: CallbackAction,
    pub transaction_id: Option<TransactionId>,
}
