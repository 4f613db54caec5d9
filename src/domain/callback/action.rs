//! Callback action codes sent by the processor.

use std::fmt;

use crate::domain::order::OrderStatus;

/// Operation requested by a processor callback.
///
/// Parsing is case-insensitive; anything unrecognised becomes `Unknown` and
/// is answered with an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallbackAction {
    /// Amount verification query before the card form is shown.
    Detail,
    /// Payment approved.
    Accord,
    /// Technical error on the processor side.
    Erreur,
    /// Payment refused by the issuer.
    Refus,
    /// Payment abandoned by the customer.
    Annulation,
    /// Any other code, kept verbatim.
    Unknown(String),
}

impl CallbackAction {
    /// Parses an action code, ignoring ASCII case and surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        let code = raw.trim();
        [
            CallbackAction::Detail,
            CallbackAction::Accord,
            CallbackAction::Erreur,
            CallbackAction::Refus,
            CallbackAction::Annulation,
        ]
        .into_iter()
        .find(|action| action.code().eq_ignore_ascii_case(code))
        .unwrap_or_else(|| CallbackAction::Unknown(raw.to_string()))
    }

    /// Canonical upper-case code.
    pub fn code(&self) -> &str {
        match self {
            CallbackAction::Detail => "DETAIL",
            CallbackAction::Accord => "ACCORD",
            CallbackAction::Erreur => "ERREUR",
            CallbackAction::Refus => "REFUS",
            CallbackAction::Annulation => "ANNULATION",
            CallbackAction::Unknown(raw) => raw,
        }
    }

    /// Status the order should end up in, for actions that change it.
    pub fn target_status(&self) -> Option<OrderStatus> {
        match self {
            CallbackAction::Accord => Some(OrderStatus::Processing),
            CallbackAction::Erreur => Some(OrderStatus::Failed),
            CallbackAction::Refus | CallbackAction::Annulation => Some(OrderStatus::Cancelled),
            CallbackAction::Detail | CallbackAction::Unknown(_) => None,
        }
    }

    /// Audit note attached to the order when the action is applied.
    pub fn audit_note(&self) -> Option<&'static str> {
        match self {
            CallbackAction::Accord => Some("Credit Card Transaction Approved"),
            CallbackAction::Erreur => Some("Transaction error"),
            CallbackAction::Refus => Some("Transaction refused"),
            CallbackAction::Annulation => Some("Transaction canceled"),
            CallbackAction::Detail | CallbackAction::Unknown(_) => None,
        }
    }

    /// True for the approval action, the only one that carries `Param`.
    pub fn requires_transaction_id(&self) -> bool {
        matches!(self, CallbackAction::Accord)
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
