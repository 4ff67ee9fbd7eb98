//! Payment-side value types shared by the orchestrator and the payment executor.

use crate::model::{OrderId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque transaction identifier issued by the payment executor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payment methods understood by the payment executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Unspecified,
    Card,
    /// Fast-payment-transfer system.
    Sbp,
    CreditCard,
    InvestorMoney,
}

impl PaymentMethod {
    /// Maps a client-supplied label to a method.
    ///
    /// Accepts both the short (`CARD`) and the prefixed (`PAYMENT_METHOD_CARD`)
    /// spellings. Anything else, including an empty label, is `Unspecified` and is
    /// still passed on to the payment executor.
    pub fn from_label(label: &str) -> Self {
        match label {
            "CARD" | "PAYMENT_METHOD_CARD" => PaymentMethod::Card,
            "SBP" | "PAYMENT_METHOD_SBP" => PaymentMethod::Sbp,
            "CREDIT_CARD" | "PAYMENT_METHOD_CREDIT_CARD" => PaymentMethod::CreditCard,
            "INVESTOR_MONEY" | "PAYMENT_METHOD_INVESTOR_MONEY" => PaymentMethod::InvestorMoney,
            _ => PaymentMethod::Unspecified,
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PaymentMethod::Unspecified => "UNSPECIFIED",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Sbp => "SBP",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::InvestorMoney => "INVESTOR_MONEY",
        };
        f.write_str(label)
    }
}

/// Payload of the payment authorization contract.
#[derive(Debug, Clone, PartialEq)]
pub struct PayOrderRequest {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub payment_method: PaymentMethod,
}
