use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Record;
use crate::query::resolver::{FieldValue, Listable, numeric_bound};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Paypal,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }
}

/// A customer order, denormalized with the buyer's email and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub user_name: Option<String>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub items_count: i64,
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listable for Order {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.id.as_str()),
            Some(self.user_email.as_str()),
            self.user_name.as_deref(),
        ]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "user_id" => FieldValue::text(&self.user_id),
            "user_email" => FieldValue::text(&self.user_email),
            "user_name" => FieldValue::opt_text(self.user_name.as_deref()),
            "total_amount" => self.total_amount.into(),
            "status" => FieldValue::text(self.status.as_str()),
            "items_count" => self.items_count.into(),
            "payment_method" => FieldValue::text(self.payment_method.as_str()),
            "shipping_address" => FieldValue::text(&self.shipping_address),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => return None,
        };
        Some(value)
    }

    fn filter(&self, key: &str, value: &str) -> Option<bool> {
        match key {
            "status" => Some(self.status.as_str() == value),
            "payment_method" => Some(self.payment_method.as_str() == value),
            "minAmount" => numeric_bound(self.total_amount, value, true),
            "maxAmount" => numeric_bound(self.total_amount, value, false),
            _ => None,
        }
    }
}
