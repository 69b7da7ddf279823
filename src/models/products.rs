use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::Record;
use crate::query::resolver::{FieldValue, Listable, flag_equals, numeric_bound};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
    Discontinued,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Discontinued => "discontinued",
        }
    }
}

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub status: ProductStatus,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listable for Product {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.description.as_deref(),
            Some(self.category.as_str()),
        ]
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "id" => FieldValue::text(&self.id),
            "name" => FieldValue::text(&self.name),
            "description" => FieldValue::opt_text(self.description.as_deref()),
            "price" => self.price.into(),
            "stock" => self.stock.into(),
            "category" => FieldValue::text(&self.category),
            "status" => FieldValue::text(self.status.as_str()),
            "image_url" => FieldValue::opt_text(self.image_url.as_deref()),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => return None,
        };
        Some(value)
    }

    fn filter(&self, key: &str, value: &str) -> Option<bool> {
        match key {
            "category" => Some(self.category == value),
            "status" => Some(self.status.as_str() == value),
            "minPrice" => numeric_bound(self.price, value, true),
            "maxPrice" => numeric_bound(self.price, value, false),
            "inStock" => flag_equals(self.stock > 0, value),
            _ => None,
        }
    }
}

/// Body of product create and update requests.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be at least 0"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Stock must be at least 0"))]
    pub stock: i64,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub status: ProductStatus,
}

impl ProductInput {
    /// Build a new product with a fresh id and timestamps.
    pub fn into_product(self, id: String, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            status: self.status,
            image_url: Some(PLACEHOLDER_IMAGE_URL.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields of `existing`, keeping id, image and creation time.
    pub fn apply_to(self, existing: Product, now: DateTime<Utc>) -> Product {
        Product {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            status: self.status,
            updated_at: now,
            ..existing
        }
    }
}

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";
