//! Deterministic mock data the dashboard starts with.

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::auth::Account;
use crate::models::orders::{Order, OrderStatus, PaymentMethod};
use crate::models::products::{Product, ProductStatus};
use crate::models::users::{Role, User, UserStatus};

pub const PRODUCT_COUNT: usize = 40;
pub const USER_COUNT: usize = 25;
pub const ORDER_COUNT: usize = 60;

const PRODUCT_NAMES: [&str; 20] = [
    "Wireless Mouse",
    "Mechanical Keyboard",
    "USB-C Hub",
    "Noise Cancelling Headphones",
    "4K Monitor",
    "Laptop Stand",
    "HD Webcam",
    "Desk Lamp",
    "Ergonomic Chair",
    "Standing Desk",
    "Portable SSD",
    "Bluetooth Speaker",
    "Smart Watch",
    "Fitness Tracker",
    "Coffee Grinder",
    "French Press",
    "Yoga Mat",
    "Water Bottle",
    "Backpack",
    "Notebook Set",
];

const CATEGORIES: [&str; 4] = ["Electronics", "Furniture", "Kitchen", "Sports"];

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bruno", "Chloe", "Dmitri", "Elena", "Farid", "Grace", "Hugo", "Ines", "Jonas",
];

const LAST_NAMES: [&str; 5] = ["Martin", "Nguyen", "Okafor", "Petrov", "Silva"];

const CITIES: [&str; 5] = ["Lyon", "Porto", "Berlin", "Austin", "Osaka"];

/// 2024-01-01T00:00:00Z
fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(1_704_067_200)
}

pub fn products() -> Vec<Product> {
    (0..PRODUCT_COUNT)
        .map(|i| {
            let base = PRODUCT_NAMES[i % PRODUCT_NAMES.len()];
            let name = if i < PRODUCT_NAMES.len() {
                base.to_string()
            } else {
                format!("{base} Pro")
            };
            let created_at = epoch() + TimeDelta::days(i as i64);
            let status = match i % 7 {
                5 => ProductStatus::Inactive,
                6 => ProductStatus::Discontinued,
                _ => ProductStatus::Active,
            };

            Product {
                id: format!("prod-{:03}", i + 1),
                description: (i % 4 != 3).then(|| format!("{name} for everyday use")),
                name,
                price: 9.99 + (i as f64 * 37.0) % 250.0,
                stock: if i % 6 == 0 { 0 } else { (i as i64 * 13) % 120 + 1 },
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                status,
                image_url: (i % 5 != 4).then(|| format!("https://picsum.photos/seed/{}/150", i + 1)),
                created_at,
                updated_at: created_at + TimeDelta::hours((i % 48) as i64),
            }
        })
        .collect()
}

pub fn users() -> Vec<User> {
    (0..USER_COUNT)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[i % LAST_NAMES.len()];
            let created_at = epoch() + TimeDelta::days(i as i64 * 3);
            let role = match i % 10 {
                0 => Role::Admin,
                9 => Role::Guest,
                _ => Role::User,
            };
            let status = match i % 8 {
                6 => UserStatus::Inactive,
                7 => UserStatus::Suspended,
                _ => UserStatus::Active,
            };

            User {
                id: format!("user-{:03}", i + 1),
                email: format!("{}.{}{}@example.com", first, last, i + 1).to_lowercase(),
                full_name: (i % 6 != 5).then(|| format!("{first} {last}")),
                avatar_url: (i % 3 == 0).then(|| format!("https://i.pravatar.cc/150?u={}", i + 1)),
                role,
                status,
                last_login: (i % 4 != 2).then(|| created_at + TimeDelta::days(30 + i as i64)),
                created_at,
            }
        })
        .collect()
}

/// Orders reference the seeded users so emails and names line up.
pub fn orders(users: &[User]) -> Vec<Order> {
    if users.is_empty() {
        return Vec::new();
    }

    (0..ORDER_COUNT)
        .map(|i| {
            let buyer = &users[(i * 7) % users.len()];
            let created_at = epoch() + TimeDelta::days(10) + TimeDelta::hours(i as i64 * 29);
            let status = match i % 5 {
                0 => OrderStatus::Pending,
                1 => OrderStatus::Processing,
                2 => OrderStatus::Shipped,
                3 => OrderStatus::Delivered,
                _ => OrderStatus::Cancelled,
            };
            let payment_method = match i % 3 {
                0 => PaymentMethod::Card,
                1 => PaymentMethod::Paypal,
                _ => PaymentMethod::BankTransfer,
            };

            Order {
                id: format!("ORD-{}", 1001 + i),
                user_id: buyer.id.clone(),
                user_email: buyer.email.clone(),
                user_name: buyer.full_name.clone(),
                total_amount: 15.0 + (i as f64 * 53.5) % 900.0,
                status,
                items_count: (i as i64 % 6) + 1,
                payment_method,
                shipping_address: format!(
                    "{} Main Street, {}",
                    10 + i,
                    CITIES[i % CITIES.len()]
                ),
                created_at,
                updated_at: created_at + TimeDelta::hours(6),
            }
        })
        .collect()
}

/// The two sign-in accounts: one verified, one still awaiting verification.
pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            id: "1".to_string(),
            email: "demo@example.com".to_string(),
            password: "Password123".to_string(),
            name: Some("Demo User".to_string()),
            email_verified: true,
            avatar: None,
            created_at: epoch(),
        },
        Account {
            id: "2".to_string(),
            email: "test@example.com".to_string(),
            password: "Test1234".to_string(),
            name: Some("Test User".to_string()),
            email_verified: false,
            avatar: None,
            created_at: epoch() + TimeDelta::days(1),
        },
    ]
}
