//! Menu catalog store.
//!
//! The catalog is read-only seed data; the store only lists and looks up.

use async_trait::async_trait;
use rust_decimal::Decimal;

use saffron_core::MenuItemId;

use super::RepositoryError;
use crate::models::MenuItem;

/// Read-only access to the menu catalog.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// All menu items in stable insertion order.
    async fn list(&self) -> Result<Vec<MenuItem>, RepositoryError>;

    /// Look up a single item. Returns `None` if the id is unknown.
    async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, RepositoryError>;
}

/// In-memory menu catalog backed by seed data.
pub struct InMemoryMenuStore {
    items: Vec<MenuItem>,
}

impl InMemoryMenuStore {
    /// Create a store with the standard catering catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self { items: seed_menu() }
    }

    /// Create a store with explicit items (tests).
    #[must_use]
    pub const fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn list(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        Ok(self.items.clone())
    }

    async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, RepositoryError> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }
}

/// The seeded catering catalog.
///
/// Prices are in dollars with two decimal places.
fn seed_menu() -> Vec<MenuItem> {
    let item = |id: i32, name: &str, description: &str, cents: i64, category: &str, image: &str| {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            price: Decimal::new(cents, 2),
            category: category.to_owned(),
            available: true,
            image: image.to_owned(),
        }
    };

    vec![
        item(
            1,
            "Breakfast Buffet",
            "Start your day with our delicious breakfast buffet featuring fresh pastries, eggs, fruits, and more.",
            2599,
            "Buffet",
            "breakfastBuffet.jpeg",
        ),
        item(
            2,
            "High Tea Package",
            "Elegant high tea service with assorted sandwiches, scones, and premium teas.",
            3599,
            "Packages",
            "HighTea.jpg",
        ),
        item(
            3,
            "Family Dinner Package",
            "Perfect for family gatherings, includes main course, sides, and dessert.",
            8999,
            "Packages",
            "familyDinner.jpeg",
        ),
        item(
            4,
            "Corporate Lunch Box",
            "Individual packed lunches perfect for business meetings and events.",
            1599,
            "Corporate",
            "corporateLunchBox.jpeg",
        ),
        item(
            5,
            "Wedding Buffet",
            "Comprehensive wedding catering package with customizable menu options.",
            7599,
            "Events",
            "weedingBuffet.jpg",
        ),
        item(
            6,
            "Appetizer Platter",
            "Selection of gourmet appetizers perfect for cocktail parties.",
            4599,
            "Platters",
            "appetizerPlatter.jpeg",
        ),
        item(
            7,
            "Kids Party Package",
            "Fun and tasty menu options designed for children's parties.",
            1899,
            "Packages",
            "kidsPartyPackage.webp",
        ),
        item(
            8,
            "BBQ Package",
            "Complete BBQ setup with grilled meats and sides.",
            5599,
            "Packages",
            "BBQpackage.jpeg",
        ),
        item(
            9,
            "Vegetarian Platter",
            "Assorted vegetarian dishes perfect for any occasion.",
            4299,
            "Platters",
            "vageterianPlatter.jpg",
        ),
        item(
            10,
            "Traditional Thali",
            "Complete Indian thali with variety of dishes.",
            3299,
            "Special",
            "tradionalThali.png",
        ),
        item(
            11,
            "Premium Beverage Package",
            "Selection of premium beverages for events.",
            2899,
            "Beverages",
            "PremiumBaverage.jpg",
        ),
        item(
            12,
            "Student Meal Package",
            "Affordable meal packages for student events.",
            1299,
            "Packages",
            "studentmeal.jpeg",
        ),
    ]
}
