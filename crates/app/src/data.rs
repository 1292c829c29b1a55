//! Embedded seed dataset (the demo fixtures).

use storefront_catalog::{Category, Dataset, Product, Sex, User};
use storefront_core::{CategoryId, ProductId, UserId};

/// The built-in demo catalog, used when no dataset file is supplied.
pub fn seed() -> Dataset {
    Dataset {
        users: vec![
            user(1, "Roma", Sex::Male),
            user(2, "Anna", Sex::Female),
            user(3, "Max", Sex::Male),
            user(4, "John", Sex::Male),
        ],
        categories: vec![
            category(1, "Grocery", "🍞", 2),
            category(2, "Drinks", "🍺", 1),
            category(3, "Fruits", "🍏", 2),
            category(4, "Electronics", "💻", 1),
            category(5, "Clothes", "👚", 3),
        ],
        products: vec![
            product(1, "Milk", 1),
            product(2, "Bread", 1),
            product(3, "Garlic", 1),
            product(4, "Cola", 2),
            product(5, "Kvass", 2),
            product(6, "Apple", 3),
            product(7, "Banana", 3),
            product(8, "iPhone", 4),
            product(9, "Laptop", 4),
            product(10, "Jeans", 5),
            product(11, "Sweater", 5),
        ],
    }
}

fn user(id: i64, name: &str, sex: Sex) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        sex,
    }
}

fn category(id: i64, title: &str, icon: &str, owner: i64) -> Category {
    Category {
        id: CategoryId::new(id),
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id: UserId::new(owner),
    }
}

fn product(id: i64, name: &str, category: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category_id: CategoryId::new(category),
    }
}
