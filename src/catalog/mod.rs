pub mod loader;
pub mod validator;

use std::fmt;

use rust_decimal::Decimal;

pub use loader::load_catalog;
pub use validator::validate_catalog;

/// Menu section an item belongs to. Each order holds at most one item per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Entree,
    SideDish,
    Accompaniment,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Entree, Category::SideDish, Category::Accompaniment];

    pub fn label(self) -> &'static str {
        match self {
            Category::Entree => "Entree",
            Category::SideDish => "Side Dish",
            Category::Accompaniment => "Accompaniment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selectable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
}

impl MenuItem {
    pub fn new(
        category: Category,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category,
        }
    }
}

/// Immutable menu grouped by category, supplied when the ordering flow starts.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    entrees: Vec<MenuItem>,
    side_dishes: Vec<MenuItem>,
    accompaniments: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog from per-category lists. Items are re-tagged with the
    /// category of the list they were supplied in.
    pub fn new(
        entrees: Vec<MenuItem>,
        side_dishes: Vec<MenuItem>,
        accompaniments: Vec<MenuItem>,
    ) -> Self {
        Self {
            entrees: tag(entrees, Category::Entree),
            side_dishes: tag(side_dishes, Category::SideDish),
            accompaniments: tag(accompaniments, Category::Accompaniment),
        }
    }

    /// The default lunch menu.
    pub fn builtin() -> Self {
        let entrees = vec![
            item(
                Category::Entree,
                "Cauliflower",
                "Whole cauliflower, brined, roasted, and deep fried",
                700,
            ),
            item(
                Category::Entree,
                "Three Bean Chili",
                "Black beans, red beans, kidney beans, slow cooked, topped with onion",
                400,
            ),
            item(
                Category::Entree,
                "Mushroom Pasta",
                "Penne pasta, mushrooms, basil, with plum tomatoes cooked in garlic and olive oil",
                550,
            ),
            item(
                Category::Entree,
                "Spicy Black Bean Skillet",
                "Seasonal vegetables, black beans, house spice blend, served with avocado and quick pickled onions",
                550,
            ),
        ];

        let side_dishes = vec![
            item(
                Category::SideDish,
                "Summer Salad",
                "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
                250,
            ),
            item(
                Category::SideDish,
                "Butternut Squash Soup",
                "Roasted butternut squash, roasted peppers, chili oil",
                300,
            ),
            item(
                Category::SideDish,
                "Spicy Potatoes",
                "Marble potatoes, roasted, and fried in house spice blend",
                200,
            ),
            item(
                Category::SideDish,
                "Coconut Rice",
                "Rice, coconut milk, lime, and sugar",
                150,
            ),
        ];

        let accompaniments = vec![
            item(
                Category::Accompaniment,
                "Lunch Roll",
                "Fresh baked roll made in house",
                50,
            ),
            item(
                Category::Accompaniment,
                "Mixed Berries",
                "Strawberries, blueberries, raspberries, and huckleberries",
                100,
            ),
            item(
                Category::Accompaniment,
                "Pickled Veggies",
                "Pickled cucumbers and carrots, made in house",
                50,
            ),
        ];

        Self::new(entrees, side_dishes, accompaniments)
    }

    pub fn items(&self, category: Category) -> &[MenuItem] {
        match category {
            Category::Entree => &self.entrees,
            Category::SideDish => &self.side_dishes,
            Category::Accompaniment => &self.accompaniments,
        }
    }

    pub fn find(&self, category: Category, name: &str) -> Option<&MenuItem> {
        self.items(category).iter().find(|item| item.name == name)
    }
}

fn item(category: Category, name: &str, description: &str, cents: i64) -> MenuItem {
    MenuItem::new(category, name, description, Decimal::new(cents, 2))
}

fn tag(mut items: Vec<MenuItem>, category: Category) -> Vec<MenuItem> {
    for item in &mut items {
        item.category = category;
    }
    items
}
