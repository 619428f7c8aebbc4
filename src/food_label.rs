use std::fmt;

pub const FOOD_CLASS_COUNT: usize = 11;

/// The fixed 11-category taxonomy the food model was trained on.
/// Discriminants are the model's output indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodLabel {
    DairyProducts = 0,
    Desserts = 1,
    EggDishes = 2,
    FriedFood = 3,
    Meat = 4,
    NoodlesPasta = 5,
    Rice = 6,
    Seafoods = 7,
    Soup = 8,
    VegetablesFruit = 9,
    OtherFood = 10,
}

pub const ALL_FOOD_LABELS: [FoodLabel; FOOD_CLASS_COUNT] = [
    FoodLabel::DairyProducts,
    FoodLabel::Desserts,
    FoodLabel::EggDishes,
    FoodLabel::FriedFood,
    FoodLabel::Meat,
    FoodLabel::NoodlesPasta,
    FoodLabel::Rice,
    FoodLabel::Seafoods,
    FoodLabel::Soup,
    FoodLabel::VegetablesFruit,
    FoodLabel::OtherFood,
];

impl FoodLabel {
    pub fn from_index(index: usize) -> Option<FoodLabel> {
        ALL_FOOD_LABELS.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            FoodLabel::DairyProducts => "Dairy products",
            FoodLabel::Desserts => "Desserts",
            FoodLabel::EggDishes => "Egg dishes",
            FoodLabel::FriedFood => "Fried food",
            FoodLabel::Meat => "Meat",
            FoodLabel::NoodlesPasta => "Noodles/Pasta",
            FoodLabel::Rice => "Rice",
            FoodLabel::Seafoods => "Seafoods",
            FoodLabel::Soup => "Soup",
            FoodLabel::VegetablesFruit => "Vegetables/Fruit",
            FoodLabel::OtherFood => "Other food",
        }
    }

    /// Search query sent to the nutrition provider. The category names are
    /// too broad to match a food entry directly, so each maps to a concrete
    /// representative dish. The catch-all category has no curated query and
    /// falls back to its display name.
    pub fn search_query(self) -> &'static str {
        match self {
            FoodLabel::DairyProducts => "milk and cheese",
            FoodLabel::Desserts => "chocolate cake",
            FoodLabel::EggDishes => "scrambled eggs",
            FoodLabel::FriedFood => "fried chicken",
            FoodLabel::Meat => "grilled steak",
            FoodLabel::NoodlesPasta => "spaghetti",
            FoodLabel::Rice => "steamed rice",
            FoodLabel::Seafoods => "grilled salmon",
            FoodLabel::Soup => "chicken soup",
            FoodLabel::VegetablesFruit => "vegetable salad",
            FoodLabel::OtherFood => self.name(),
        }
    }
}

impl fmt::Display for FoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
