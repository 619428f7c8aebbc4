use crate::food_label::FoodLabel;
use serde::Serialize;

/// Where a record's numbers came from. Estimated records are shown as
/// estimates by the presentation layer, never as authoritative data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NutritionSource {
    Provider,
    Estimated,
}

/// Macro-nutrient facts for one resolved food. Grams except calories
/// (kcal) and sodium (mg). One per pipeline invocation; not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionRecord {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub source: NutritionSource,
}

pub trait NutritionResolver {
    /// Best-effort facts for a category. Never fails: implementations
    /// recover from lookup problems by serving an estimate instead.
    fn resolve(&self, label: FoodLabel) -> NutritionRecord;
}
