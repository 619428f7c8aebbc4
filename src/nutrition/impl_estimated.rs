use crate::food_label::FoodLabel;
use crate::nutrition::interface::{NutritionRecord, NutritionResolver, NutritionSource};
use rand::Rng;

/// Synthesized nutrition facts, used standalone when no provider is
/// configured and as the fallback when a lookup fails. Baselines are
/// placeholder per-category values with a +/-10% jitter; they carry no
/// statistical weight.
pub struct NutritionResolverEstimated {}

impl NutritionResolverEstimated {
    pub fn new() -> Self {
        Self {}
    }
}

// calories, protein, carbs, fat, fiber, sugar, sodium per typical serving
fn baseline(label: FoodLabel) -> [f64; 7] {
    match label {
        FoodLabel::DairyProducts => [150.0, 8.0, 12.0, 8.0, 0.0, 12.0, 100.0],
        FoodLabel::Desserts => [350.0, 4.0, 45.0, 18.0, 1.0, 35.0, 180.0],
        FoodLabel::EggDishes => [200.0, 13.0, 2.0, 15.0, 0.0, 1.0, 300.0],
        FoodLabel::FriedFood => [420.0, 15.0, 35.0, 26.0, 2.0, 1.0, 600.0],
        FoodLabel::Meat => [290.0, 26.0, 0.0, 20.0, 0.0, 0.0, 75.0],
        FoodLabel::NoodlesPasta => [310.0, 11.0, 55.0, 5.0, 3.0, 3.0, 10.0],
        FoodLabel::Rice => [240.0, 5.0, 50.0, 1.0, 1.0, 0.0, 5.0],
        FoodLabel::Seafoods => [210.0, 22.0, 0.0, 12.0, 0.0, 0.0, 90.0],
        FoodLabel::Soup => [120.0, 8.0, 12.0, 4.0, 2.0, 3.0, 800.0],
        FoodLabel::VegetablesFruit => [90.0, 2.0, 18.0, 1.0, 5.0, 9.0, 20.0],
        FoodLabel::OtherFood => [250.0, 10.0, 30.0, 10.0, 2.0, 5.0, 300.0],
    }
}

fn jitter(value: f64) -> f64 {
    let mut rng = rand::rng();
    let scaled = value * rng.random_range(0.9..1.1);
    (scaled * 10.0).round() / 10.0
}

impl NutritionResolver for NutritionResolverEstimated {
    fn resolve(&self, label: FoodLabel) -> NutritionRecord {
        let [calories, protein, carbs, fat, fiber, sugar, sodium] = baseline(label);

        NutritionRecord {
            food_name: label.search_query().to_string(),
            calories: jitter(calories),
            protein: jitter(protein),
            carbs: jitter(carbs),
            fat: jitter(fat),
            fiber: jitter(fiber),
            sugar: jitter(sugar),
            sodium: jitter(sodium),
            source: NutritionSource::Estimated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food_label::ALL_FOOD_LABELS;

    #[test]
    fn test_every_label_resolves_to_estimated_record() {
        let resolver = NutritionResolverEstimated::new();

        for label in ALL_FOOD_LABELS {
            let record = resolver.resolve(label);
            assert_eq!(record.source, NutritionSource::Estimated);
            assert!(record.calories > 0.0);
            assert!(!record.food_name.is_empty());
        }
    }

    #[test]
    fn test_jitter_stays_within_ten_percent() {
        let resolver = NutritionResolverEstimated::new();

        for _ in 0..50 {
            let record = resolver.resolve(FoodLabel::Soup);
            assert!(record.calories >= 108.0 - 0.1 && record.calories <= 132.0 + 0.1);
        }
    }

    #[test]
    fn test_zero_baselines_stay_zero() {
        let resolver = NutritionResolverEstimated::new();
        let record = resolver.resolve(FoodLabel::Meat);
        assert_eq!(record.carbs, 0.0);
        assert_eq!(record.sugar, 0.0);
    }
}
