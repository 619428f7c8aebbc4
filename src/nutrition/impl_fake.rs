use crate::food_label::FoodLabel;
use crate::nutrition::interface::{NutritionRecord, NutritionResolver, NutritionSource};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test double that serves a canned record and counts invocations, so
/// tests can assert whether the nutrition stage ran at all.
pub struct NutritionResolverFake {
    record: NutritionRecord,
    calls: AtomicUsize,
}

impl NutritionResolverFake {
    pub fn new() -> Self {
        Self::with_record(NutritionRecord {
            food_name: "chicken soup".to_string(),
            calories: 120.0,
            protein: 8.0,
            carbs: 12.0,
            fat: 4.0,
            fiber: 2.0,
            sugar: 3.0,
            sodium: 800.0,
            source: NutritionSource::Provider,
        })
    }

    pub fn with_record(record: NutritionRecord) -> Self {
        Self {
            record,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl NutritionResolver for NutritionResolverFake {
    fn resolve(&self, _label: FoodLabel) -> NutritionRecord {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.record.clone()
    }
}
