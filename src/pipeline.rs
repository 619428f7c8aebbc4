use crate::config::Config;
use crate::error::ScanError;
use crate::food_label::FoodLabel;
use crate::image_classifier::interface::{ImageClassifier, Prediction};
use crate::nutrition::interface::{NutritionRecord, NutritionResolver};
use crate::preprocess;
use std::sync::Arc;

/// Everything one scan produces. Never partial: a decode or classify
/// failure fails the whole call before any nutrition lookup starts.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub prediction: Prediction,
    pub nutrition: NutritionRecord,
}

/// Composition root: normalize -> predict -> resolve. Holds no per-request
/// state; the shared classifier model is the only long-lived resource.
pub struct Pipeline {
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    nutrition_resolver: Arc<dyn NutritionResolver + Send + Sync>,
    input_size: u32,
}

impl Pipeline {
    pub fn new(
        config: &Config,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        nutrition_resolver: Arc<dyn NutritionResolver + Send + Sync>,
    ) -> Self {
        Self {
            image_classifier,
            nutrition_resolver,
            input_size: config.model_input_size,
        }
    }

    /// The classification half. Deterministic for a fixed model and input
    /// size; exposed separately so a caller can render the prediction
    /// before nutrition facts arrive.
    pub fn classify(&self, image_bytes: &[u8]) -> Result<Prediction, ScanError> {
        let normalized = preprocess::normalize(image_bytes, self.input_size)?;
        let prediction = self.image_classifier.predict(&normalized)?;
        Ok(prediction)
    }

    /// The nutrition half. Infallible by contract; see NutritionResolver.
    pub fn resolve_nutrition(&self, label: FoodLabel) -> NutritionRecord {
        self.nutrition_resolver.resolve(label)
    }

    pub fn run(&self, image_bytes: &[u8]) -> Result<ScanResult, ScanError> {
        let prediction = self.classify(image_bytes)?;
        let nutrition = self.resolve_nutrition(prediction.label);

        Ok(ScanResult {
            prediction,
            nutrition,
        })
    }
}
