use crate::error::ClassifyError;
use crate::food_label::{FoodLabel, ALL_FOOD_LABELS, FOOD_CLASS_COUNT};
use crate::image_classifier::interface::{ImageClassifier, Prediction};
use crate::preprocess::NormalizedImage;
use rand::Rng;

/// Stand-in classifier for tests and for running the app without a model
/// artifact. Picks a random category unless one is forced.
pub struct ImageClassifierFake {
    forced_label: Option<FoodLabel>,
}

impl ImageClassifierFake {
    pub fn new() -> Self {
        Self { forced_label: None }
    }

    pub fn with_label(label: FoodLabel) -> Self {
        Self {
            forced_label: Some(label),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(&self, _image: &NormalizedImage) -> Result<Prediction, ClassifyError> {
        let label = match self.forced_label {
            Some(label) => label,
            None => {
                let mut rng = rand::rng();
                ALL_FOOD_LABELS[rng.random_range(0..FOOD_CLASS_COUNT)]
            }
        };

        // 0.9 for the winner plus 0.01 for each of the ten others sums to 1
        let mut confidences = vec![0.01; FOOD_CLASS_COUNT];
        confidences[label.index()] = 0.9;

        Ok(Prediction {
            class_index: label.index(),
            label,
            confidences,
        })
    }
}
