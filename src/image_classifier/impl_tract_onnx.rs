use crate::config::Config;
use crate::error::{ClassifyError, ModelLoadError};
use crate::food_label::FOOD_CLASS_COUNT;
use crate::image_classifier::interface::{arg_max, ImageClassifier, Prediction};
use crate::preprocess::NormalizedImage;
use tract_onnx::prelude::*;

/// Food classifier backed by a tract-onnx plan. The plan is loaded once at
/// startup and never mutated; `run` borrows it immutably, so one instance
/// can be shared across threads without locking.
pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_size: u32,
}

impl ImageClassifierTractOnnx {
    pub fn new(config: &Config) -> Result<Self, ModelLoadError> {
        let size = config.model_input_size as usize;

        let model = tract_onnx::onnx()
            .model_for_path(&config.model_path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, size, size, 3]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ModelLoadError {
                path: config.model_path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            model,
            input_size: config.model_input_size,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(&self, image: &NormalizedImage) -> Result<Prediction, ClassifyError> {
        if image.size() != self.input_size {
            return Err(ClassifyError::ShapeMismatch {
                expected: format!("(1, {s}, {s}, 3)", s = self.input_size),
                actual: format!("(1, {s}, {s}, 3)", s = image.size()),
            });
        }

        let outputs = self
            .model
            .run(tvec!(image.tensor().clone().into_tvalue()))
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let confidences: Vec<f32> = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.to_string()))?
            .iter()
            .copied()
            .collect();

        if confidences.len() != FOOD_CLASS_COUNT {
            return Err(ClassifyError::ShapeMismatch {
                expected: format!("{} class scores", FOOD_CLASS_COUNT),
                actual: format!("{} class scores", confidences.len()),
            });
        }

        let class_index = arg_max(&confidences);
        let label = crate::food_label::FoodLabel::from_index(class_index).ok_or_else(|| {
            ClassifyError::ShapeMismatch {
                expected: format!("class index < {}", FOOD_CLASS_COUNT),
                actual: format!("class index {}", class_index),
            }
        })?;

        Ok(Prediction {
            class_index,
            label,
            confidences,
        })
    }
}
