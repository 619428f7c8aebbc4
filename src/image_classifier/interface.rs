use crate::error::ClassifyError;
use crate::food_label::FoodLabel;
use crate::preprocess::NormalizedImage;

/// One classification outcome: the winning class plus the full per-class
/// confidence vector (length 11, sums to ~1). Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class_index: usize,
    pub label: FoodLabel,
    pub confidences: Vec<f32>,
}

impl Prediction {
    pub fn confidence(&self) -> f32 {
        self.confidences
            .get(self.class_index)
            .copied()
            .unwrap_or(0.0)
    }
}

pub trait ImageClassifier {
    fn predict(&self, image: &NormalizedImage) -> Result<Prediction, ClassifyError>;
}

/// Index of the maximum score. Strict comparison keeps the lowest index on
/// ties, matching arg-max semantics.
pub fn arg_max(scores: &[f32]) -> usize {
    let mut best_index = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (index, &score) in scores.iter().enumerate() {
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }
    best_index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_max_picks_maximum() {
        assert_eq!(arg_max(&[0.1, 0.7, 0.2]), 1);
    }

    #[test]
    fn test_arg_max_tie_resolves_to_lowest_index() {
        assert_eq!(arg_max(&[0.1, 0.4, 0.4, 0.1]), 1);
        assert_eq!(arg_max(&[0.5, 0.5]), 0);
    }

    #[test]
    fn test_arg_max_single_element() {
        assert_eq!(arg_max(&[1.0]), 0);
    }
}
