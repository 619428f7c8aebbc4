use crate::image_classifier::interface::Prediction;
use crate::nutrition::interface::NutritionSource;
use crate::scan_session::core::State;

fn prediction_line(prediction: &Prediction) -> String {
    format!(
        "Detected: {} ({:.1}% confidence)",
        prediction.label,
        prediction.confidence() * 100.0
    )
}

/// Pure state-to-display mapping; the run loop prints whatever comes back.
pub fn render_lines(state: &State) -> Vec<String> {
    match state {
        State::Idle => vec!["Upload a food photo to begin.".to_string()],
        State::Classifying { .. } => vec!["Analyzing image...".to_string()],
        State::ResolvingNutrition { prediction, .. } => vec![
            prediction_line(prediction),
            "Looking up nutrition facts...".to_string(),
        ],
        State::Complete {
            prediction,
            nutrition,
            ..
        } => {
            let heading = match nutrition.source {
                NutritionSource::Provider => format!("Nutrition for {}:", nutrition.food_name),
                NutritionSource::Estimated => {
                    format!("Nutrition for {} (estimated):", nutrition.food_name)
                }
            };

            vec![
                prediction_line(prediction),
                heading,
                format!("  calories: {:.1} kcal", nutrition.calories),
                format!(
                    "  protein: {:.1} g, carbs: {:.1} g, fat: {:.1} g",
                    nutrition.protein, nutrition.carbs, nutrition.fat
                ),
                format!(
                    "  fiber: {:.1} g, sugar: {:.1} g, sodium: {:.1} mg",
                    nutrition.fiber, nutrition.sugar, nutrition.sodium
                ),
            ]
        }
        State::AnalysisFailed { message, .. } => vec![
            "Could not analyze image.".to_string(),
            format!("  {}", message),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food_label::FoodLabel;
    use crate::nutrition::interface::NutritionRecord;

    fn soup_prediction() -> Prediction {
        let mut confidences = vec![0.01; 11];
        confidences[FoodLabel::Soup.index()] = 0.9;
        Prediction {
            class_index: FoodLabel::Soup.index(),
            label: FoodLabel::Soup,
            confidences,
        }
    }

    fn record(source: NutritionSource) -> NutritionRecord {
        NutritionRecord {
            food_name: "chicken soup".to_string(),
            calories: 120.0,
            protein: 8.0,
            carbs: 12.0,
            fat: 4.0,
            fiber: 2.0,
            sugar: 3.0,
            sodium: 800.0,
            source,
        }
    }

    #[test]
    fn test_estimated_records_are_marked() {
        let state = State::Complete {
            submission_id: 1,
            prediction: soup_prediction(),
            nutrition: record(NutritionSource::Estimated),
        };

        let lines = render_lines(&state);
        assert!(lines.iter().any(|line| line.contains("(estimated)")));
    }

    #[test]
    fn test_provider_records_are_not_marked() {
        let state = State::Complete {
            submission_id: 1,
            prediction: soup_prediction(),
            nutrition: record(NutritionSource::Provider),
        };

        let lines = render_lines(&state);
        assert!(!lines.iter().any(|line| line.contains("(estimated)")));
    }

    #[test]
    fn test_failure_renders_clear_message() {
        let state = State::AnalysisFailed {
            submission_id: 3,
            message: "could not decode uploaded image".to_string(),
        };

        let lines = render_lines(&state);
        assert_eq!(lines[0], "Could not analyze image.");
    }

    #[test]
    fn test_prediction_visible_before_nutrition_arrives() {
        let state = State::ResolvingNutrition {
            submission_id: 2,
            prediction: soup_prediction(),
        };

        let lines = render_lines(&state);
        assert!(lines[0].contains("Soup"));
        assert!(lines[0].contains("90.0%"));
    }
}
