use crate::error::{ClassifyError, ScanError};
use crate::food_label::FoodLabel;
use crate::image_classifier::interface::Prediction;
use crate::nutrition::interface::{NutritionRecord, NutritionSource};
use crate::scan_session::core::{init, transition, Effect, Event, State};

fn prediction(label: FoodLabel) -> Prediction {
    let mut confidences = vec![0.01; 11];
    confidences[label.index()] = 0.9;
    Prediction {
        class_index: label.index(),
        label,
        confidences,
    }
}

fn record() -> NutritionRecord {
    NutritionRecord {
        food_name: "chicken soup".to_string(),
        calories: 120.0,
        protein: 8.0,
        carbs: 12.0,
        fat: 4.0,
        fiber: 2.0,
        sugar: 3.0,
        sodium: 800.0,
        source: NutritionSource::Provider,
    }
}

#[test]
fn test_init() {
    let (state, effects) = init();

    assert!(matches!(state, State::Idle));
    assert!(effects.is_empty());
}

#[test]
fn test_submission_starts_classification() {
    let (state, _) = init();

    let (state, effects) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 1,
            image: vec![1, 2, 3],
        },
    );

    assert!(matches!(state, State::Classifying { submission_id: 1 }));
    assert_eq!(
        effects,
        vec![Effect::ClassifyImage {
            submission_id: 1,
            image: vec![1, 2, 3],
        }]
    );
}

#[test]
fn test_happy_path_runs_to_completion() {
    let (state, _) = init();
    let (state, _) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 1,
            image: vec![0],
        },
    );

    let (state, effects) = transition(
        state,
        Event::ClassifyDone {
            submission_id: 1,
            result: Ok(prediction(FoodLabel::Soup)),
        },
    );

    match &state {
        State::ResolvingNutrition { prediction, .. } => {
            assert_eq!(prediction.label, FoodLabel::Soup);
        }
        _ => panic!("Unexpected state"),
    }
    assert_eq!(
        effects,
        vec![Effect::ResolveNutrition {
            submission_id: 1,
            label: FoodLabel::Soup,
        }]
    );

    let (state, effects) = transition(
        state,
        Event::NutritionDone {
            submission_id: 1,
            record: record(),
        },
    );

    match state {
        State::Complete {
            prediction,
            nutrition,
            ..
        } => {
            assert_eq!(prediction.label, FoodLabel::Soup);
            assert_eq!(nutrition.food_name, "chicken soup");
        }
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn test_classification_failure_surfaces_to_session() {
    let (state, _) = init();
    let (state, _) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 1,
            image: vec![0],
        },
    );

    let (state, effects) = transition(
        state,
        Event::ClassifyDone {
            submission_id: 1,
            result: Err(ScanError::Classify(ClassifyError::Inference(
                "forward pass failed".to_string(),
            ))),
        },
    );

    match state {
        State::AnalysisFailed { message, .. } => {
            assert!(message.contains("forward pass failed"));
        }
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn test_last_submission_wins_over_inflight_classification() {
    let (state, _) = init();
    let (state, _) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 1,
            image: vec![0],
        },
    );

    // Second upload arrives while the first is still classifying
    let (state, effects) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 2,
            image: vec![1],
        },
    );
    assert!(matches!(state, State::Classifying { submission_id: 2 }));
    assert_eq!(effects.len(), 1);

    // The first run finishing now must not overwrite the newer run
    let (state, effects) = transition(
        state,
        Event::ClassifyDone {
            submission_id: 1,
            result: Ok(prediction(FoodLabel::Rice)),
        },
    );
    assert!(matches!(state, State::Classifying { submission_id: 2 }));
    assert!(effects.is_empty());

    // The newer run proceeds normally
    let (state, _) = transition(
        state,
        Event::ClassifyDone {
            submission_id: 2,
            result: Ok(prediction(FoodLabel::Soup)),
        },
    );
    match state {
        State::ResolvingNutrition {
            submission_id,
            prediction,
        } => {
            assert_eq!(submission_id, 2);
            assert_eq!(prediction.label, FoodLabel::Soup);
        }
        _ => panic!("Unexpected state"),
    }
}

#[test]
fn test_stale_nutrition_result_is_discarded() {
    let (state, _) = init();
    let (state, _) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 1,
            image: vec![0],
        },
    );
    let (state, _) = transition(
        state,
        Event::ClassifyDone {
            submission_id: 1,
            result: Ok(prediction(FoodLabel::Meat)),
        },
    );

    // Newer upload supersedes the nutrition lookup still in flight
    let (state, _) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 2,
            image: vec![1],
        },
    );

    let (state, effects) = transition(
        state,
        Event::NutritionDone {
            submission_id: 1,
            record: record(),
        },
    );

    assert!(matches!(state, State::Classifying { submission_id: 2 }));
    assert!(effects.is_empty());
}

#[test]
fn test_session_accepts_resubmission_after_completion() {
    let (state, _) = init();
    let (state, _) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 1,
            image: vec![0],
        },
    );
    let (state, _) = transition(
        state,
        Event::ClassifyDone {
            submission_id: 1,
            result: Ok(prediction(FoodLabel::Soup)),
        },
    );
    let (state, _) = transition(
        state,
        Event::NutritionDone {
            submission_id: 1,
            record: record(),
        },
    );

    let (state, effects) = transition(
        state,
        Event::ImageSubmitted {
            submission_id: 2,
            image: vec![9],
        },
    );

    assert!(matches!(state, State::Classifying { submission_id: 2 }));
    assert_eq!(effects.len(), 1);
}
