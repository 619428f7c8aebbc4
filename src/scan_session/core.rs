use crate::error::ScanError;
use crate::food_label::FoodLabel;
use crate::image_classifier::interface::Prediction;
use crate::nutrition::interface::NutritionRecord;

pub type SubmissionId = u64;

/// One interactive scan session. The session itself holds no pipeline
/// state between submissions; each state names the submission it belongs
/// to so results from superseded runs can be discarded.
#[derive(Debug, Clone)]
pub enum State {
    Idle,
    Classifying {
        submission_id: SubmissionId,
    },
    /// The prediction is already renderable while nutrition facts are
    /// still in flight.
    ResolvingNutrition {
        submission_id: SubmissionId,
        prediction: Prediction,
    },
    Complete {
        submission_id: SubmissionId,
        prediction: Prediction,
        nutrition: NutritionRecord,
    },
    AnalysisFailed {
        submission_id: SubmissionId,
        message: String,
    },
}

#[derive(Debug)]
pub enum Event {
    ImageSubmitted {
        submission_id: SubmissionId,
        image: Vec<u8>,
    },
    ClassifyDone {
        submission_id: SubmissionId,
        result: Result<Prediction, ScanError>,
    },
    NutritionDone {
        submission_id: SubmissionId,
        record: NutritionRecord,
    },
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImageSubmitted { submission_id, .. } => {
                format!(
                    "{:?}",
                    Event::ImageSubmitted {
                        submission_id: *submission_id,
                        image: vec![],
                    }
                )
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ClassifyImage {
        submission_id: SubmissionId,
        image: Vec<u8>,
    },
    ResolveNutrition {
        submission_id: SubmissionId,
        label: FoodLabel,
    },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyImage { submission_id, .. } => {
                format!(
                    "{:?}",
                    Effect::ClassifyImage {
                        submission_id: *submission_id,
                        image: vec![],
                    }
                )
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (State::Idle, vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        // A new upload supersedes whatever is in flight, from any state
        (
            _,
            Event::ImageSubmitted {
                submission_id,
                image,
            },
        ) => (
            State::Classifying { submission_id },
            vec![Effect::ClassifyImage {
                submission_id,
                image,
            }],
        ),

        (
            State::Classifying { submission_id },
            Event::ClassifyDone {
                submission_id: done_id,
                result,
            },
        ) if done_id == submission_id => match result {
            Ok(prediction) => {
                let label = prediction.label;
                (
                    State::ResolvingNutrition {
                        submission_id,
                        prediction,
                    },
                    vec![Effect::ResolveNutrition {
                        submission_id,
                        label,
                    }],
                )
            }
            Err(error) => (
                State::AnalysisFailed {
                    submission_id,
                    message: error.to_string(),
                },
                vec![],
            ),
        },

        (
            State::ResolvingNutrition {
                submission_id,
                prediction,
            },
            Event::NutritionDone {
                submission_id: done_id,
                record,
            },
        ) if done_id == submission_id => (
            State::Complete {
                submission_id,
                prediction,
                nutrition: record,
            },
            vec![],
        ),

        // Results carrying a stale submission id are dropped unseen
        (state, _) => (state, vec![]),
    }
}
