use crate::scan_session::core::{Effect, Event};
use crate::scan_session::main::ScanSession;

impl ScanSession {
    pub(crate) fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("running effect: {}", effect.to_display_string()));

        match effect {
            Effect::ClassifyImage {
                submission_id,
                image,
            } => {
                let result = self.pipeline.classify(&image);
                let _ = self.event_sender.send(Event::ClassifyDone {
                    submission_id,
                    result,
                });
            }
            Effect::ResolveNutrition {
                submission_id,
                label,
            } => {
                let record = self.pipeline.resolve_nutrition(label);
                let _ = self.event_sender.send(Event::NutritionDone {
                    submission_id,
                    record,
                });
            }
        }
    }
}
