use crate::logger::interface::Logger;
use crate::pipeline::Pipeline;
use crate::scan_session::core::{init, transition, Event, State, SubmissionId};
use crate::scan_session::render::render_lines;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Runtime around the pure session core: owns the event channel, applies
/// transitions one at a time, and interprets effects on worker threads.
#[derive(Clone)]
pub struct ScanSession {
    pub state: Arc<Mutex<State>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub pipeline: Arc<Pipeline>,
    pub logger: Arc<dyn Logger + Send + Sync>,
    next_submission_id: Arc<AtomicU64>,
}

impl ScanSession {
    pub fn new(pipeline: Arc<Pipeline>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let (event_sender, event_receiver) = channel();
        let initial = init();

        Self {
            state: Arc::new(Mutex::new(initial.0)),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            pipeline,
            logger,
            next_submission_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Hand a freshly uploaded image to the session. Submission ids are
    /// strictly increasing; the core uses them to let the latest
    /// submission win over anything still in flight.
    pub fn submit(&self, image: Vec<u8>) -> SubmissionId {
        let submission_id = self.next_submission_id.fetch_add(1, Ordering::SeqCst);
        let _ = self.event_sender.send(Event::ImageSubmitted {
            submission_id,
            image,
        });
        submission_id
    }

    pub fn current_state(&self) -> State {
        self.state.lock().unwrap().clone()
    }

    pub fn run(&self) {
        loop {
            let event = match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => event,
                Err(_) => return,
            };

            let _ = self
                .logger
                .info(&format!("event: {}", event.to_display_string()));

            let current = self.state.lock().unwrap().clone();
            let (new_state, effects) = transition(current, event);
            *self.state.lock().unwrap() = new_state.clone();

            for line in render_lines(&new_state) {
                println!("{}", line);
            }

            for effect in effects {
                let effect_clone = effect.clone();
                let self_clone = self.clone();
                std::thread::spawn(move || self_clone.run_effect(effect_clone));
            }
        }
    }
}
