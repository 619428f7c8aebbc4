use config::Config;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use logger::impl_console::LoggerConsole;
use logger::interface::Logger;
use nutrition::impl_estimated::NutritionResolverEstimated;
use nutrition::impl_nutritionix::NutritionResolverNutritionix;
use nutrition::interface::NutritionResolver;
use pipeline::Pipeline;
use scan_session::core::State;
use scan_session::main::ScanSession;
use scan_session::render::render_lines;
use std::io::BufRead;
use std::sync::Arc;

mod config;
mod error;
mod food_label;
mod image_classifier;
mod logger;
mod nutrition;
mod pipeline;
mod preprocess;
mod scan_session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = if config.use_fake_classifier {
        let _ = logger.warn("NUTRISCAN_FAKE_CLASSIFIER is set; predictions are random");
        Arc::new(ImageClassifierFake::new())
    } else {
        // Load-once, never mutated afterwards. A missing or incompatible
        // artifact means no request can ever be served, so bail out here.
        Arc::new(ImageClassifierTractOnnx::new(&config)?)
    };

    let nutrition_resolver: Arc<dyn NutritionResolver + Send + Sync> =
        match &config.nutrition.credentials {
            Some(credentials) => Arc::new(NutritionResolverNutritionix::new(
                &config.nutrition,
                credentials,
                logger.with_namespace("nutritionix"),
            )?),
            None => {
                let _ = logger.warn(
                    "no Nutritionix credentials in environment; nutrition facts will be estimates",
                );
                Arc::new(NutritionResolverEstimated::new())
            }
        };

    let pipeline = Arc::new(Pipeline::new(&config, image_classifier, nutrition_resolver));

    // One-shot mode: scan the images named on the command line and exit.
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if !paths.is_empty() {
        for path in &paths {
            let image = std::fs::read(path)?;
            let result = pipeline.run(&image)?;
            for line in render_lines(&State::Complete {
                submission_id: 0,
                prediction: result.prediction,
                nutrition: result.nutrition,
            }) {
                println!("{}", line);
            }
        }
        return Ok(());
    }

    // Interactive mode: each stdin line is treated as a fresh upload.
    let session = ScanSession::new(pipeline, Arc::from(logger.with_namespace("session")));

    let runner = session.clone();
    std::thread::spawn(move || runner.run());

    for line in render_lines(&session.current_state()) {
        println!("{}", line);
    }
    let _ = logger.info("ready; enter one image path per line");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let path = line.trim();
        if path.is_empty() {
            continue;
        }

        match std::fs::read(path) {
            Ok(image) => {
                session.submit(image);
            }
            Err(error) => {
                let _ = logger.warn(&format!("could not read {}: {}", path, error));
            }
        }
    }

    Ok(())
}
