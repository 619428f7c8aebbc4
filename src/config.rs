use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_MODEL_PATH: &str = "./models/food11.onnx";
const DEFAULT_INPUT_SIZE: u32 = 224;
const NUTRITIONIX_ENDPOINT: &str = "https://trackapi.nutritionix.com/v2/natural/nutrients";

/// Nutritionix secrets. Supplied via environment only; the Debug impl is
/// redacted so they can never leak through transition logging.
#[derive(Clone)]
pub struct NutritionCredentials {
    pub app_id: String,
    pub api_key: String,
}

impl fmt::Debug for NutritionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionCredentials")
            .field("app_id", &"<redacted>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct NutritionConfig {
    pub endpoint: String,
    pub credentials: Option<NutritionCredentials>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: String,
    /// Side length of the model input. Must match the loaded artifact;
    /// 224 for the default model, 160 for the small variant.
    pub model_input_size: u32,
    /// Swap in the random fake classifier so the app can run without a
    /// model artifact.
    pub use_fake_classifier: bool,
    pub nutrition: NutritionConfig,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            model_input_size: DEFAULT_INPUT_SIZE,
            use_fake_classifier: false,
            nutrition: NutritionConfig {
                endpoint: NUTRITIONIX_ENDPOINT.to_string(),
                credentials: None,
                timeout: Duration::from_secs(10),
            },
            logger_timezone: mountain_standard_time(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(path) = env::var("NUTRISCAN_MODEL_PATH") {
            config.model_path = path;
        }

        if let Some(size) = env::var("NUTRISCAN_INPUT_SIZE")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
        {
            config.model_input_size = size;
        }

        if let Ok(raw) = env::var("NUTRISCAN_FAKE_CLASSIFIER") {
            config.use_fake_classifier = raw == "1" || raw.eq_ignore_ascii_case("true");
        }

        if let (Ok(app_id), Ok(api_key)) = (
            env::var("NUTRITIONIX_APP_ID"),
            env::var("NUTRITIONIX_API_KEY"),
        ) {
            config.nutrition.credentials = Some(NutritionCredentials { app_id, api_key });
        }

        config
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
