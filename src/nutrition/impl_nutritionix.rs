use crate::config::{NutritionConfig, NutritionCredentials};
use crate::error::{NutritionConfigError, NutritionLookupError};
use crate::food_label::FoodLabel;
use crate::logger::interface::Logger;
use crate::nutrition::impl_estimated::NutritionResolverEstimated;
use crate::nutrition::interface::{NutritionRecord, NutritionResolver, NutritionSource};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NutrientsResponse {
    foods: Vec<NutritionixFood>,
}

#[derive(Debug, Deserialize)]
struct NutritionixFood {
    food_name: String,
    nf_calories: f64,
    nf_protein: f64,
    nf_total_carbohydrate: f64,
    nf_total_fat: f64,
    nf_dietary_fiber: Option<f64>,
    nf_sugars: Option<f64>,
    nf_sodium: Option<f64>,
}

/// Nutritionix-backed resolver. The client, endpoint, and credential
/// headers are built once here so that configuration mistakes surface at
/// startup; per-request failures are handled in `resolve`.
pub struct NutritionResolverNutritionix {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
    fallback: NutritionResolverEstimated,
    logger: Box<dyn Logger + Send + Sync>,
}

impl NutritionResolverNutritionix {
    pub fn new(
        config: &NutritionConfig,
        credentials: &NutritionCredentials,
        logger: Box<dyn Logger + Send + Sync>,
    ) -> Result<Self, NutritionConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert("x-app-id", HeaderValue::from_str(&credentials.app_id)?);
        headers.insert("x-app-key", HeaderValue::from_str(&credentials.api_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            headers,
            fallback: NutritionResolverEstimated::new(),
            logger,
        })
    }

    /// Exactly one POST to the natural-nutrients endpoint. No retry.
    fn lookup(&self, query: &str) -> Result<NutritionRecord, NutritionLookupError> {
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&serde_json::json!({ "query": query }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NutritionLookupError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<NutritionRecord, NutritionLookupError> {
    let parsed: NutrientsResponse = serde_json::from_str(body)?;
    let entry = parsed
        .foods
        .into_iter()
        .next()
        .ok_or(NutritionLookupError::Empty)?;

    Ok(NutritionRecord {
        food_name: entry.food_name,
        calories: entry.nf_calories,
        protein: entry.nf_protein,
        carbs: entry.nf_total_carbohydrate,
        fat: entry.nf_total_fat,
        fiber: entry.nf_dietary_fiber.unwrap_or(0.0),
        sugar: entry.nf_sugars.unwrap_or(0.0),
        sodium: entry.nf_sodium.unwrap_or(0.0),
        source: NutritionSource::Provider,
    })
}

impl NutritionResolver for NutritionResolverNutritionix {
    fn resolve(&self, label: FoodLabel) -> NutritionRecord {
        let query = label.search_query();

        match self.lookup(query) {
            Ok(record) => record,
            Err(error) => {
                let _ = self.logger.warn(&format!(
                    "lookup for \"{}\" failed, serving estimate: {}",
                    query, error
                ));
                self.fallback.resolve(label)
            }
        }
    }
}
