//! TheMealDB listing client
//!
//! A small library for fetching and validating the default meal listing from
//! TheMealDB JSON API (`filter.php`).
//!
//! # Example
//!
//! ```no_run
//! use mealdb_client::MealDbClient;
//!
//! # async fn run() -> Result<(), mealdb_client::ClientError> {
//! let client = MealDbClient::new();
//! let meals = client.fetch_meals().await?;
//!
//! for meal in &meals {
//!     println!("{}: {}", meal.id, meal.name);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod types;

pub use error::ClientError;
pub use types::{ListingResponse, Meal, MealRecord};

/// Base URL of TheMealDB v1 API (test key).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// HTTP client for TheMealDB listing endpoint.
///
/// Cheap to clone (the inner `reqwest::Client` is reference-counted), so it
/// can be handed to background tasks freely.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the meal listing.
    ///
    /// The `i` filter parameter is left empty on purpose: the endpoint then
    /// falls back to its default listing, so this is effectively a fixed,
    /// parameter-less call.
    pub async fn fetch_meals(&self) -> Result<Vec<Meal>, ClientError> {
        let url = format!("{}/filter.php?i=", self.base_url);
        let body = self.http.get(&url).send().await?.text().await?;
        parse_listing(&body)
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and validate a listing response body.
///
/// A body that is valid JSON but carries no `meals` array (TheMealDB returns
/// `{"meals": null}` for an unknown filter) is rejected as
/// [`ClientError::MalformedResponse`] rather than silently treated as an
/// empty listing.
pub fn parse_listing(body: &str) -> Result<Vec<Meal>, ClientError> {
    let listing: ListingResponse = serde_json::from_str(body)?;
    let records = listing.meals.ok_or(ClientError::MalformedResponse)?;
    Ok(records.into_iter().map(Meal::from).collect())
}
