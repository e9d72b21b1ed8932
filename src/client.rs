use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

use crate::config::{ApiConfig, DEFAULT_BASE_URL};
use crate::error::DrinkError;
use crate::model::{Cocktail, CocktailResponse};

/// Anything that can answer drink queries.
///
/// [`CocktailDbClient`] is the production implementation; the builder accepts
/// any source so flows can run against canned data.
#[async_trait]
pub trait DrinkSource: Send + Sync {
    /// All drinks whose name starts with `letter`.
    async fn by_first_letter(&self, letter: char) -> Result<Vec<Cocktail>, DrinkError>;

    /// All drinks whose name contains `name`.
    async fn by_name(&self, name: &str) -> Result<Vec<Cocktail>, DrinkError>;

    /// One random drink, if the API returned any.
    async fn random(&self) -> Result<Option<Cocktail>, DrinkError>;

    /// Full record for a drink id.
    async fn lookup(&self, id: &str) -> Result<Option<Cocktail>, DrinkError>;
}

/// HTTP client for TheCocktailDB JSON API.
pub struct CocktailDbClient {
    client: Client,
    base_url: String,
}

impl CocktailDbClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, DrinkError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Point the client at another server (a mirror, a paid API key path or a mock).
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DrinkError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("drinkit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, DrinkError> {
        Self::with_base_url(config.base_url.clone(), Some(config.timeout()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_drinks(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<Cocktail>, DrinkError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Cocktail API returned {} for {}", status, url);
            return Err(DrinkError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        // lookup.php answers unknown ids with an empty body rather than JSON.
        if body.trim().is_empty() {
            debug!("Empty body from {}", url);
            return Ok(Vec::new());
        }

        let drinks = serde_json::from_str::<CocktailResponse>(&body)?.into_drinks();
        debug!("{} drink(s) from {}", drinks.len(), endpoint);
        Ok(drinks)
    }
}

#[async_trait]
impl DrinkSource for CocktailDbClient {
    async fn by_first_letter(&self, letter: char) -> Result<Vec<Cocktail>, DrinkError> {
        if !letter.is_ascii_alphabetic() {
            return Err(DrinkError::InvalidInput(format!(
                "'{letter}' is not a letter A-Z"
            )));
        }
        let letter = letter.to_ascii_lowercase().to_string();
        self.get_drinks("search.php", &[("f", letter.as_str())]).await
    }

    async fn by_name(&self, name: &str) -> Result<Vec<Cocktail>, DrinkError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DrinkError::InvalidInput(
                "drink name must not be blank".to_string(),
            ));
        }
        self.get_drinks("search.php", &[("s", name)]).await
    }

    async fn random(&self) -> Result<Option<Cocktail>, DrinkError> {
        Ok(self.get_drinks("random.php", &[]).await?.into_iter().next())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Cocktail>, DrinkError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DrinkError::InvalidInput(
                "drink id must not be blank".to_string(),
            ));
        }
        Ok(self
            .get_drinks("lookup.php", &[("i", id)])
            .await?
            .into_iter()
            .next())
    }
}
