use log::{debug, info};
use std::time::Duration;

use crate::client::{CocktailDbClient, DrinkSource};
use crate::error::DrinkError;
use crate::model::Cocktail;

/// Which drinks to ask the API for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrinkQuery {
    /// Browse drinks starting with a letter
    Letter(char),
    /// Search drinks by (partial) name
    Name(String),
    /// A single random drink
    Random,
}

/// Entry point for drink lookups
pub struct DrinkFinder;

impl DrinkFinder {
    pub fn builder() -> DrinkFinderBuilder {
        DrinkFinderBuilder::default()
    }
}

/// Builder for configuring and executing drink lookups
#[derive(Debug, Default)]
pub struct DrinkFinderBuilder {
    query: Option<DrinkQuery>,
    alcoholic: Option<bool>,
    timeout: Option<Duration>,
    base_url: Option<String>,
}

impl DrinkFinderBuilder {
    /// Browse drinks whose name starts with `letter`
    ///
    /// # Example
    /// ```
    /// use drinkit::DrinkFinder;
    ///
    /// let builder = DrinkFinder::builder().letter('m');
    /// ```
    pub fn letter(mut self, letter: char) -> Self {
        self.query = Some(DrinkQuery::Letter(letter));
        self
    }

    /// Search drinks by name
    ///
    /// # Example
    /// ```
    /// use drinkit::DrinkFinder;
    ///
    /// let builder = DrinkFinder::builder().name("margarita");
    /// ```
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.query = Some(DrinkQuery::Name(name.into()));
        self
    }

    /// Ask for one random drink
    pub fn random(mut self) -> Self {
        self.query = Some(DrinkQuery::Random);
        self
    }

    /// Keep only alcoholic (`Some(true)`) or non-alcoholic (`Some(false)`) drinks.
    /// `None` disables the filter.
    ///
    /// # Example
    /// ```
    /// use drinkit::DrinkFinder;
    ///
    /// let builder = DrinkFinder::builder()
    ///     .letter('a')
    ///     .alcoholic(Some(false));
    /// ```
    pub fn alcoholic(mut self, alcoholic: Option<bool>) -> Self {
        self.alcoholic = alcoholic;
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a different API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build and execute the lookup against TheCocktailDB
    ///
    /// # Errors
    /// Returns `DrinkError` if no query was specified, the query is invalid,
    /// or the API request fails.
    ///
    /// # Example
    /// ```no_run
    /// # use drinkit::DrinkFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let drinks = DrinkFinder::builder()
    ///     .name("mojito")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<Cocktail>, DrinkError> {
        let client = match &self.base_url {
            Some(url) => CocktailDbClient::with_base_url(url.clone(), self.timeout)?,
            None => CocktailDbClient::new(self.timeout)?,
        };
        self.build_with(&client).await
    }

    /// Execute the lookup against any drink source
    pub async fn build_with(self, source: &dyn DrinkSource) -> Result<Vec<Cocktail>, DrinkError> {
        let query = self.query.ok_or_else(|| {
            DrinkError::Builder(
                "No query specified. Use .letter(), .name() or .random()".to_string(),
            )
        })?;

        let drinks = match &query {
            DrinkQuery::Letter(letter) => source.by_first_letter(*letter).await?,
            DrinkQuery::Name(name) => source.by_name(name).await?,
            DrinkQuery::Random => source.random().await?.into_iter().collect(),
        };

        let total = drinks.len();
        let drinks: Vec<Cocktail> = match self.alcoholic {
            Some(wanted) => drinks
                .into_iter()
                .filter(|drink| drink.is_alcoholic() == wanted)
                .collect(),
            None => drinks,
        };

        if drinks.len() != total {
            debug!(
                "Alcoholic filter {:?} kept {} of {} drinks",
                self.alcoholic,
                drinks.len(),
                total
            );
        }
        info!("{:?} returned {} drink(s)", query, drinks.len());

        Ok(drinks)
    }
}
