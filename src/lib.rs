pub mod builder;
pub mod client;
pub mod config;
pub mod countdown;
pub mod error;
pub mod favourites;
pub mod model;
pub mod prepare_time;
pub mod uniffi_bindings;

pub use builder::{DrinkFinder, DrinkFinderBuilder, DrinkQuery};
pub use client::{CocktailDbClient, DrinkSource};
pub use countdown::Countdown;
pub use error::DrinkError;
pub use favourites::{Favourite, FavouriteStore};
pub use model::{Cocktail, Ingredient};
pub use prepare_time::{estimate, format_duration};

use log::debug;

/// Search drinks by name using default settings
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let drinks = drinkit::search_by_name("margarita").await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_by_name(name: &str) -> Result<Vec<Cocktail>, DrinkError> {
    DrinkFinder::builder().name(name).build().await
}

/// Drinks starting with `letter`, optionally filtered by alcohol content
pub async fn drinks_by_letter(
    letter: char,
    alcoholic: Option<bool>,
) -> Result<Vec<Cocktail>, DrinkError> {
    DrinkFinder::builder()
        .letter(letter)
        .alcoholic(alcoholic)
        .build()
        .await
}

/// One random drink
pub async fn random_drink() -> Result<Option<Cocktail>, DrinkError> {
    Ok(DrinkFinder::builder().random().build().await?.into_iter().next())
}

/// Resolve every stored favourite to its full drink record.
///
/// Favourites the API no longer knows about are skipped.
pub async fn favourite_drinks(
    store: &FavouriteStore,
    source: &dyn DrinkSource,
) -> Result<Vec<Cocktail>, DrinkError> {
    let mut drinks = Vec::with_capacity(store.all().len());
    for favourite in store.all() {
        match source.lookup(&favourite.id_drink).await? {
            Some(drink) => drinks.push(drink),
            None => debug!("Favourite {} not found upstream", favourite.id_drink),
        }
    }
    Ok(drinks)
}
