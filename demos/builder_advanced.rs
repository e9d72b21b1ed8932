//! Advanced usage of the DrinkFinder builder API
//!
//! Shows the alcoholic filter, a custom timeout, settings loaded from
//! drinkit.toml / DRINKIT__* variables, and a favourites round trip.

use std::time::Duration;

use drinkit::config::AppConfig;
use drinkit::{format_duration, Countdown, DrinkFinder, Favourite, FavouriteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = AppConfig::load()?;

    println!("=== Non-alcoholic drinks starting with 'A' ===");
    let drinks = DrinkFinder::builder()
        .letter('a')
        .alcoholic(Some(false))
        .base_url(config.api.base_url.clone())
        .timeout(Duration::from_secs(10))
        .build()
        .await?;
    for drink in &drinks {
        println!("  - {}", drink.name);
    }

    let Some(first) = drinks.first() else {
        println!("Nothing to favourite");
        return Ok(());
    };

    println!("\n=== Favourites ===");
    let mut store = FavouriteStore::open(&config.favourites.path)?;
    if store.insert(Favourite::from(first))? {
        println!("Added {}", first.name);
    }
    for favourite in store.all() {
        println!("  * {} ({})", favourite.drink_name, favourite.id_drink);
    }

    println!("\n=== Countdown for {} ===", first.name);
    let countdown = Countdown::with_initial_time(first.prepare_time());
    println!(
        "{} ({})",
        countdown.display(),
        format_duration(countdown.remaining())
    );

    Ok(())
}
