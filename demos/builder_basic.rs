//! Basic usage of the DrinkFinder builder API
//!
//! This example demonstrates the three lookups the app offers:
//! 1. Browse drinks by first letter
//! 2. Search drinks by name
//! 3. Shuffle a random drink

use drinkit::{format_duration, DrinkFinder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Drinks starting with 'M' ===");
    let drinks = DrinkFinder::builder().letter('m').build().await?;
    for drink in &drinks {
        println!("  - {} ({})", drink.name, drink.id_drink);
    }

    println!("\n=== Search: margarita ===");
    let drinks = DrinkFinder::builder().name("margarita").build().await?;
    for drink in &drinks {
        println!(
            "  - {}: ready in {}",
            drink.name,
            format_duration(drink.prepare_time())
        );
    }

    println!("\n=== Random drink ===");
    match DrinkFinder::builder().random().build().await?.first() {
        Some(drink) => {
            println!("{}", drink.name);
            for ingredient in drink.ingredients() {
                println!("  - {}", ingredient);
            }
        }
        None => println!("No drink found"),
    }

    Ok(())
}
