use clap::{Args, Parser, Subcommand};
use log::{debug, error};
use std::io::Read;
use std::time::Duration;

use drinkit::config::AppConfig;
use drinkit::prepare_time::{estimate, format_duration, keyword_breakdown};
use drinkit::{
    favourite_drinks, Cocktail, CocktailDbClient, Countdown, DrinkFinder, DrinkSource, Favourite,
    FavouriteStore,
};

#[derive(Parser)]
#[command(name = "drinkit", version, about = "Browse cocktails and time their preparation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List drinks starting with a letter
    Letter {
        letter: char,
        #[command(flatten)]
        filter: AlcoholFilter,
    },
    /// Search drinks by name
    Search { name: String },
    /// Show a random drink
    Random,
    /// Show the full recipe of a drink
    Show { id: String },
    /// Estimate prepare time from instructions text ("-" reads stdin)
    Estimate {
        text: String,
        /// List the keywords that contributed
        #[arg(long)]
        breakdown: bool,
    },
    /// Manage favourite drinks
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Run a countdown for a drink's prepare time or a fixed number of seconds
    Countdown {
        #[arg(required_unless_present = "seconds")]
        id: Option<String>,
        #[arg(long, conflicts_with = "id")]
        seconds: Option<u32>,
    },
}

#[derive(Args)]
struct AlcoholFilter {
    /// Only alcoholic drinks
    #[arg(long, conflicts_with = "non_alcoholic")]
    alcoholic: bool,
    /// Only non-alcoholic drinks
    #[arg(long)]
    non_alcoholic: bool,
}

impl AlcoholFilter {
    fn as_option(&self) -> Option<bool> {
        match (self.alcoholic, self.non_alcoholic) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum FavAction {
    /// Add a drink by id
    Add { id: String },
    /// Remove a drink by id
    Remove { id: String },
    /// List favourites with their full records
    List,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    debug!("{:?}", config);
    let client = CocktailDbClient::from_config(&config.api)?;

    match cli.command {
        Command::Letter { letter, filter } => {
            let drinks = DrinkFinder::builder()
                .letter(letter)
                .alcoholic(filter.as_option())
                .build_with(&client)
                .await?;
            print_list(&drinks);
        }
        Command::Search { name } => {
            let drinks = DrinkFinder::builder().name(name).build_with(&client).await?;
            print_list(&drinks);
        }
        Command::Random => match client.random().await? {
            Some(drink) => print_details(&drink),
            None => println!("No drink found"),
        },
        Command::Show { id } => match client.lookup(&id).await? {
            Some(drink) => print_details(&drink),
            None => println!("No drink with id {id}"),
        },
        Command::Estimate { text, breakdown } => {
            let text = if text == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                text
            };
            if breakdown {
                for hit in keyword_breakdown(&text) {
                    println!("{:>8} x{} = {}s", hit.keyword, hit.occurrences, hit.seconds);
                }
            }
            println!("{}", format_duration(estimate(Some(&text))));
        }
        Command::Fav { action } => {
            let mut store = FavouriteStore::open(&config.favourites.path)?;
            match action {
                FavAction::Add { id } => {
                    let drink = client
                        .lookup(&id)
                        .await?
                        .ok_or_else(|| format!("No drink with id {id}"))?;
                    if store.insert(Favourite::from(&drink))? {
                        println!("Added {}", drink.name);
                    } else {
                        println!("{} is already a favourite", drink.name);
                    }
                }
                FavAction::Remove { id } => {
                    if store.delete(&id)? {
                        println!("Removed {id}");
                    } else {
                        println!("{id} is not a favourite");
                    }
                }
                FavAction::List => print_list(&favourite_drinks(&store, &client).await?),
            }
        }
        Command::Countdown { id, seconds } => {
            let seconds = match (seconds, id) {
                (Some(seconds), _) => seconds,
                (None, Some(id)) => client
                    .lookup(&id)
                    .await?
                    .ok_or_else(|| format!("No drink with id {id}"))?
                    .prepare_time(),
                (None, None) => 0,
            };
            run_countdown(seconds).await;
        }
    }

    Ok(())
}

async fn run_countdown(seconds: u32) {
    let mut countdown = Countdown::with_initial_time(seconds);
    countdown.toggle();
    if !countdown.is_running() {
        println!("Nothing to count down");
        return;
    }

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // first tick completes immediately
    interval.tick().await;
    println!("{}", countdown.display());
    loop {
        interval.tick().await;
        let done = countdown.tick();
        println!("{}", countdown.display());
        if done {
            println!("Finished");
            break;
        }
    }
}

fn print_list(drinks: &[Cocktail]) {
    if drinks.is_empty() {
        println!("No drinks found");
        return;
    }
    for drink in drinks {
        println!(
            "{:>6}  {}  [{}]",
            drink.id_drink,
            drink.name,
            drink.alcoholic.as_deref().unwrap_or("?")
        );
    }
}

fn print_details(drink: &Cocktail) {
    println!("{} ({})", drink.name, drink.id_drink);
    if let Some(category) = &drink.category {
        println!("Category: {category}");
    }
    if let Some(alcoholic) = &drink.alcoholic {
        println!("Type: {alcoholic}");
    }
    if let Some(glass) = &drink.glass {
        println!("Glass: {glass}");
    }
    println!("\nIngredients:");
    for ingredient in drink.ingredients() {
        println!("- {ingredient}");
    }
    println!("\nInstructions:\n{}", drink.instructions.as_deref().unwrap_or(""));
    println!("\nPrepare time: {}", format_duration(drink.prepare_time()));
}
