use thiserror::Error;

/// Errors that can occur while looking up drinks or managing favourites
#[derive(Error, Debug)]
pub enum DrinkError {
    /// Request to the cocktail API failed before a response arrived
    #[error("Failed to fetch drinks: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Cocktail API answered with a non-success status
    #[error("Cocktail API returned {status} for {url}")]
    Http { status: u16, url: String },

    /// Response body or favourites file was not valid JSON
    #[error("Failed to parse drink data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Caller supplied an unusable query
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Reading or writing the favourites store failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
