//! UniFFI bindings for drinkit
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{Cocktail, DrinkError, DrinkFinder, DrinkFinderBuilder};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible drink record
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiDrink {
    pub id: String,
    pub name: String,
    /// Thumbnail URL (empty string if none)
    pub thumbnail: String,
    pub category: String,
    pub alcoholic: bool,
    pub glass: String,
    /// Instructions text, `None` when the record has none
    pub instructions: Option<String>,
    /// Ingredient lines, e.g. "Lime (Juice of 1)"
    pub ingredients: Vec<String>,
    /// Estimated preparation time in seconds
    pub prepare_seconds: u32,
}

impl From<Cocktail> for FfiDrink {
    fn from(drink: Cocktail) -> Self {
        FfiDrink {
            ingredients: drink.ingredients().iter().map(ToString::to_string).collect(),
            prepare_seconds: drink.prepare_time(),
            alcoholic: drink.is_alcoholic(),
            id: drink.id_drink,
            name: drink.name,
            thumbnail: drink.thumbnail.unwrap_or_default(),
            category: drink.category.unwrap_or_default(),
            glass: drink.glass.unwrap_or_default(),
            instructions: drink.instructions,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiDrinkError {
    /// Network or HTTP failure
    FetchError { message: String },
    /// Response could not be decoded
    ParseError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Storage or configuration failure
    StorageError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiDrinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiDrinkError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiDrinkError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiDrinkError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiDrinkError::StorageError { message } => write!(f, "Storage error: {}", message),
            FfiDrinkError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiDrinkError {}

impl From<DrinkError> for FfiDrinkError {
    fn from(err: DrinkError) -> Self {
        let message = err.to_string();
        match err {
            DrinkError::Fetch(_) | DrinkError::Http { .. } => FfiDrinkError::FetchError { message },
            DrinkError::Parse(_) => FfiDrinkError::ParseError { message },
            DrinkError::InvalidInput(_) | DrinkError::Builder(_) => {
                FfiDrinkError::InvalidInput { message }
            }
            DrinkError::Io(_) | DrinkError::Config(_) => FfiDrinkError::StorageError { message },
        }
    }
}

/// Lookup options shared by every query function
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiQueryConfig {
    /// `Some(true)` keeps alcoholic drinks only, `Some(false)` non-alcoholic only
    pub alcoholic: Option<bool>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
    /// Optional API base URL override
    pub base_url: Option<String>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiDrinkError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiDrinkError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn run_query(
    builder: DrinkFinderBuilder,
    config: Option<FfiQueryConfig>,
) -> Result<Vec<FfiDrink>, FfiDrinkError> {
    let config = config.unwrap_or_default();
    let mut builder = builder.alcoholic(config.alcoholic);

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    let rt = create_runtime()?;
    let drinks = rt.block_on(builder.build())?;
    Ok(drinks.into_iter().map(FfiDrink::from).collect())
}

/// Estimate preparation time in seconds from instructions text
///
/// `None` yields 0; any present text (even empty) yields at least 30.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn estimate_prepare_time(instructions: Option<String>) -> u32 {
    crate::prepare_time::estimate(instructions.as_deref())
}

/// Render seconds as e.g. "1 minutes 30 seconds"
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_prepare_time(total_seconds: u32) -> String {
    crate::prepare_time::format_duration(total_seconds)
}

/// Drinks whose name starts with `letter`
///
/// Only the first character of `letter` is used.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn drinks_by_letter(
    letter: String,
    config: Option<FfiQueryConfig>,
) -> Result<Vec<FfiDrink>, FfiDrinkError> {
    let letter = letter.chars().next().ok_or_else(|| FfiDrinkError::InvalidInput {
        message: "letter must not be empty".to_string(),
    })?;
    run_query(DrinkFinder::builder().letter(letter), config)
}

/// Drinks whose name contains `name`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_drinks_by_name(
    name: String,
    config: Option<FfiQueryConfig>,
) -> Result<Vec<FfiDrink>, FfiDrinkError> {
    run_query(DrinkFinder::builder().name(name), config)
}

/// One random drink, or `None` if the API returned nothing
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn random_drink(config: Option<FfiQueryConfig>) -> Result<Option<FfiDrink>, FfiDrinkError> {
    Ok(run_query(DrinkFinder::builder().random(), config)?
        .into_iter()
        .next())
}
