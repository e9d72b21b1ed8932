//! Locally stored favourite drinks.
//!
//! The store is a single table keyed by drink id, persisted as a JSON array.
//! Writes go to a sibling temp file which is then renamed over the original,
//! so a crash never leaves a half-written store behind.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::DrinkError;
use crate::model::Cocktail;

/// A favourited drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favourite {
    pub id_drink: String,
    pub drink_name: String,
}

impl Favourite {
    pub fn new(id_drink: impl Into<String>, drink_name: impl Into<String>) -> Self {
        Self {
            id_drink: id_drink.into(),
            drink_name: drink_name.into(),
        }
    }
}

impl From<&Cocktail> for Favourite {
    fn from(drink: &Cocktail) -> Self {
        Self::new(drink.id_drink.clone(), drink.name.clone())
    }
}

#[derive(Debug)]
pub struct FavouriteStore {
    path: PathBuf,
    rows: Vec<Favourite>,
}

impl FavouriteStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DrinkError> {
        let path = path.into();
        let rows = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("Loaded {} favourite(s) from {}", rows.len(), path.display());
        Ok(Self { path, rows })
    }

    /// Insert a favourite, ignoring it if the drink id is already stored.
    ///
    /// Returns `true` when a row was added.
    pub fn insert(&mut self, favourite: Favourite) -> Result<bool, DrinkError> {
        if self.is_favourite(&favourite.id_drink) {
            debug!("{} already a favourite", favourite.id_drink);
            return Ok(false);
        }
        info!("Adding favourite {} ({})", favourite.id_drink, favourite.drink_name);
        let mut rows = self.rows.clone();
        rows.push(favourite);
        self.commit(rows)?;
        Ok(true)
    }

    /// Remove the favourite with `id_drink`. Returns `true` when a row was removed.
    pub fn delete(&mut self, id_drink: &str) -> Result<bool, DrinkError> {
        if !self.is_favourite(id_drink) {
            return Ok(false);
        }
        let rows: Vec<Favourite> = self
            .rows
            .iter()
            .filter(|row| row.id_drink != id_drink)
            .cloned()
            .collect();
        self.commit(rows)?;
        info!("Removed favourite {}", id_drink);
        Ok(true)
    }

    /// All favourites in insertion order.
    pub fn all(&self) -> &[Favourite] {
        &self.rows
    }

    pub fn is_favourite(&self, id_drink: &str) -> bool {
        self.rows.iter().any(|row| row.id_drink == id_drink)
    }

    /// Write `rows` to disk and only then make them the in-memory state.
    fn commit(&mut self, rows: Vec<Favourite>) -> Result<(), DrinkError> {
        self.persist(&rows)?;
        self.rows = rows;
        Ok(())
    }

    fn persist(&self, rows: &[Favourite]) -> Result<(), DrinkError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(rows)?)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
