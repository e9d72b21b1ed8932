use std::collections::HashMap;
use std::fmt;

use serde::de::Error as _;
use serde::Deserialize;

use crate::prepare_time;

/// Number of numbered ingredient/measure slots on a drink record.
const INGREDIENT_SLOTS: usize = 15;

/// A drink record as returned by TheCocktailDB.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cocktail {
    #[serde(rename = "idDrink")]
    pub id_drink: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    /// `strIngredientN` / `strMeasureN` and any other field we do not model.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One line of a drink's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measure {
            Some(measure) => write!(f, "{} ({})", self.name, measure),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Cocktail {
    /// Create a drink record with only the identifying fields set.
    pub fn new(id_drink: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id_drink: id_drink.into(),
            name: name.into(),
            thumbnail: None,
            category: None,
            alcoholic: None,
            glass: None,
            instructions: None,
            extra: HashMap::new(),
        }
    }

    /// Whether the API classifies this drink as "Alcoholic".
    ///
    /// "Optional alcohol" and a missing classification both count as non-alcoholic.
    pub fn is_alcoholic(&self) -> bool {
        self.alcoholic
            .as_deref()
            .is_some_and(|kind| kind.trim().eq_ignore_ascii_case("alcoholic"))
    }

    /// Ingredients paired with their measures, skipping empty slots.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = self.slot_text(&format!("strIngredient{slot}"))?;
                let measure = self.slot_text(&format!("strMeasure{slot}"));
                Some(Ingredient { name, measure })
            })
            .collect()
    }

    /// Estimated preparation time in seconds for this drink's instructions.
    pub fn prepare_time(&self) -> u32 {
        prepare_time::estimate(self.instructions.as_deref())
    }

    fn slot_text(&self, key: &str) -> Option<String> {
        self.extra
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

/// Envelope of every TheCocktailDB search/lookup response.
///
/// The API sends `"drinks": null` (or a bare string on some endpoints) when
/// nothing matches.
#[derive(Debug, Default, Deserialize)]
pub struct CocktailResponse {
    #[serde(default, deserialize_with = "drinks_or_none")]
    pub drinks: Option<Vec<Cocktail>>,
}

impl CocktailResponse {
    pub fn into_drinks(self) -> Vec<Cocktail> {
        self.drinks.unwrap_or_default()
    }
}

fn drinks_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Cocktail>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null | serde_json::Value::String(_) => Ok(None),
        list @ serde_json::Value::Array(_) => serde_json::from_value(list)
            .map(Some)
            .map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "expected a list of drinks, null or a string, got {other}"
        ))),
    }
}
