use async_trait::async_trait;
use drinkit::{favourite_drinks, Cocktail, DrinkError, DrinkFinder, DrinkSource, Favourite, FavouriteStore};
use mockito::Matcher;
use tempfile::TempDir;

/// In-memory drink source with a handful of fixed records
struct CannedSource {
    drinks: Vec<Cocktail>,
}

impl CannedSource {
    fn new() -> Self {
        let mut mojito = Cocktail::new("11000", "Mojito");
        mojito.alcoholic = Some("Alcoholic".to_string());
        let mut smoothie = Cocktail::new("12618", "Mango Orange Smoothie");
        smoothie.alcoholic = Some("Non alcoholic".to_string());
        let mut margarita = Cocktail::new("11007", "Margarita");
        margarita.alcoholic = Some("Alcoholic".to_string());

        Self {
            drinks: vec![mojito, smoothie, margarita],
        }
    }
}

#[async_trait]
impl DrinkSource for CannedSource {
    async fn by_first_letter(&self, letter: char) -> Result<Vec<Cocktail>, DrinkError> {
        let letter = letter.to_ascii_lowercase();
        Ok(self
            .drinks
            .iter()
            .filter(|d| d.name.to_ascii_lowercase().starts_with(letter))
            .cloned()
            .collect())
    }

    async fn by_name(&self, name: &str) -> Result<Vec<Cocktail>, DrinkError> {
        let name = name.to_ascii_lowercase();
        Ok(self
            .drinks
            .iter()
            .filter(|d| d.name.to_ascii_lowercase().contains(&name))
            .cloned()
            .collect())
    }

    async fn random(&self) -> Result<Option<Cocktail>, DrinkError> {
        Ok(self.drinks.last().cloned())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Cocktail>, DrinkError> {
        Ok(self.drinks.iter().find(|d| d.id_drink == id).cloned())
    }
}

#[tokio::test]
async fn test_builder_requires_query() {
    let result = DrinkFinder::builder().build_with(&CannedSource::new()).await;
    assert!(matches!(result, Err(DrinkError::Builder(_))));
}

#[tokio::test]
async fn test_builder_letter_without_filter() {
    let drinks = DrinkFinder::builder()
        .letter('m')
        .build_with(&CannedSource::new())
        .await
        .unwrap();
    assert_eq!(drinks.len(), 3);
}

#[tokio::test]
async fn test_builder_alcoholic_filter() {
    let source = CannedSource::new();

    let alcoholic = DrinkFinder::builder()
        .letter('m')
        .alcoholic(Some(true))
        .build_with(&source)
        .await
        .unwrap();
    let names: Vec<_> = alcoholic.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Mojito", "Margarita"]);

    let soft = DrinkFinder::builder()
        .letter('m')
        .alcoholic(Some(false))
        .build_with(&source)
        .await
        .unwrap();
    assert_eq!(soft.len(), 1);
    assert_eq!(soft[0].name, "Mango Orange Smoothie");
}

#[tokio::test]
async fn test_builder_random_yields_at_most_one() {
    let drinks = DrinkFinder::builder()
        .random()
        .build_with(&CannedSource::new())
        .await
        .unwrap();
    assert_eq!(drinks.len(), 1);
}

#[tokio::test]
async fn test_builder_last_query_wins() {
    let drinks = DrinkFinder::builder()
        .letter('z')
        .name("rita")
        .build_with(&CannedSource::new())
        .await
        .unwrap();
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].id_drink, "11007");
}

#[tokio::test]
async fn test_builder_against_mock_server() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("f".into(), "m".into()))
        .with_status(200)
        .with_body(include_str!("fixtures/search_m.json"))
        .create_async()
        .await;

    let drinks = DrinkFinder::builder()
        .letter('m')
        .alcoholic(Some(false))
        .base_url(server.url())
        .build()
        .await
        .unwrap();

    // "Optional alcohol" counts as non-alcoholic
    let names: Vec<_> = drinks.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Mango Orange Smoothie", "Mulled Wine"]);
}

#[tokio::test]
async fn test_favourite_drinks_skip_unknown_ids() {
    let dir = TempDir::new().unwrap();
    let mut store = FavouriteStore::open(dir.path().join("favourites.json")).unwrap();
    store.insert(Favourite::new("11007", "Margarita")).unwrap();
    store.insert(Favourite::new("404", "Gone")).unwrap();

    let drinks = favourite_drinks(&store, &CannedSource::new()).await.unwrap();
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].name, "Margarita");
}
