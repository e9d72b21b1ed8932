use drinkit::{CocktailDbClient, DrinkError, DrinkSource};
use mockito::Matcher;

const SEARCH_M: &str = include_str!("fixtures/search_m.json");

fn client_for(server: &mockito::Server) -> CocktailDbClient {
    CocktailDbClient::with_base_url(server.url(), None).unwrap()
}

#[tokio::test]
async fn test_by_first_letter_sends_lowercase_letter() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("f".into(), "m".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_M)
        .create_async()
        .await;

    let drinks = client_for(&server).by_first_letter('M').await.unwrap();

    m.assert_async().await;
    assert_eq!(drinks.len(), 3);
    assert_eq!(drinks[0].name, "Mojito");
    assert_eq!(drinks[0].prepare_time(), 110);
    assert_eq!(drinks[1].prepare_time(), 95);
    // Mulled Wine has "strInstructions": null
    assert_eq!(drinks[2].instructions, None);
    assert_eq!(drinks[2].prepare_time(), 0);
}

#[tokio::test]
async fn test_by_name() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "mojito".into()))
        .with_status(200)
        .with_body(SEARCH_M)
        .create_async()
        .await;

    let drinks = client_for(&server).by_name("  mojito ").await.unwrap();
    assert_eq!(drinks[0].id_drink, "11000");
    assert_eq!(drinks[0].ingredients().len(), 5);
}

#[tokio::test]
async fn test_no_results_is_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"drinks": null}"#)
        .create_async()
        .await;

    let drinks = client_for(&server).by_name("zzzz").await.unwrap();
    assert!(drinks.is_empty());
}

#[tokio::test]
async fn test_random_takes_first_drink() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/random.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(SEARCH_M)
        .create_async()
        .await;

    let drink = client_for(&server).random().await.unwrap();
    assert_eq!(drink.map(|d| d.name), Some("Mojito".to_string()));
}

#[tokio::test]
async fn test_lookup_empty_body_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "999999".into()))
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let drink = client_for(&server).lookup("999999").await.unwrap();
    assert!(drink.is_none());
}

#[tokio::test]
async fn test_http_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let result = client_for(&server).by_first_letter('a').await;
    assert!(matches!(result, Err(DrinkError::Http { status: 503, .. })));
}

#[tokio::test]
async fn test_malformed_json() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let result = client_for(&server).by_name("mojito").await;
    assert!(matches!(result, Err(DrinkError::Parse(_))));
}

#[tokio::test]
async fn test_undecodable_drink_record_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"drinks":[{"strDrink":"x"}]}"#)
        .create_async()
        .await;

    let result = client_for(&server).by_name("x").await;
    assert!(matches!(result, Err(DrinkError::Parse(_))));
}
