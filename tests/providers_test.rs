use std::time::Duration;

use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use moodpick_api::{
    cache::{create_redis_client, Cache},
    error::AppError,
    models::CatalogItem,
    services::providers::{
        BookCatalog, DiscoverQuery, GoogleBooksClient, MovieCatalog, OpenRouterClient, SortOrder,
        TextGenerator, TmdbClient,
    },
};

const TIMEOUT: Duration = Duration::from_secs(2);

fn openrouter(server: &MockServer) -> OpenRouterClient {
    OpenRouterClient::new("test-key".to_string(), server.uri(), TIMEOUT).unwrap()
}

fn tmdb(server: &MockServer) -> TmdbClient {
    TmdbClient::new(
        Some("tmdb-key".to_string()),
        None,
        server.uri(),
        TIMEOUT,
        Cache::disabled(),
        60,
    )
    .unwrap()
}

#[tokio::test]
async fn test_openrouter_returns_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "some/model",
            "messages": [{ "role": "user", "content": "hello" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "first" } },
                { "message": { "role": "assistant", "content": "second" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = openrouter(&server)
        .complete("hello", "some/model")
        .await
        .unwrap();
    assert_eq!(reply, "first");
}

#[tokio::test]
async fn test_openrouter_error_payload_with_ok_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 429, "message": "Rate limit exceeded" }
        })))
        .mount(&server)
        .await;

    let result = openrouter(&server).complete("hello", "some/model").await;

    match result {
        Err(AppError::ExternalApi(message)) => assert!(message.contains("Rate limit exceeded")),
        other => panic!("expected ExternalApi error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_openrouter_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let result = openrouter(&server).complete("hello", "some/model").await;
    assert!(matches!(result, Err(AppError::ExternalApi(_))));
}

#[tokio::test]
async fn test_openrouter_timeout_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "choices": [] }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client =
        OpenRouterClient::new("test-key".to_string(), server.uri(), Duration::from_millis(100))
            .unwrap();
    let result = client.complete("hello", "some/model").await;

    assert!(matches!(result, Err(AppError::HttpClient(_))));
}

#[tokio::test]
async fn test_tmdb_search_sends_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "Hereditary 2018"))
        .and(query_param("include_adult", "false"))
        .and(query_param("api_key", "tmdb-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [
                { "id": 493922, "title": "Hereditary", "release_date": "2018-06-07", "vote_average": 7.3 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let movies = tmdb(&server).search_movies("Hereditary 2018").await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, 493922);
}

#[tokio::test]
async fn test_tmdb_access_token_uses_bearer_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(header("authorization", "Bearer read-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TmdbClient::new(
        None,
        Some("read-token".to_string()),
        server.uri(),
        TIMEOUT,
        Cache::disabled(),
        60,
    )
    .unwrap();

    assert!(client.search_movies("Alien").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tmdb_search_survives_unreachable_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "Alien"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 348, "title": "Alien", "release_date": "1979-05-25" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let redis = create_redis_client("redis://127.0.0.1:1").unwrap();
    let (cache, writer) = Cache::new(redis).await;
    let client = TmdbClient::new(
        Some("tmdb-key".to_string()),
        None,
        server.uri(),
        TIMEOUT,
        cache,
        60,
    )
    .unwrap();

    let movies = client.search_movies("Alien").await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, 348);
    writer.shutdown().await;
}

#[test]
fn test_tmdb_requires_credentials() {
    let result = TmdbClient::new(
        None,
        None,
        "http://localhost".to_string(),
        TIMEOUT,
        Cache::disabled(),
        60,
    );
    assert!(matches!(result, Err(AppError::Configuration(_))));
}

#[tokio::test]
async fn test_tmdb_details_extracts_trailer_director_and_cast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/493922"))
        .and(query_param("append_to_response", "videos,credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 493922,
            "title": "Hereditary",
            "overview": "A grieving family is haunted.",
            "release_date": "2018-06-07",
            "vote_average": 7.3,
            "poster_path": "/p.jpg",
            "backdrop_path": null,
            "genres": [{ "id": 27, "name": "Horror" }],
            "videos": { "results": [
                { "type": "Teaser", "site": "YouTube", "key": "teaser" },
                { "type": "Trailer", "site": "Vimeo", "key": "vimeo" },
                { "type": "Trailer", "site": "YouTube", "key": "V6wWKNij_1M" }
            ]},
            "credits": {
                "cast": [
                    { "name": "Toni Collette" }, { "name": "Alex Wolff" },
                    { "name": "Milly Shapiro" }, { "name": "Ann Dowd" },
                    { "name": "Gabriel Byrne" }, { "name": "Mallory Bechtel" }
                ],
                "crew": [
                    { "job": "Producer", "name": "Kevin Frakes" },
                    { "job": "Director", "name": "Ari Aster" }
                ]
            }
        })))
        .mount(&server)
        .await;

    let details = tmdb(&server).movie_details(493922).await.unwrap();
    let item = CatalogItem::from(details);

    assert_eq!(item.trailer_key.as_deref(), Some("V6wWKNij_1M"));
    assert_eq!(item.director.as_deref(), Some("Ari Aster"));
    assert_eq!(item.cast.len(), 5);
    assert_eq!(item.cast[0], "Toni Collette");
    assert_eq!(item.genres[0].name, "Horror");
}

#[tokio::test]
async fn test_tmdb_discover_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("with_genres", "18|35"))
        .and(query_param("page", "4"))
        .and(query_param("sort_by", "popularity.desc"))
        .and(query_param("vote_count.gte", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 13, "title": "Forrest Gump" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = DiscoverQuery {
        genre_ids: vec![18, 35],
        page: 4,
        sort_by: SortOrder::PopularityDesc,
        min_vote_count: 100,
    };
    let movies = tmdb(&server).discover_movies(&query).await.unwrap();

    assert_eq!(movies[0].title, "Forrest Gump");
}

#[tokio::test]
async fn test_tmdb_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status_message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let result = tmdb(&server).movie_details(1).await;

    match result {
        Err(AppError::ExternalApi(message)) => assert!(message.contains("401")),
        other => panic!("expected ExternalApi error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_google_books_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", "subject:cozy"))
        .and(query_param("key", "books-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 2,
            "items": [
                { "volumeInfo": {
                    "title": "The House in the Cerulean Sea",
                    "authors": ["TJ Klune"],
                    "description": "A magical island.",
                    "categories": ["Fiction"],
                    "averageRating": 4.5,
                    "imageLinks": { "thumbnail": "http://books.example/cover.jpg" }
                }},
                { "volumeInfo": { "authors": ["Nobody"] } }
            ]
        })))
        .mount(&server)
        .await;

    let client = GoogleBooksClient::new(
        "books-key".to_string(),
        server.uri(),
        TIMEOUT,
        Cache::disabled(),
        60,
    )
    .unwrap();
    let books = client.search_books("subject:cozy").await.unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].authors, vec!["TJ Klune".to_string()]);
    assert_eq!(books[0].average_rating, Some(4.5));
    assert_eq!(
        books[0].thumbnail.as_deref(),
        Some("http://books.example/cover.jpg")
    );
}
