use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use kinogrid::config::TmdbSettings;
use kinogrid::error::FetchError;
use kinogrid::tmdb::{TmdbApi, TmdbClient};
use kinogrid::{fetch_movies, CatalogSource, Genre};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

const API_KEY: &str = "test-key";
const IMG: &str = "https://img.test/w500";

async fn movie_route(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("api_key").map(String::as_str) != Some(API_KEY) {
        return (StatusCode::UNAUTHORIZED, r#"{"status_code":7}"#).into_response();
    }
    assert_eq!(params.get("language").map(String::as_str), Some("ru-RU"));

    match id.as_str() {
        "popular" => {
            assert_eq!(params.get("page").map(String::as_str), Some("1"));
            Json(json!({
                "page": 1,
                "results": [
                    {
                        "id": 10,
                        "title": "Первый",
                        "overview": "",
                        "poster_path": "/ten.jpg",
                        "release_date": "2024-05-01",
                        "vote_average": 7.345,
                        "genre_ids": [18, 35]
                    },
                    {
                        "id": 20,
                        "title": "Второй",
                        "overview": "Сюжет",
                        "poster_path": null,
                        "release_date": "2023-01-02",
                        "vote_average": 6.0,
                        "genre_ids": [28]
                    }
                ]
            }))
            .into_response()
        }
        "10" => Json(json!({
            "id": 10,
            "genres": [{"id": 18, "name": "драма"}, {"id": 35, "name": "комедия"}],
            "runtime": 121,
            "budget": 2500000,
            "revenue": 9000000
        }))
        .into_response(),
        "99" => (StatusCode::OK, "{not json").into_response(),
        _ => (StatusCode::NOT_FOUND, r#"{"status_code":34}"#).into_response(),
    }
}

async fn spawn_stub() -> String {
    let router = Router::new().route("/movie/:id", get(movie_route));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn settings(base_url: String, api_key: &str) -> TmdbSettings {
    TmdbSettings {
        api_key: Some(api_key.to_string()),
        base_url,
        image_base_url: IMG.to_string(),
        language: "ru-RU".to_string(),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn lists_popular_movies_in_service_order() {
    let client = TmdbClient::new(&settings(spawn_stub().await, API_KEY)).unwrap();
    let results = client.list_popular().await.unwrap();
    let ids: Vec<i64> = results.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![10, 20]);
    assert_eq!(results[1].poster_path, None);
    assert_eq!(results[0].genre_ids, Some(vec![18, 35]));
}

#[tokio::test]
async fn fetches_movie_detail() {
    let client = TmdbClient::new(&settings(spawn_stub().await, API_KEY)).unwrap();
    let detail = client.fetch_movie_detail(10).await.unwrap();
    assert_eq!(detail.id, 10);
    assert_eq!(detail.runtime, Some(121.0));
    assert_eq!(detail.genres.unwrap().len(), 2);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let client = TmdbClient::new(&settings(spawn_stub().await, "wrong")).unwrap();
    match client.list_popular().await {
        Err(FetchError::Status { status, url, .. }) => {
            assert_eq!(status, 401);
            assert!(url.ends_with("/movie/popular"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let client = TmdbClient::new(&settings(spawn_stub().await, API_KEY)).unwrap();
    let err = client.fetch_movie_detail(99).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn pipeline_over_http_degrades_missing_details() {
    let client = TmdbClient::new(&settings(spawn_stub().await, API_KEY)).unwrap();
    let catalog = fetch_movies(&client, IMG).await;

    assert_eq!(
        catalog.source,
        CatalogSource::Degraded {
            failed_ids: vec![20]
        }
    );
    let first = &catalog.movies[0];
    assert_eq!(first.poster, "https://img.test/w500/ten.jpg");
    assert_eq!(first.vote_average, 7.3);
    assert_eq!(
        first.genres,
        vec![
            Genre::Name("драма".to_string()),
            Genre::Name("комедия".to_string())
        ]
    );
    assert_eq!(first.runtime, 121);

    let second = &catalog.movies[1];
    assert_eq!(second.genres, vec![Genre::Code(28)]);
    assert_eq!(second.overview, "Сюжет");
    assert_eq!(second.runtime, 0);
}

#[tokio::test]
async fn unreachable_service_falls_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TmdbClient::new(&settings(format!("http://{addr}"), API_KEY)).unwrap();
    assert!(matches!(
        client.list_popular().await,
        Err(FetchError::Transport { .. })
    ));

    let catalog = fetch_movies(&client, IMG).await;
    assert_eq!(catalog.source, CatalogSource::Fallback);
    assert_eq!(catalog.movies.len(), 8);
}
