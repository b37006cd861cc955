mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get, TestApp};

const SEAT_CLASSES: [&str; 5] = ["premium", "premium_smoke", "reserved", "reserved_smoke", "non_reserved"];

#[tokio::test]
async fn test_list_stations() {
    let app = TestApp::new();
    let response = app.send(get("/api/train/search/stations")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stations = body_json(response).await;
    let stations = stations.as_array().unwrap();
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0]["id"], 1);
    assert_eq!(stations[0]["name"], "isutrain1");
    assert_eq!(stations[0]["is_stop_express"], false);
    assert_eq!(stations[0]["is_stop_semi_express"], false);
    assert_eq!(stations[0]["is_stop_local"], false);
}

#[tokio::test]
async fn test_search_trains_returns_two_trains_with_every_seat_class() {
    let app = TestApp::new();
    let response = app
        .send(get("/api/train/search?use_at=2020-01-01T10:00:00%2B09:00&from=tokyo&to=osaka"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let trains = body_json(response).await;
    let trains = trains.as_array().unwrap();
    assert_eq!(trains.len(), 2);
    for train in trains {
        for class in SEAT_CLASSES {
            assert!(train["seat_availability"].get(class).is_some(), "availability {}", class);
            assert!(train["seat_fare"].get(class).is_some(), "fare {}", class);
        }
        assert_eq!(train["seat_availability"].as_object().unwrap().len(), 5);
        assert_eq!(train["seat_fare"].as_object().unwrap().len(), 5);
    }
}

#[tokio::test]
async fn test_search_trains_rejects_bad_queries() {
    let app = TestApp::new();
    let bad = [
        "/api/train/search",
        "/api/train/search?from=tokyo&to=osaka",
        "/api/train/search?use_at=2020-01-01T10:00:00Z&to=osaka",
        "/api/train/search?use_at=2020-01-01T10:00:00Z&from=tokyo",
        "/api/train/search?use_at=2020-01-01T10:00:00Z&from=&to=osaka",
        "/api/train/search?use_at=tomorrow&from=tokyo&to=osaka",
        "/api/train/search?use_at=0001-01-01T00:00:00Z&from=tokyo&to=osaka",
    ];
    for uri in bad {
        let response = app.send(get(uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body_bytes(response).await, "Bad Request");
    }
}

#[tokio::test]
async fn test_list_train_seats() {
    let app = TestApp::new();
    let response = app
        .send(get("/api/train/search/seats?train_class=nozomi&train_name=96&car_number=2&from=tokyo&to=nagoya"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["car_number"], 1);
    assert_eq!(body["train_class"], "dummy");
    assert!(body["date"].is_string());
    assert_eq!(body["seats"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_train_seats_requires_positive_car_number() {
    let app = TestApp::new();
    let base = "/api/train/search/seats?train_class=nozomi&train_name=96&from=tokyo&to=nagoya";
    for suffix in ["", "&car_number=0", "&car_number=-1", "&car_number=one"] {
        let uri = format!("{}{}", base, suffix);
        let response = app.send(get(&uri)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_list_train_seats_requires_train_and_route() {
    let app = TestApp::new();
    let bad = [
        "/api/train/search/seats?train_name=96&car_number=1&from=tokyo&to=nagoya",
        "/api/train/search/seats?train_class=nozomi&car_number=1&from=tokyo&to=nagoya",
        "/api/train/search/seats?train_class=nozomi&train_name=96&car_number=1&to=nagoya",
        "/api/train/search/seats?train_class=nozomi&train_name=96&car_number=1&from=tokyo",
    ];
    for uri in bad {
        assert_eq!(app.send(get(uri)).await.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}
