use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xplore::favorites::api::{FavoritesAPI, FavoritesError};

const TOKEN: &str = "signed.jwt.token";

fn signed_in(server: &MockServer) -> FavoritesAPI {
    FavoritesAPI::new(&server.uri(), Some(TOKEN.to_string()))
}

#[test_log::test(tokio::test)]
async fn login_should_keep_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "userId": "kit", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "token": TOKEN,
          "user": { "id": "6650c0ffee", "userId": "kit" }
        })))
        .mount(&server)
        .await;

    let mut api = FavoritesAPI::new(&server.uri(), None);

    api.login("kit", "secret1").await.unwrap();

    assert_eq!(api.token(), Some(TOKEN));
}

#[test_log::test(tokio::test)]
async fn register_should_keep_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "message": "User registered successfully",
          "token": TOKEN,
          "user": { "id": "6650c0ffee", "userId": "kit" }
        })))
        .mount(&server)
        .await;

    let mut api = FavoritesAPI::new(&server.uri(), None);

    api.register("kit", "secret1").await.unwrap();

    assert_eq!(api.token(), Some(TOKEN));
}

#[test_log::test(tokio::test)]
async fn when_credentials_are_wrong_should_return_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let mut api = FavoritesAPI::new(&server.uri(), None);

    let result = api.login("kit", "wrong").await;

    match result {
        Err(FavoritesError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "Invalid credentials");
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    assert_eq!(api.token(), None);
}

#[test_log::test(tokio::test)]
async fn toggle_should_send_the_activity_with_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/activities/save"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(body_json(json!({ "activityId": "evt-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "success": true,
          "saved": true,
          "message": "Activity saved successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let saved = signed_in(&server).toggle_saved("evt-1").await.unwrap();

    assert!(saved);
}

#[test_log::test(tokio::test)]
async fn should_list_the_saved_activities() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/saved"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "success": true,
          "savedActivities": ["evt-1", "exh-1"]
        })))
        .mount(&server)
        .await;

    let saved = signed_in(&server).saved_activities().await.unwrap();

    assert_eq!(saved.len(), 2);
    assert!(saved.contains("exh-1"));
}

#[test_log::test(tokio::test)]
async fn should_check_a_single_activity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/check"))
        .and(query_param("activityId", "evt-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "success": true,
          "saved": false
        })))
        .mount(&server)
        .await;

    let saved = signed_in(&server).is_saved("evt-9").await.unwrap();

    assert!(!saved);
}

#[test_log::test(tokio::test)]
async fn when_the_backend_reports_a_failure_should_return_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/saved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let result = signed_in(&server).saved_activities().await;

    assert!(matches!(result, Err(FavoritesError::Unsuccessful)), "{:?}", result);
}

#[test_log::test(tokio::test)]
async fn without_a_token_should_not_call_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/activities/save"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = FavoritesAPI::new(&server.uri(), None).toggle_saved("evt-1").await;

    assert!(matches!(result, Err(FavoritesError::MissingToken)));
}
