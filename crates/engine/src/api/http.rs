//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use roster_domain::{
    PageRequest, Player, PlayerCriteria, PlayerDraft, PlayerId, PlayerOrder, Profession, Race,
};

use crate::app::App;
use crate::use_cases::ManagementError;

/// Create all HTTP routes.
///
/// Player routes are served at the root and again under `/rest`.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .merge(player_routes())
        .nest("/rest", player_routes())
}

fn player_routes() -> Router<Arc<App>> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route("/players/count", get(count_players))
        .route(
            "/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Players
// =============================================================================

async fn list_players(
    State(app): State<Arc<App>>,
    filter: Result<Query<FilterParams>, QueryRejection>,
    paging: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Query(filter) = filter.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let Query(paging) = paging.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let criteria = filter.criteria()?;
    let page = PageRequest::new(paging.page_number, paging.page_size)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let players = app
        .use_cases
        .management
        .player
        .list(&criteria, paging.order.unwrap_or_default(), page)
        .await?;
    Ok(Json(players))
}

async fn count_players(
    State(app): State<Arc<App>>,
    filter: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<usize>, ApiError> {
    let Query(filter) = filter.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let count = app
        .use_cases
        .management
        .player
        .count(&filter.criteria()?)
        .await?;
    Ok(Json(count))
}

async fn create_player(
    State(app): State<Arc<App>>,
    body: Result<Json<PlayerDraft>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(draft) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let player = app.use_cases.management.player.create(draft).await?;
    Ok(Json(player))
}

async fn get_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player = app
        .use_cases
        .management
        .player
        .get(parse_player_id(&id)?)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(player))
}

async fn update_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<PlayerDraft>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let player_id = parse_player_id(&id)?;
    let Json(draft) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let player = app
        .use_cases
        .management
        .player
        .update(player_id, draft)
        .await?;
    Ok(Json(player))
}

async fn delete_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .management
        .player
        .delete(parse_player_id(&id)?)
        .await?;
    Ok(StatusCode::OK)
}

fn parse_player_id(raw: &str) -> Result<PlayerId, ApiError> {
    raw.parse::<PlayerId>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Filter part of the list and count query strings.
///
/// `after` and `before` are epoch millis. An empty value such as `minLevel=`
/// is treated as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterParams {
    name: Option<String>,
    title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    race: Option<Race>,
    #[serde(default, deserialize_with = "empty_as_none")]
    profession: Option<Profession>,
    #[serde(default, deserialize_with = "empty_as_none")]
    after: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    before: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    banned: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    min_experience: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    max_experience: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    min_level: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    max_level: Option<i32>,
}

impl FilterParams {
    fn criteria(&self) -> Result<PlayerCriteria, ApiError> {
        Ok(PlayerCriteria {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            after: self.after.map(|ms| instant("after", ms)).transpose()?,
            before: self.before.map(|ms| instant("before", ms)).transpose()?,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        })
    }
}

/// Listing-only part of the query string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    order: Option<PlayerOrder>,
    #[serde(default, deserialize_with = "empty_as_none")]
    page_number: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    page_size: Option<i32>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

fn instant(field: &str, millis: i64) -> Result<DateTime<Utc>, ApiError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ApiError::BadRequest(format!("{} is out of range: {}", field, millis)))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::NotFound { .. } => ApiError::NotFound,
            ManagementError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ManagementError::Repo(err) => {
                tracing::error!(error = %err, "Player storage failed");
                ApiError::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryPlayerRepo;
    use crate::infrastructure::ports::PlayerRepo;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct TestServer {
        app: Arc<App>,
        router: Router,
    }

    impl TestServer {
        fn new() -> Self {
            let app = Arc::new(App::new(Arc::new(InMemoryPlayerRepo::new())));
            let router = routes().with_state(app.clone());
            Self { app, router }
        }

        async fn send(
            &self,
            method: Method,
            uri: &str,
            body: Option<String>,
        ) -> (StatusCode, Vec<u8>) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(body) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };
            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            (status, bytes.to_vec())
        }

        async fn json(
            &self,
            method: Method,
            uri: &str,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let (status, bytes) = self
                .send(method, uri, body.map(|b| b.to_string()))
                .await;
            let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, value)
        }

        async fn create(&self, name: &str, experience: i32) -> Value {
            let (status, body) = self
                .json(Method::POST, "/players", Some(player_body(name, experience)))
                .await;
            assert_eq!(status, StatusCode::OK, "create {} failed: {}", name, body);
            body
        }
    }

    fn millis(year: i32) -> i64 {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn player_body(name: &str, experience: i32) -> Value {
        json!({
            "name": name,
            "title": "Hero",
            "race": "HUMAN",
            "profession": "WARRIOR",
            "birthday": millis(2500),
            "experience": experience,
        })
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let server = TestServer::new();
        let (status, body) = server.send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn create_then_fetch_alice() {
        let server = TestServer::new();
        let created = server.create("Alice", 0).await;

        assert_eq!(created["id"], 1);
        assert_eq!(created["level"], 0);
        assert_eq!(created["untilNextLevel"], 100);
        assert_eq!(created["banned"], false);
        assert_eq!(created["birthday"], millis(2500));

        let (status, fetched) = server.json(Method::GET, "/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, fetched) = server.json(Method::GET, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields() {
        let server = TestServer::new();

        let mut body = player_body("Alice", 0);
        body["birthday"] = json!(millis(1999));
        let (status, _) = server.json(Method::POST, "/players", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut body = player_body("Alice", 0);
        body["name"] = json!("");
        let (status, _) = server.json(Method::POST, "/players", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = server
            .json(Method::POST, "/players", Some(json!({ "name": "Alice" })))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let stored = server.app.repositories.player.list_all().await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn malformed_bodies_are_bad_requests() {
        let server = TestServer::new();

        let (status, _) = server
            .send(Method::POST, "/players", Some("{not json".to_string()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut body = player_body("Alice", 0);
        body["race"] = json!("GOBLIN");
        let (status, _) = server.json(Method::POST, "/players", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = server.send(Method::POST, "/players", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_applies_partial_body() {
        let server = TestServer::new();
        server.create("Alice", 0).await;

        let (status, updated) = server
            .json(
                Method::POST,
                "/players/1",
                Some(json!({ "title": "Slayer", "experience": 1500, "banned": true })),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Alice");
        assert_eq!(updated["title"], "Slayer");
        assert_eq!(updated["banned"], true);
        assert_eq!(updated["level"], 5);
        assert_eq!(updated["untilNextLevel"], 600);
    }

    #[tokio::test]
    async fn update_with_long_title_leaves_record_unchanged() {
        let server = TestServer::new();
        server.create("Alice", 0).await;

        let (status, _) = server
            .json(
                Method::POST,
                "/players/1",
                Some(json!({ "name": "Bob", "title": "t".repeat(31) })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let stored = server
            .app
            .repositories
            .player
            .get(PlayerId::from_trusted(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name(), "Alice");
        assert_eq!(stored.title(), "Hero");
    }

    #[tokio::test]
    async fn bad_and_missing_ids() {
        let server = TestServer::new();

        for uri in ["/players/0", "/players/-4", "/players/abc", "/players/1.5"] {
            let (status, _) = server.send(Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "GET {}", uri);
            let (status, _) = server.send(Method::DELETE, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "DELETE {}", uri);
        }

        let (status, _) = server.send(Method::GET, "/players/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = server.send(Method::DELETE, "/players/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = server
            .json(Method::POST, "/players/42", Some(json!({ "title": "Ghost" })))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_removes_player() {
        let server = TestServer::new();
        server.create("Alice", 0).await;

        let (status, body) = server.send(Method::DELETE, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, _) = server.send(Method::GET, "/players/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_and_count_by_level_window() {
        let server = TestServer::new();
        for (name, experience) in [
            ("Hugo", 1500),
            ("Anna", 5500),
            ("Emil", 100),
            ("Dora", 2100),
            ("Bert", 6600),
            ("Carl", 4500),
            ("Fay", 3000),
        ] {
            server.create(name, experience).await;
        }

        let (status, page) = server
            .json(
                Method::GET,
                "/players?minLevel=5&maxLevel=10&order=NAME&pageSize=2&pageNumber=1",
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = page
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Dora", "Fay"]);

        let (status, count) = server
            .json(Method::GET, "/rest/players/count?minLevel=5&maxLevel=10", None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn list_defaults_to_first_three_by_id() {
        let server = TestServer::new();
        for name in ["Eve", "Dan", "Cat", "Bo"] {
            server.create(name, 0).await;
        }

        let (status, page) = server.json(Method::GET, "/players", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = page
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let (_, page) = server.json(Method::GET, "/players?pageNumber=9", None).await;
        assert_eq!(page, json!([]));
    }

    #[tokio::test]
    async fn birthday_window_uses_epoch_millis() {
        let server = TestServer::new();
        server.create("Alice", 0).await;

        let uri = format!("/players/count?after={}&before={}", millis(2400), millis(2600));
        let (_, count) = server.json(Method::GET, &uri, None).await;
        assert_eq!(count, 1);

        let uri = format!("/players/count?after={}", millis(2501));
        let (_, count) = server.json(Method::GET, &uri, None).await;
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn count_ignores_listing_parameters() {
        let server = TestServer::new();
        server.create("Alice", 0).await;

        for uri in [
            "/rest/players/count?order=POWER",
            "/players/count?pageNumber=-1&pageSize=x",
        ] {
            let (status, count) = server.json(Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "GET {}", uri);
            assert_eq!(count, 1);
        }
    }

    #[tokio::test]
    async fn empty_query_values_impose_no_constraint() {
        let server = TestServer::new();
        for name in ["Alice", "Bob"] {
            server.create(name, 0).await;
        }

        let (status, page) = server
            .json(
                Method::GET,
                "/rest/players?name=&minLevel=&race=&banned=&after=&order=&pageSize=",
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page.as_array().unwrap().len(), 2);

        let (status, count) = server
            .json(Method::GET, "/players/count?maxExperience=&profession=", None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn malformed_query_parameters_are_bad_requests() {
        let server = TestServer::new();
        for uri in [
            "/players?race=GOBLIN",
            "/players?order=POWER",
            "/players?minLevel=high",
            "/players?pageNumber=-1",
            "/players?pageSize=-2",
            "/players/count?after=9223372036854775807",
        ] {
            let (status, _) = server.send(Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "GET {}", uri);
        }
    }
}
