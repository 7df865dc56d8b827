use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Body accepted by `POST /users` and `PUT /users/{id}`. Any `id` in the
/// body is ignored.
#[derive(Deserialize)]
pub struct UserInput {
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct CommentInput {
    #[serde(rename = "postId", default)]
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// In-memory records, listed in insertion order.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    comments: Vec<Comment>,
    last_comment_id: u64,
}

impl Store {
    /// A small fixture set shaped like the public placeholder service.
    pub fn seeded() -> Self {
        let users = vec![
            User {
                id: "1".to_string(),
                name: "Leanne Graham".to_string(),
                username: "Bret".to_string(),
                email: "Sincere@april.biz".to_string(),
            },
            User {
                id: "2".to_string(),
                name: "Ervin Howell".to_string(),
                username: "Antonette".to_string(),
                email: "Shanna@melissa.tv".to_string(),
            },
        ];
        let comments = vec![
            Comment {
                post_id: 1,
                id: 1,
                name: "id labore ex et quam laborum".to_string(),
                email: "Eliseo@gardner.biz".to_string(),
                body: "laudantium enim quasi est quidem magnam voluptate".to_string(),
            },
            Comment {
                post_id: 1,
                id: 2,
                name: "quo vero reiciendis velit similique earum".to_string(),
                email: "Jayne_Kuhic@sydney.com".to_string(),
                body: "est natus enim nihil est dolore omnis voluptatem".to_string(),
            },
            Comment {
                post_id: 2,
                id: 3,
                name: "odio adipisci rerum aut animi".to_string(),
                email: "Nikita@garfield.biz".to_string(),
                body: "quia molestiae reprehenderit quasi aspernatur".to_string(),
            },
        ];
        Self {
            users,
            comments,
            last_comment_id: 3,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    router(Store::default())
}

pub fn seeded_app() -> Router {
    router(Store::seeded())
}

pub fn router(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user))
        .route("/comments", get(list_comments).post(create_comment))
        .route("/comments/{id}", get(get_comment).put(update_comment))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_seeded(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, seeded_app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.read().await.users.clone())
}

async fn create_user(State(db): State<Db>, Json(input): Json<UserInput>) -> (StatusCode, Json<User>) {
    let user = User {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        username: input.username,
        email: input.email,
    };
    db.write().await.users.push(user.clone());
    info!(id = %user.id, "user created");
    (StatusCode::CREATED, Json(user))
}

async fn get_user(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UserInput>,
) -> Result<Json<User>, StatusCode> {
    let mut store = db.write().await;
    let user = store
        .users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    user.name = input.name;
    user.username = input.username;
    user.email = input.email;
    info!(%id, "user replaced");
    Ok(Json(user.clone()))
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    Json(db.read().await.comments.clone())
}

async fn create_comment(
    State(db): State<Db>,
    Json(input): Json<CommentInput>,
) -> (StatusCode, Json<Comment>) {
    let mut store = db.write().await;
    store.last_comment_id += 1;
    let comment = Comment {
        post_id: input.post_id,
        id: store.last_comment_id,
        name: input.name,
        email: input.email,
        body: input.body,
    };
    store.comments.push(comment.clone());
    info!(id = comment.id, "comment created");
    (StatusCode::CREATED, Json(comment))
}

async fn get_comment(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Comment>, StatusCode> {
    let store = db.read().await;
    store
        .comments
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<CommentInput>,
) -> Result<Json<Comment>, StatusCode> {
    let mut store = db.write().await;
    let comment = store
        .comments
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    comment.post_id = input.post_id;
    comment.name = input.name;
    comment.email = input.email;
    comment.body = input.body;
    info!(id, "comment replaced");
    Ok(Json(comment.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_serializes_post_id_in_camel_case() {
        let comment = Comment {
            post_id: 9,
            id: 1,
            name: "n".to_string(),
            email: "e".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["postId"], 9);
        assert!(json.get("post_id").is_none());
    }

    #[test]
    fn user_input_ignores_client_id() {
        let input: UserInput =
            serde_json::from_str(r#"{"id":"x","name":"Ada","username":"ada","email":"a@x"}"#).unwrap();
        assert_eq!(input.name, "Ada");
    }

    #[test]
    fn user_input_defaults_username() {
        let input: UserInput = serde_json::from_str(r#"{"name":"Ada","email":"a@x"}"#).unwrap();
        assert!(input.username.is_empty());
    }

    #[test]
    fn comment_input_rejects_missing_body() {
        let result: Result<CommentInput, _> =
            serde_json::from_str(r#"{"name":"n","email":"e"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn seeded_store_continues_comment_ids() {
        let store = Store::seeded();
        assert_eq!(store.users.len(), 2);
        assert_eq!(store.comments.len(), 3);
        assert_eq!(store.last_comment_id, 3);
    }
}
