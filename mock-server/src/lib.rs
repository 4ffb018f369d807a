use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct ReplaceItem {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// In-memory item table. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct Store {
    last_id: i64,
    items: BTreeMap<i64, Item>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::default();
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(replace_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let mut store = db.write().await;
    store.last_id += 1;
    let item = Item {
        id: store.last_id,
        name: input.name,
        description: input.description,
    };
    store.items.insert(item.id, item.clone());
    debug!(id = item.id, "created item");
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Item>, StatusCode> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Full replacement. A body id of 0 means "same as the path"; any other
/// mismatch is rejected.
async fn replace_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ReplaceItem>,
) -> StatusCode {
    if input.id != 0 && input.id != id {
        return StatusCode::BAD_REQUEST;
    }
    let mut store = db.write().await;
    match store.items.get_mut(&id) {
        Some(item) => {
            item.name = input.name;
            item.description = input.description;
            debug!(id, "replaced item");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_item(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.items.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
