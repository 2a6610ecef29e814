//! In-memory stand-in for the zoo species API.
//!
//! Serves the same four endpoints the walkthrough exercises, with every
//! response wrapped in the `ApiResult` envelope. Codes are assigned
//! sequentially per server instance, standing in for the real API's
//! identity column. The DTOs here are deliberately independent copies of
//! the client's; the integration tests catch schema drift between the two.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Ignored on input; the server assigns it.
    #[serde(default)]
    pub code: i32,
    pub common_name: String,
}

/// Envelope wrapped around every payload the API returns.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Species table plus the next identity value.
#[derive(Debug, Default)]
pub struct Store {
    next_code: i32,
    records: BTreeMap<i32, Species>,
}

impl Store {
    /// Insert a new record under the next sequential code (1, 2, ...).
    fn insert(&mut self, common_name: String) -> Species {
        self.next_code += 1;
        let species = Species {
            code: self.next_code,
            common_name,
        };
        self.records.insert(species.code, species.clone());
        species
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/Especies", get(list_species).post(create_species))
        .route(
            "/api/Especies/{code}",
            put(update_species).delete(delete_species),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_species(State(db): State<Db>) -> Json<ApiResult<Vec<Species>>> {
    let store = db.read().await;
    let species: Vec<Species> = store.records.values().cloned().collect();
    Json(ApiResult::ok("Listado de especies", species))
}

async fn create_species(
    State(db): State<Db>,
    Json(input): Json<Species>,
) -> Json<ApiResult<Species>> {
    let mut store = db.write().await;
    let species = store.insert(input.common_name);
    tracing::debug!(code = species.code, "especie creada");
    Json(ApiResult::ok("Especie creada", species))
}

async fn update_species(
    State(db): State<Db>,
    Path(code): Path<i32>,
    Json(input): Json<Species>,
) -> Result<Json<ApiResult<Species>>, (StatusCode, Json<ApiResult<Species>>)> {
    let mut store = db.write().await;
    match store.records.get_mut(&code) {
        Some(species) => {
            species.common_name = input.common_name;
            Ok(Json(ApiResult::ok("Especie actualizada", species.clone())))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResult::failure("Especie no encontrada")),
        )),
    }
}

/// Successful deletes answer 200 with an empty body; the client ignores
/// delete bodies entirely.
async fn delete_species(
    State(db): State<Db>,
    Path(code): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ApiResult<Species>>)> {
    let mut store = db.write().await;
    match store.records.remove(&code) {
        Some(_) => {
            tracing::debug!(code, "especie eliminada");
            Ok(StatusCode::OK)
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResult::failure("Especie no encontrada")),
        )),
    }
}
