use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use serde::{Serialize, de::DeserializeOwned};
use std::str::FromStr;
use std::sync::Arc;

use super::protocol::{
    AckResponse, AddNodeResponse, GetResponse, PutRequest, PutResponse, RemoveNodeResponse,
    StrategyRequest,
};
use super::service::CacheCoordinator;
use crate::consistency::resolver::ReadStrategy;
use crate::node::store::NodeId;

pub async fn handle_put<V>(
    Extension(coordinator): Extension<Arc<CacheCoordinator<V>>>,
    Json(req): Json<PutRequest>,
) -> (StatusCode, Json<PutResponse>)
where
    V: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let value: V = match serde_json::from_str(&req.value_json) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("Failed to deserialize value: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(PutResponse { success: false }),
            );
        }
    };

    // An empty cluster degrades to a logged no-op, never an error.
    coordinator.put(req.key, value).await;
    (StatusCode::OK, Json(PutResponse { success: true }))
}

pub async fn handle_get<V>(
    Extension(coordinator): Extension<Arc<CacheCoordinator<V>>>,
    Path(key): Path<String>,
) -> (StatusCode, Json<GetResponse>)
where
    V: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    match coordinator.get(&key).await {
        Some(value) => match serde_json::to_string(&value) {
            Ok(value_json) => (
                StatusCode::OK,
                Json(GetResponse {
                    value_json: Some(value_json),
                }),
            ),
            Err(e) => {
                tracing::error!("Failed to serialize value: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(GetResponse { value_json: None }),
                )
            }
        },
        None => (
            StatusCode::NOT_FOUND,
            Json(GetResponse { value_json: None }),
        ),
    }
}

pub async fn handle_add_node<V>(
    Extension(coordinator): Extension<Arc<CacheCoordinator<V>>>,
) -> (StatusCode, Json<AddNodeResponse>)
where
    V: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let id = coordinator.add_node().await;
    (
        StatusCode::OK,
        Json(AddNodeResponse { node_id: id.0 }),
    )
}

pub async fn handle_remove_node<V>(
    Extension(coordinator): Extension<Arc<CacheCoordinator<V>>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<RemoveNodeResponse>)
where
    V: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let removed = coordinator.remove_node(&NodeId(id)).await;
    let status = if removed {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(RemoveNodeResponse { removed }))
}

pub async fn handle_rebalance<V>(
    Extension(coordinator): Extension<Arc<CacheCoordinator<V>>>,
) -> (StatusCode, Json<AckResponse>)
where
    V: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    coordinator.rebalance().await;
    (StatusCode::OK, Json(AckResponse { success: true }))
}

pub async fn handle_set_strategy<V>(
    Extension(coordinator): Extension<Arc<CacheCoordinator<V>>>,
    Json(req): Json<StrategyRequest>,
) -> (StatusCode, Json<AckResponse>)
where
    V: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let strategy = match ReadStrategy::from_str(&req.strategy) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to parse strategy: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(AckResponse { success: false }),
            );
        }
    };

    coordinator.set_strategy(strategy).await;
    (StatusCode::OK, Json(AckResponse { success: true }))
}

pub async fn handle_stats<V>(
    Extension(coordinator): Extension<Arc<CacheCoordinator<V>>>,
) -> (StatusCode, String)
where
    V: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    (StatusCode::OK, coordinator.statistics_report().await)
}
