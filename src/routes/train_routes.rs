use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::train_dto::{ApiResponse, CreateTrainRequest, TrainResponse, UpdateTrainRequest};
use crate::models::Train;
use crate::repositories::PgTrainRepository;
use crate::services::TrainService;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_train_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_train))
        .route("/", get(list_trains))
        .route("/:id", get(get_train))
        .route("/:id", put(update_train))
        .route("/:id", delete(delete_train))
}

fn train_service(state: &AppState) -> TrainService<PgTrainRepository> {
    TrainService::new(PgTrainRepository::new(state.pool.clone()))
}

async fn create_train(
    State(state): State<AppState>,
    Json(request): Json<CreateTrainRequest>,
) -> Result<Json<ApiResponse<TrainResponse>>, AppError> {
    request.validate()?;
    let train = train_service(&state).create_train(Train::from(request)).await?;
    Ok(Json(ApiResponse::success_with_message(
        train.into(),
        "Tren creado exitosamente".to_string(),
    )))
}

async fn list_trains(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrainResponse>>, AppError> {
    let trains = train_service(&state).get_all_trains().await?;
    Ok(Json(trains.into_iter().map(TrainResponse::from).collect()))
}

async fn get_train(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TrainResponse>, AppError> {
    // El servicio propaga la ausencia como None; aquí se convierte en 404
    let train = train_service(&state)
        .get_train_by_id(id)
        .await?
        .ok_or_else(|| not_found_error("Train", id))?;
    Ok(Json(train.into()))
}

async fn update_train(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTrainRequest>,
) -> Result<Json<ApiResponse<TrainResponse>>, AppError> {
    request.validate()?;
    let train = train_service(&state)
        .update_train(id, Train::from(request))
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        train.into(),
        "Tren actualizado exitosamente".to_string(),
    )))
}

async fn delete_train(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    train_service(&state).delete_train(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Tren eliminado exitosamente"
    })))
}
