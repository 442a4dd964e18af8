use crate::models::Train;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para crear un tren
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTrainRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "source is required"))]
    pub source: String,
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[validate(range(min = 0.0, message = "base_price must be non-negative"))]
    pub base_price: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "discount_percentage must be between 0 and 100"))]
    pub discount_percentage: f64,
}

// Request para actualizar un tren: reemplazo completo de los campos mutables
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTrainRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "source is required"))]
    pub source: String,
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[validate(range(min = 0.0, message = "base_price must be non-negative"))]
    pub base_price: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "discount_percentage must be between 0 and 100"))]
    pub discount_percentage: f64,
}

// Response de tren
#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub id: i64,
    pub name: String,
    pub source: String,
    pub destination: String,
    pub base_price: f64,
    pub discount_percentage: f64,
}

impl From<CreateTrainRequest> for Train {
    fn from(request: CreateTrainRequest) -> Self {
        Train::new(
            request.name,
            request.source,
            request.destination,
            request.base_price,
            request.discount_percentage,
        )
    }
}

impl From<UpdateTrainRequest> for Train {
    fn from(request: UpdateTrainRequest) -> Self {
        Train::new(
            request.name,
            request.source,
            request.destination,
            request.base_price,
            request.discount_percentage,
        )
    }
}

impl From<Train> for TrainResponse {
    fn from(train: Train) -> Self {
        Self {
            // id siempre asignado para filas que salen del store
            id: train.id.unwrap_or_default(),
            name: train.name,
            source: train.source,
            destination: train.destination,
            base_price: train.base_price,
            discount_percentage: train.discount_percentage,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
