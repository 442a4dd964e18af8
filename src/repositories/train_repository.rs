//! Repositorio de trenes
//!
//! El acceso a datos se define detrás del trait `TrainStore` para que el
//! servicio pueda probarse con un store en memoria sin tocar PostgreSQL.

use crate::models::Train;
use crate::utils::errors::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

/// Contrato de persistencia consumido por el servicio
#[async_trait]
pub trait TrainStore: Send + Sync {
    /// Todos los trenes almacenados, ordenados por id
    async fn find_all(&self) -> Result<Vec<Train>, AppError>;

    /// El tren con ese id, o `None` si no existe (la ausencia no es error)
    async fn find_by_id(&self, id: i64) -> Result<Option<Train>, AppError>;

    /// Persiste el registro: INSERT si el id no está asignado, UPDATE si lo está.
    /// Devuelve la fila persistida (con el id asignado por el store).
    async fn save(&self, train: Train) -> Result<Train, AppError>;

    /// Elimina el registro con ese id; no falla si no existe
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgTrainRepository {
    pool: PgPool,
}

impl PgTrainRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainStore for PgTrainRepository {
    async fn find_all(&self) -> Result<Vec<Train>, AppError> {
        let trains = sqlx::query_as::<_, Train>("SELECT * FROM trains ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(trains)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Train>, AppError> {
        let train = sqlx::query_as::<_, Train>("SELECT * FROM trains WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(train)
    }

    async fn save(&self, train: Train) -> Result<Train, AppError> {
        let saved = match train.id {
            // id ya asignado: sobreescribir la fila existente
            Some(id) => {
                sqlx::query_as::<_, Train>(
                    r#"
                    UPDATE trains
                    SET name = $2, source = $3, destination = $4, base_price = $5, discount_percentage = $6
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(train.name)
                .bind(train.source)
                .bind(train.destination)
                .bind(train.base_price)
                .bind(train.discount_percentage)
                .fetch_one(&self.pool)
                .await?
            }
            // id sin asignar: insertar y dejar que BIGSERIAL lo asigne
            None => {
                sqlx::query_as::<_, Train>(
                    r#"
                    INSERT INTO trains (name, source, destination, base_price, discount_percentage)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING *
                    "#,
                )
                .bind(train.name)
                .bind(train.source)
                .bind(train.destination)
                .bind(train.base_price)
                .bind(train.discount_percentage)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        // Semántica fire-and-forget: 0 filas afectadas no es un error
        sqlx::query("DELETE FROM trains WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
