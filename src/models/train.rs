//! Modelo de Train
//!
//! Mapea exactamente a la tabla `trains` de PostgreSQL.

use serde::{Deserialize, Serialize};

/// Un tren ofertado: identidad, extremos del trayecto y tarifa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Train {
    /// `None` hasta que el store asigna el id (BIGSERIAL); inmutable después
    pub id: Option<i64>,
    pub name: String,
    pub source: String,
    pub destination: String,
    pub base_price: f64,
    pub discount_percentage: f64,
}

impl Train {
    pub fn new(
        name: String,
        source: String,
        destination: String,
        base_price: f64,
        discount_percentage: f64,
    ) -> Self {
        Self {
            id: None,
            name,
            source,
            destination,
            base_price,
            discount_percentage,
        }
    }
}
