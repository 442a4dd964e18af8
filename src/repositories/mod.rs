//! Repositorios de acceso a datos

pub mod train_repository;

pub use train_repository::{PgTrainRepository, TrainStore};
