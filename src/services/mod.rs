//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.

pub mod train_service;

pub use train_service::TrainService;
