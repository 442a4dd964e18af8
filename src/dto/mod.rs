//! DTOs de la API
//!
//! Requests y responses serializables que viajan por HTTP.

pub mod train_dto;
