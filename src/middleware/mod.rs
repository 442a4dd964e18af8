//! Middleware HTTP de la aplicación

pub mod cors;
