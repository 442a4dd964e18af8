pub mod train_routes;
