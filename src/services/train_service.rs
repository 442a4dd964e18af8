//! Servicio de trenes
//!
//! Capa de orquestación fina sobre el `TrainStore`. Delega todas las
//! operaciones al store y añade un único comportamiento propio: actualizar
//! exige que el registro exista, si no existe la operación falla con NotFound.

use crate::models::Train;
use crate::repositories::TrainStore;
use crate::utils::errors::{not_found_error, AppResult};

pub struct TrainService<S: TrainStore> {
    store: S,
}

impl<S: TrainStore> TrainService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Todos los trenes, tal cual los reporta el store
    pub async fn get_all_trains(&self) -> AppResult<Vec<Train>> {
        self.store.find_all().await
    }

    /// El tren con ese id; `None` se propaga sin convertirse en error
    pub async fn get_train_by_id(&self, id: i64) -> AppResult<Option<Train>> {
        self.store.find_by_id(id).await
    }

    /// Persiste un tren nuevo; el store asigna el id
    pub async fn create_train(&self, train: Train) -> AppResult<Train> {
        self.store.save(train).await
    }

    /// Sobreescribe los campos mutables del tren existente con los del payload.
    /// El id almacenado nunca se sobreescribe con el del payload.
    pub async fn update_train(&self, id: i64, updated_train: Train) -> AppResult<Train> {
        let mut existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Train", id))?;

        existing.name = updated_train.name;
        existing.source = updated_train.source;
        existing.destination = updated_train.destination;
        existing.base_price = updated_train.base_price;
        existing.discount_percentage = updated_train.discount_percentage;

        self.store.save(existing).await
    }

    /// Elimina sin comprobar existencia; borrar un id ausente no es error
    pub async fn delete_train(&self, id: i64) -> AppResult<()> {
        self.store.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Store en memoria que registra cuántas veces se invoca cada operación
    struct InMemoryTrainStore {
        trains: Mutex<Vec<Train>>,
        next_id: AtomicUsize,
        find_all_calls: AtomicUsize,
        find_by_id_calls: AtomicUsize,
        save_calls: AtomicUsize,
        delete_by_id_calls: AtomicUsize,
        last_deleted_id: Mutex<Option<i64>>,
    }

    impl InMemoryTrainStore {
        fn new(seed: Vec<Train>) -> Self {
            let next_id = seed
                .iter()
                .filter_map(|t| t.id)
                .max()
                .unwrap_or(0) as usize
                + 1;
            Self {
                trains: Mutex::new(seed),
                next_id: AtomicUsize::new(next_id),
                find_all_calls: AtomicUsize::new(0),
                find_by_id_calls: AtomicUsize::new(0),
                save_calls: AtomicUsize::new(0),
                delete_by_id_calls: AtomicUsize::new(0),
                last_deleted_id: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TrainStore for InMemoryTrainStore {
        async fn find_all(&self) -> Result<Vec<Train>, AppError> {
            self.find_all_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.trains.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Train>, AppError> {
            self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
            let trains = self.trains.lock().unwrap();
            Ok(trains.iter().find(|t| t.id == Some(id)).cloned())
        }

        async fn save(&self, mut train: Train) -> Result<Train, AppError> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            let mut trains = self.trains.lock().unwrap();
            match train.id {
                Some(id) => {
                    if let Some(existing) = trains.iter_mut().find(|t| t.id == Some(id)) {
                        *existing = train.clone();
                    } else {
                        trains.push(train.clone());
                    }
                }
                None => {
                    train.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) as i64);
                    trains.push(train.clone());
                }
            }
            Ok(train)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
            self.delete_by_id_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_deleted_id.lock().unwrap() = Some(id);
            self.trains.lock().unwrap().retain(|t| t.id != Some(id));
            Ok(())
        }
    }

    fn express_train() -> Train {
        Train {
            id: Some(1),
            name: "Express".to_string(),
            source: "Station A".to_string(),
            destination: "Station B".to_string(),
            base_price: 100.0,
            discount_percentage: 10.0,
        }
    }

    #[tokio::test]
    async fn get_all_trains_returns_stored_trains() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![express_train()]));

        let result = service.get_all_trains().await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Express");
        assert_eq!(service.store.find_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_train_by_id_returns_train_when_it_exists() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![express_train()]));

        let result = service.get_train_by_id(1).await.unwrap();

        let train = result.expect("train should be present");
        assert_eq!(train.name, "Express");
        assert_eq!(train.source, "Station A");
        assert_eq!(service.store.find_by_id_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_train_by_id_returns_none_when_absent() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![]));

        let result = service.get_train_by_id(1).await.unwrap();

        assert!(result.is_none());
        assert_eq!(service.store.find_by_id_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_train_saves_and_returns_train() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![]));
        let train = Train::new(
            "Express".to_string(),
            "Station A".to_string(),
            "Station B".to_string(),
            100.0,
            10.0,
        );

        let result = service.create_train(train).await.unwrap();

        assert_eq!(result.name, "Express");
        assert_eq!(result.base_price, 100.0);
        assert!(result.id.is_some(), "store must assign an id on creation");
        assert_eq!(service.store.save_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_train_overwrites_fields_and_keeps_id() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![express_train()]));
        let payload = Train::new(
            "Local".to_string(),
            "Station X".to_string(),
            "Station Z".to_string(),
            120.0,
            15.0,
        );

        let result = service.update_train(1, payload).await.unwrap();

        assert_eq!(result.id, Some(1));
        assert_eq!(result.name, "Local");
        assert_eq!(result.source, "Station X");
        assert_eq!(result.destination, "Station Z");
        assert_eq!(result.base_price, 120.0);
        assert_eq!(result.discount_percentage, 15.0);
        assert_eq!(service.store.find_by_id_calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.store.save_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_train_ignores_id_in_payload() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![express_train()]));
        let mut payload = express_train();
        payload.id = Some(99);
        payload.name = "Local".to_string();

        let result = service.update_train(1, payload).await.unwrap();

        assert_eq!(result.id, Some(1));
        assert_eq!(result.name, "Local");
    }

    #[tokio::test]
    async fn update_train_fails_with_not_found_when_absent() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![]));

        let result = service.update_train(1, express_train()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(service.store.find_by_id_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            service.store.save_calls.load(Ordering::SeqCst),
            0,
            "save must never run when the train does not exist"
        );
    }

    #[tokio::test]
    async fn delete_train_delegates_to_store() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![express_train()]));

        service.delete_train(1).await.unwrap();

        assert_eq!(service.store.delete_by_id_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*service.store.last_deleted_id.lock().unwrap(), Some(1));
    }

    #[tokio::test]
    async fn delete_train_is_a_no_op_when_absent() {
        let service = TrainService::new(InMemoryTrainStore::new(vec![]));

        let result = service.delete_train(42).await;

        assert!(result.is_ok());
        assert_eq!(service.store.delete_by_id_calls.load(Ordering::SeqCst), 1);
    }
}
