use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, watch};

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

use super::model::Cart;
use super::repository::DurableStore;
use super::snapshot;

/// Storage key used when none is configured.
pub const DEFAULT_CART_KEY: &str = "@storefront:cart";

/// Exclusive guard over the cart, held for the whole duration of a mutation.
pub type CartGuard<'a> = MutexGuard<'a, Cart>;

/// Owner of the in-memory cart and its durable copy.
///
/// Built once by the composition root and shared by reference. Every mutating
/// use case takes the guard before its lookups and keeps it until it commits,
/// so operations on one store never interleave.
pub struct CartStore {
    cart: Mutex<Cart>,
    changes: watch::Sender<Cart>,
    storage: Arc<dyn DurableStore>,
    key: String,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Restores the cart persisted under `key`.
    ///
    /// A missing value starts an empty cart. So does a value that cannot be
    /// decoded; only a failing storage read is reported.
    pub async fn load(
        storage: Arc<dyn DurableStore>,
        key: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, RepositoryError> {
        let key = key.into();
        let cart = match storage.get(&key).await? {
            None => {
                logger.debug(&format!("No stored cart under {}, starting empty", key));
                Cart::empty()
            }
            Some(bytes) => match snapshot::decode(&bytes) {
                Ok(cart) => {
                    logger.info(&format!("Restored cart with {} products", cart.len()));
                    cart
                }
                Err(err) => {
                    logger.warn(&format!(
                        "Discarding unreadable cart stored under {}: {}",
                        key, err
                    ));
                    Cart::empty()
                }
            },
        };

        Ok(Self::with_cart(cart, storage, key, logger))
    }

    /// Constructor for a cart that is already in memory (no storage read).
    pub fn with_cart(
        cart: Cart,
        storage: Arc<dyn DurableStore>,
        key: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (changes, _) = watch::channel(cart.clone());
        Self {
            cart: Mutex::new(cart),
            changes,
            storage,
            key: key.into(),
            logger,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read-only copy of the current cart.
    pub async fn snapshot(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Receiver that observes every committed cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.changes.subscribe()
    }

    pub async fn lock(&self) -> CartGuard<'_> {
        self.cart.lock().await
    }

    /// Persists `next` and, once the write succeeded, makes it the current cart.
    pub async fn commit(&self, guard: &mut CartGuard<'_>, next: Cart) -> Result<(), RepositoryError> {
        let bytes = snapshot::encode(&next)?;
        self.storage.set(&self.key, bytes).await.inspect_err(|err| {
            self.logger
                .error(&format!("Failed to persist cart under {}: {}", self.key, err));
        })?;

        **guard = next;
        self.changes.send_replace((**guard).clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Product, ProductDetails, ProductId};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Storage {}

        #[async_trait]
        impl DurableStore for Storage {
            async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RepositoryError>;
            async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn one_shoe() -> Cart {
        Cart::from_products(vec![Product {
            id: ProductId::new(1),
            amount: 1,
            details: ProductDetails::named("Shoe"),
        }])
        .unwrap()
    }

    #[tokio::test]
    async fn should_start_empty_when_nothing_stored() {
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .with(eq(DEFAULT_CART_KEY))
            .returning(|_| Ok(None));

        let store = CartStore::load(Arc::new(storage), DEFAULT_CART_KEY, mock_logger())
            .await
            .unwrap();

        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn should_restore_stored_cart() {
        let bytes = snapshot::encode(&one_shoe()).unwrap();
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .returning(move |_| Ok(Some(bytes.clone())));

        let store = CartStore::load(Arc::new(storage), DEFAULT_CART_KEY, mock_logger())
            .await
            .unwrap();

        assert_eq!(store.snapshot().await, one_shoe());
    }

    #[tokio::test]
    async fn should_start_empty_and_warn_when_stored_cart_is_malformed() {
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .returning(|_| Ok(Some(b"[{\"id\":".to_vec())));
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());

        let store = CartStore::load(Arc::new(storage), DEFAULT_CART_KEY, Arc::new(logger))
            .await
            .unwrap();

        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_storage_read_failure() {
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = CartStore::load(Arc::new(storage), DEFAULT_CART_KEY, mock_logger()).await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }

    #[tokio::test]
    async fn should_persist_before_publishing() {
        let expected = snapshot::encode(&one_shoe()).unwrap();
        let mut storage = MockStorage::new();
        storage
            .expect_set()
            .with(eq(DEFAULT_CART_KEY), eq(expected))
            .times(1)
            .returning(|_, _| Ok(()));
        let store = CartStore::with_cart(
            Cart::empty(),
            Arc::new(storage),
            DEFAULT_CART_KEY,
            mock_logger(),
        );
        let mut changes = store.subscribe();

        let mut guard = store.lock().await;
        store.commit(&mut guard, one_shoe()).await.unwrap();
        drop(guard);

        assert_eq!(store.snapshot().await, one_shoe());
        assert!(changes.has_changed().unwrap());
        assert_eq!(*changes.borrow_and_update(), one_shoe());
    }

    #[tokio::test]
    async fn should_keep_previous_cart_when_persist_fails() {
        let mut storage = MockStorage::new();
        storage
            .expect_set()
            .returning(|_, _| Err(RepositoryError::Persistence));
        let store = CartStore::with_cart(
            Cart::empty(),
            Arc::new(storage),
            DEFAULT_CART_KEY,
            mock_logger(),
        );
        let changes = store.subscribe();

        let mut guard = store.lock().await;
        let result = store.commit(&mut guard, one_shoe()).await;
        drop(guard);

        assert!(matches!(result, Err(RepositoryError::Persistence)));
        assert!(store.snapshot().await.is_empty());
        assert!(!changes.has_changed().unwrap());
    }

    #[derive(Default)]
    struct MemoryStorage {
        values: std::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl DurableStore for MemoryStorage {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RepositoryError> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), RepositoryError> {
            self.values.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_reload_exactly_the_committed_cart() {
        let storage = Arc::new(MemoryStorage::default());
        let store = CartStore::load(storage.clone(), DEFAULT_CART_KEY, mock_logger())
            .await
            .unwrap();

        let mut next = one_shoe().with_amount(ProductId::new(1), 4);
        next = next.with_product(Product {
            id: ProductId::new(9),
            amount: 1,
            details: ProductDetails {
                name: "Sock".to_string(),
                price: Some(12.5),
                ..ProductDetails::default()
            },
        });
        let mut guard = store.lock().await;
        store.commit(&mut guard, next.clone()).await.unwrap();
        drop(guard);

        let reloaded = CartStore::load(storage, DEFAULT_CART_KEY, mock_logger())
            .await
            .unwrap();

        assert_eq!(reloaded.snapshot().await, next);
    }
}
