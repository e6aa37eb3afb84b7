/*
 * Responsibility
 * - ProductStore の in-memory 実装
 * - DATABASE_URL 未設定時のデモ用、およびテストの test double
 */
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::store::{Product, ProductStore};

#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo store with a few products, used when no database is configured.
    pub fn seeded() -> Self {
        let demo = [
            ("Widget", Some("A standard widget."), 9.99),
            ("Gadget", Some("A premium gadget."), 24.50),
            ("Gizmo", None, 3.25),
        ];

        let mut map = HashMap::new();
        for (name, description, price) in demo {
            let product = Product {
                id: Uuid::new_v4(),
                name: name.to_string(),
                description: description.map(str::to_string),
                price,
            };
            map.insert(product.id, product);
        }

        Self {
            products: RwLock::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, RepoError> {
        let guard = self.products.read().await;
        let mut products: Vec<Product> = guard.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepoError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn insert(&self, product: Product) -> Result<Product, RepoError> {
        let mut guard = self.products.write().await;
        if guard.contains_key(&product.id) {
            return Err(RepoError::Duplicate);
        }
        guard.insert(product.id, product.clone());
        Ok(product)
    }
}
