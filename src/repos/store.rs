/*
 * Responsibility
 * - Product モデルと、永続化層への thin interface (ProductStore)
 * - 呼び出し側は Arc<dyn ProductStore> 経由でアクセスする (Pg / InMemory を差し替え可能)
 */
use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Passthrough to the persistence collaborator.
///
/// No caching, no transactions, no retries. One call per request.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepoError>;
    async fn insert(&self, product: Product) -> Result<Product, RepoError>;
}
