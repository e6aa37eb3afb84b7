/*
 * Responsibility
 * - products テーブル向け SQLx 操作 (ProductStore の Postgres 実装)
 * - PgPool を受け取り find_all / find_by_id / insert を提供
 * - DB エラーは RepoError に変換して返す
 *
 * Schema:
 *   CREATE TABLE products (
 *       id          UUID PRIMARY KEY,
 *       name        TEXT NOT NULL,
 *       description TEXT,
 *       price       DOUBLE PRECISION NOT NULL
 *   );
 */
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::store::{Product, ProductStore};

#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgProductStore {
    db: PgPool,
}

impl PgProductStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let db = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(db))
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, RepoError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepoError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, product: Product) -> Result<Product, RepoError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (id, name, description, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(&self.db)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row.into())
    }
}
