/*
 * Responsibility
 * - Products v1 の response DTO
 * - v1 は全フィールドを返す (description を含む)
 */
use serde::Serialize;
use uuid::Uuid;

use crate::repos::store::Product;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
        }
    }
}
