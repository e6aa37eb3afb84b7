/*
 * Responsibility
 * - Products v2 の request/response DTO
 * - v2 の projection は slim (description を返さない)
 * - create の required-field validation は message collection で返す
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::store::Product;

/// Candidate product. Fields are optional at the serde level so that a
/// missing field becomes a validation message, not a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug)]
pub struct ValidCreateProduct {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<ValidCreateProduct, Vec<String>> {
        let mut messages = Vec::new();

        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => {
                messages.push("name is required".to_string());
                None
            }
        };

        let price = match self.price {
            Some(price) if price.is_finite() && price >= 0.0 => Some(price),
            Some(_) => {
                messages.push("price must be a non-negative number".to_string());
                None
            }
            None => {
                messages.push("price is required".to_string());
                None
            }
        };

        if let Some(id) = self.id
            && id.is_nil()
        {
            messages.push("id must be a non-nil UUID".to_string());
        }

        match (name, price) {
            (Some(name), Some(price)) if messages.is_empty() => Ok(ValidCreateProduct {
                id: self.id,
                name,
                description: self.description,
                price,
            }),
            _ => Err(messages),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_and_price_collects_both_messages() {
        let req = CreateProductRequest {
            id: None,
            name: None,
            description: None,
            price: None,
        };
        let messages = req.validate().unwrap_err();
        assert_eq!(
            messages,
            vec!["name is required".to_string(), "price is required".to_string()]
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let req = CreateProductRequest {
            id: None,
            name: Some("   ".to_string()),
            description: None,
            price: Some(1.0),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let req = CreateProductRequest {
            id: None,
            name: Some("Widget".to_string()),
            description: None,
            price: Some(-1.0),
        };
        let messages = req.validate().unwrap_err();
        assert_eq!(messages, vec!["price must be a non-negative number".to_string()]);
    }

    #[test]
    fn nil_id_is_rejected() {
        let req = CreateProductRequest {
            id: Some(Uuid::nil()),
            name: Some("Widget".to_string()),
            description: None,
            price: Some(1.0),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn valid_request_passes_through() {
        let id = Uuid::new_v4();
        let req = CreateProductRequest {
            id: Some(id),
            name: Some("Widget".to_string()),
            description: Some("A standard widget.".to_string()),
            price: Some(9.99),
        };
        let valid = req.validate().unwrap();
        assert_eq!(valid.id, Some(id));
        assert_eq!(valid.name, "Widget");
        assert_eq!(valid.price, 9.99);
    }
}
