use super::aggregate::{Product, ProductId, DEFAULT_PRODUCT_IMAGE};
use crate::domain::common::{next_id, RecordStatus};
use crate::shared::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw inventory form input. Price and stock arrive as text from inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub status: RecordStatus,
}

impl ProductForm {
    /// Prefill the form from an existing product for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            status: product.status,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        Ok(())
    }

    /// Unparsable or negative input becomes 0
    pub fn parsed_price(&self) -> f64 {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .unwrap_or(0.0)
    }

    /// Leading whole number of the input, so "1.5" and "12 pcs" give 1 and 12.
    /// Unparsable or negative input becomes 0; huge values saturate.
    pub fn parsed_stock(&self) -> u32 {
        let text = self.stock.trim();
        let digits = text.strip_prefix('+').unwrap_or(text);
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        match &digits[..end] {
            "" => 0,
            whole => whole.parse::<u32>().unwrap_or(u32::MAX),
        }
    }

    /// Build the full collection with a new product appended
    pub fn create(&self, products: &[Product]) -> Result<(Vec<Product>, Product), ValidationError> {
        self.validate()?;
        let product = Product {
            id: next_id(products),
            name: self.name.trim().to_string(),
            category: self.category.clone(),
            price: self.parsed_price(),
            stock: self.parsed_stock(),
            status: self.status,
            image: DEFAULT_PRODUCT_IMAGE.to_string(),
            sales: 0,
        };
        let mut updated = products.to_vec();
        updated.push(product.clone());
        Ok((updated, product))
    }

    /// Build the full collection with one product edited in place.
    /// Id, image and sales count are preserved.
    pub fn apply(&self, products: &[Product], id: ProductId) -> Result<Vec<Product>, ValidationError> {
        self.validate()?;
        if !products.iter().any(|p| p.id == id) {
            return Err(ValidationError::NotFound { id: id.to_string() });
        }
        Ok(products
            .iter()
            .map(|p| {
                if p.id == id {
                    Product {
                        name: self.name.trim().to_string(),
                        category: self.category.clone(),
                        price: self.parsed_price(),
                        stock: self.parsed_stock(),
                        status: self.status,
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect())
    }
}

/// Full collection without the given product
pub fn without_product(products: &[Product], id: ProductId) -> Vec<Product> {
    products.iter().filter(|p| p.id != id).cloned().collect()
}
