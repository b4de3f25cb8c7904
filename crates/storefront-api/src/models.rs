//! Validated write models
//!
//! Request bodies arrive as [`CreateProductRequest`]; these types are what
//! survives validation and coercion.

use std::collections::BTreeMap;

use storefront_core::models::{
    CreateProductRequest, Numeric, Product, UpdateProductRequest, DEFAULT_CATEGORY, PLACEHOLDER_IMAGE,
};

use crate::errors::ValidationError;

/// A record that passed create validation and only lacks an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub image: String,
}

impl NewProduct {
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            long_description: self.long_description,
            price: self.price,
            category: self.category,
            stock: self.stock,
            image: self.image,
            specs: BTreeMap::new(),
        }
    }
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ValidationError;

    fn try_from(req: CreateProductRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(description), Some(price), Some(stock)) = (
            non_empty(req.name),
            non_empty(req.description),
            req.price,
            req.stock,
        ) else {
            return Err(ValidationError::MissingFields);
        };

        Ok(Self {
            name,
            description,
            long_description: non_empty(req.long_description).unwrap_or_default(),
            price: coerce_price(&price)?,
            category: non_empty(req.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            stock: coerce_stock(&stock)?,
            image: non_empty(req.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        })
    }
}

/// The fields an update will overwrite. `None` leaves the field as is.
///
/// Text fields count as absent when empty, so an update can never clear
/// one to `""`. Numeric fields count as present whenever they are sent,
/// including `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub image: Option<String>,
}

impl ProductPatch {
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(long_description) = self.long_description {
            product.long_description = long_description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
    }
}

impl TryFrom<UpdateProductRequest> for ProductPatch {
    type Error = ValidationError;

    fn try_from(req: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: non_empty(req.name),
            description: non_empty(req.description),
            long_description: non_empty(req.long_description),
            price: req.price.as_ref().map(coerce_price).transpose()?,
            category: non_empty(req.category),
            stock: req.stock.as_ref().map(coerce_stock).transpose()?,
            image: non_empty(req.image),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn coerce_price(value: &Numeric) -> Result<f64, ValidationError> {
    let price = value.as_f64().ok_or(ValidationError::NotANumber("price"))?;
    if price < 0.0 {
        return Err(ValidationError::Negative("price"));
    }
    Ok(price)
}

fn coerce_stock(value: &Numeric) -> Result<u32, ValidationError> {
    let stock = value.as_count().ok_or(ValidationError::NotANumber("stock"))?;
    if stock < 0 {
        return Err(ValidationError::Negative("stock"));
    }
    u32::try_from(stock).map_err(|_| ValidationError::NotANumber("stock"))
}
