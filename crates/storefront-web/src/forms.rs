//! Form and query inputs of the web pages.

use serde::{Deserialize, Serialize};
use storefront_core::models::{CreateProductRequest, Numeric};

use crate::errors::FormError;

/// Category preselected on an empty add-item form.
pub const DEFAULT_FORM_CATEGORY: &str = "electronics";

/// Categories offered by the add-item form.
pub const FORM_CATEGORIES: [&str; 4] = ["electronics", "accessories", "clothing", "other"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Add-item form as submitted: every field is raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub image: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            long_description: String::new(),
            price: String::new(),
            category: DEFAULT_FORM_CATEGORY.to_string(),
            stock: String::new(),
            image: String::new(),
        }
    }
}

impl ItemForm {
    /// Check required fields and parse the numbers into a create request.
    pub fn validate(&self) -> Result<CreateProductRequest, FormError> {
        if self.name.is_empty()
            || self.description.is_empty()
            || self.price.is_empty()
            || self.stock.is_empty()
        {
            return Err(FormError::MissingFields);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite() && *p >= 0.0)
            .ok_or(FormError::InvalidPrice)?;
        let stock: u32 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidStock)?;

        Ok(CreateProductRequest {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            long_description: non_empty(&self.long_description),
            price: Some(Numeric::Number(price)),
            category: non_empty(&self.category),
            stock: Some(Numeric::from(stock)),
            image: non_empty(&self.image),
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// `?quantity=` on the detail page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuantityQuery {
    pub quantity: Option<i64>,
}

/// Clamp a requested quantity into `[1, stock]`. `None` when out of stock,
/// since there is nothing to select.
pub fn clamp_quantity(requested: Option<i64>, stock: u32) -> Option<u32> {
    if stock == 0 {
        return None;
    }
    let clamped = requested.unwrap_or(1).clamp(1, i64::from(stock));
    u32::try_from(clamped).ok()
}
