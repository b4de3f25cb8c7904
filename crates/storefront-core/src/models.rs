//! Domain models
//!
//! The catalog record shared by the service, the web client and the wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Image used when a record is created without one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Product";

/// Category assigned when a record is created without one.
pub const DEFAULT_CATEGORY: &str = "other";

/// Product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    pub price: f64,
    #[serde(default = "default_category")]
    pub category: String,
    pub stock: u32,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Price rendered with two decimals, e.g. `999.99`.
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Create product request
///
/// Everything is optional at the wire level so the service can report
/// missing fields itself instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Update product request. Same shape as create; only present fields apply.
pub type UpdateProductRequest = CreateProductRequest;

/// A numeric field as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Parse as a decimal. Leading/trailing whitespace is ignored.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Numeric::Number(n) => *n,
            Numeric::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Parse as a whole count, truncating any fractional part.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            Numeric::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            Numeric::Number(_) => None,
            Numeric::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            }
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Number(f64::from(value))
    }
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedProduct {
    pub message: String,
    pub item: Product,
}

/// Body returned by `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

/// The records the catalog service boots with.
pub fn seed_products() -> Vec<Product> {
    vec![
        seed(
            1,
            "Laptop",
            "High-performance laptop for professionals",
            "This premium laptop is equipped with the latest processors and high-resolution display, perfect for professional work, gaming, and content creation.",
            999.99,
            "https://png.pngtree.com/png-vector/20250522/ourmid/pngtree-modern-laptop-computer-with-screen-open-technology-digital-device-png-image_16345445.png",
            "electronics",
            5,
            &[
                ("processor", "Intel Core i7"),
                ("ram", "16GB"),
                ("storage", "512GB SSD"),
                ("display", "15.6 inch 4K"),
            ],
        ),
        seed(
            2,
            "Wireless Mouse",
            "Ergonomic wireless mouse with long battery life",
            "Comfortable ergonomic design reduces wrist strain. Features advanced optical tracking and can connect to up to 3 devices simultaneously.",
            29.99,
            "https://t3.ftcdn.net/jpg/06/11/67/78/360_F_611677850_HguXRoZYQWu7ekpl1MWxMTiSY4kKTmPT.jpg",
            "electronics",
            15,
            &[
                ("type", "Optical"),
                ("connectivity", "Wireless 2.4GHz"),
                ("battery", "18 months"),
                ("dpi", "Adjustable 800-3200"),
            ],
        ),
        seed(
            3,
            "USB-C Cable",
            "Durable fast-charging USB-C cable",
            "High-quality USB-C cable supports fast charging and data transfer. Compatible with most modern devices.",
            14.99,
            "https://static.vecteezy.com/system/resources/thumbnails/072/443/075/small/high-quality-durable-usb-to-usb-c-charging-cable-for-all-your-devices-photo.jpg",
            "accessories",
            50,
            &[("length", "6 feet"), ("speed", "USB 3.0"), ("charging", "60W")],
        ),
        seed(
            4,
            "Mechanical Keyboard",
            "RGB mechanical keyboard with custom switches",
            "Professional-grade mechanical keyboard with customizable RGB backlighting. Features custom mechanical switches for optimal typing experience.",
            159.99,
            "https://images.indianexpress.com/2021/06/Corsair-Mechanical-Keyboard.jpg",
            "electronics",
            8,
            &[
                ("switches", "Custom Cherry MX"),
                ("layout", "Full Size"),
                ("lighting", "RGB Backlighting"),
                ("connection", "Wired USB"),
            ],
        ),
        seed(
            5,
            "Monitor Stand",
            "Adjustable monitor stand for better ergonomics",
            "Heavy-duty monitor stand with height and angle adjustment. Improves posture and viewing angle.",
            49.99,
            "https://image.springbeetle.com/cdn-cgi/image/dpr=1,format=webp/https://staticprod.site.flexispot.com/dev/trantor/attachments/800_F7.jpg",
            "accessories",
            12,
            &[
                ("weight_capacity", "25kg"),
                ("adjustable_height", "0-10 inches"),
                ("materials", "Aluminum"),
            ],
        ),
        seed(
            6,
            "Webcam",
            "4K webcam for streaming and video calls",
            "Professional 4K webcam with wide-angle lens and built-in microphone. Perfect for content creators and remote professionals.",
            79.99,
            "https://media.istockphoto.com/id/674322530/photo/webcam-3d-rendering-isolated-on-white-background.jpg?s=612x612&w=0&k=20&c=FuIl2RKv385PSVynrDEgonl9ZCNj5Llibs77uYk9KPI=",
            "electronics",
            7,
            &[
                ("resolution", "4K 2160p"),
                ("fps", "30fps"),
                ("field_of_view", "90 degrees"),
                ("microphone", "Built-in"),
            ],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u64,
    name: &str,
    description: &str,
    long_description: &str,
    price: f64,
    image: &str,
    category: &str,
    stock: u32,
    specs: &[(&str, &str)],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        long_description: long_description.to_string(),
        price,
        category: category.to_string(),
        stock,
        image: image.to_string(),
        specs: specs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}
