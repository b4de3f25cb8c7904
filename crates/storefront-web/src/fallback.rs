//! Placeholder records shown when the catalog service cannot be reached, so
//! the list and detail pages stay populated.

use std::collections::BTreeMap;

use storefront_core::models::Product;

fn placeholder(
    id: u64,
    name: &str,
    description: &str,
    price: f64,
    image_text: &str,
    category: &str,
    stock: u32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        long_description: String::new(),
        price,
        category: category.to_string(),
        stock,
        image: format!("https://via.placeholder.com/300x200?text={image_text}"),
        specs: BTreeMap::new(),
    }
}

/// The list page's stand-in catalog.
pub fn placeholder_items() -> Vec<Product> {
    vec![
        placeholder(1, "Laptop", "High-performance laptop for professionals", 999.99, "Laptop", "electronics", 5),
        placeholder(2, "Wireless Mouse", "Ergonomic wireless mouse with long battery life", 29.99, "Mouse", "electronics", 15),
        placeholder(3, "USB-C Cable", "Durable fast-charging USB-C cable", 14.99, "USB+Cable", "accessories", 50),
        placeholder(4, "Mechanical Keyboard", "RGB mechanical keyboard with custom switches", 159.99, "Keyboard", "electronics", 8),
        placeholder(5, "Monitor Stand", "Adjustable monitor stand for better ergonomics", 49.99, "Monitor+Stand", "accessories", 12),
        placeholder(6, "Webcam", "4K webcam for streaming and video calls", 79.99, "Webcam", "electronics", 7),
    ]
}

/// The detail page's stand-in record. Only ids 1 and 2 are known; anything
/// else gets record 1.
pub fn placeholder_item(id: u64) -> Product {
    let specs = |pairs: &[(&str, &str)]| -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    };

    match id {
        2 => Product {
            long_description: "Comfortable ergonomic design reduces wrist strain. Features advanced optical tracking and can connect to up to 3 devices simultaneously.".to_string(),
            image: "https://via.placeholder.com/500x400?text=Mouse".to_string(),
            specs: specs(&[
                ("type", "Optical"),
                ("connectivity", "Wireless 2.4GHz"),
                ("battery", "18 months"),
                ("dpi", "Adjustable 800-3200"),
            ]),
            ..placeholder(2, "Wireless Mouse", "Ergonomic wireless mouse with long battery life", 29.99, "Mouse", "electronics", 15)
        },
        _ => Product {
            long_description: "This premium laptop is equipped with the latest processors and high-resolution display, perfect for professional work, gaming, and content creation.".to_string(),
            image: "https://via.placeholder.com/500x400?text=Laptop".to_string(),
            specs: specs(&[
                ("processor", "Intel Core i7"),
                ("ram", "16GB"),
                ("storage", "512GB SSD"),
                ("display", "15.6 inch 4K"),
            ]),
            ..placeholder(1, "Laptop", "High-performance laptop for professionals", 999.99, "Laptop", "electronics", 5)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_placeholder_has_six_records() {
        let items = placeholder_items();
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|p| p.image.starts_with("https://via.placeholder.com/")));
    }

    #[test]
    fn unknown_detail_id_falls_back_to_laptop() {
        assert_eq!(placeholder_item(2).name, "Wireless Mouse");
        assert_eq!(placeholder_item(1).name, "Laptop");
        assert_eq!(placeholder_item(42).name, "Laptop");
        assert_eq!(placeholder_item(42).id, 1);
        assert_eq!(placeholder_item(1).specs.len(), 4);
    }
}
