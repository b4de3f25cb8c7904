//! Page server tests against an in-process fake catalog.

use std::sync::{Arc, Mutex};

use actix_web::body::MessageBody;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::dev::ServiceResponse;
use actix_web::http::{header, StatusCode};
use actix_web::test::{self, TestRequest};
use async_trait::async_trait;
use storefront_core::auth::StaticCredentials;
use storefront_core::models::{seed_products, CreateProductRequest, Product};
use storefront_core::session::{SessionMarker, COOKIE_NAME, COOKIE_VALUE};
use storefront_web::client::CatalogApi;
use storefront_web::create_app;
use storefront_web::errors::ClientError;
use storefront_web::state::AppState;

struct FakeCatalog {
    items: Mutex<Vec<Product>>,
    offline: bool,
    /// Whether each create call carried a session marker.
    create_sessions: Mutex<Vec<bool>>,
}

impl FakeCatalog {
    fn seeded() -> Self {
        Self {
            items: Mutex::new(seed_products()),
            offline: false,
            create_sessions: Mutex::new(Vec::new()),
        }
    }

    fn offline() -> Self {
        Self {
            offline: true,
            ..Self::seeded()
        }
    }
}

fn unreachable() -> ClientError {
    ClientError::Status {
        status: 503,
        message: "Service Unavailable".into(),
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_items(&self) -> Result<Vec<Product>, ClientError> {
        if self.offline {
            return Err(unreachable());
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn get_item(&self, id: u64) -> Result<Product, ClientError> {
        if self.offline {
            return Err(unreachable());
        }
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ClientError::NotFound)
    }

    async fn create_item(
        &self,
        item: &CreateProductRequest,
        session: Option<SessionMarker>,
    ) -> Result<Product, ClientError> {
        self.create_sessions.lock().unwrap().push(session.is_some());
        if self.offline {
            return Err(unreachable());
        }
        let mut items = self.items.lock().unwrap();
        let product = Product {
            id: items.len() as u64 + 1,
            name: item.name.clone().unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
            long_description: String::new(),
            price: item.price.as_ref().and_then(|p| p.as_f64()).unwrap_or_default(),
            category: item.category.clone().unwrap_or_default(),
            stock: 0,
            image: String::new(),
            specs: Default::default(),
        };
        items.push(product.clone());
        Ok(product)
    }
}

fn state(catalog: Arc<FakeCatalog>) -> AppState {
    AppState::new(
        catalog,
        Arc::new(StaticCredentials::new("user@example.com", "password123")),
    )
}

fn session_cookie() -> Cookie<'static> {
    Cookie::new(COOKIE_NAME, COOKIE_VALUE)
}

async fn body_text<B: MessageBody>(res: ServiceResponse<B>) -> String {
    let bytes = test::read_body(res).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================
// Catalog pages
// ============================================================

#[actix_web::test]
async fn list_applies_query_filters() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;
    let req = TestRequest::get()
        .uri("/items?category=accessories&sort=price-high")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let html = body_text(res).await;
    assert!(html.contains("<strong>2</strong> product(s) found"));
    let stand = html.find("Monitor Stand").unwrap();
    let cable = html.find("USB-C Cable").unwrap();
    assert!(stand < cable);
    assert!(!html.contains("Mechanical Keyboard"));
}

#[actix_web::test]
async fn list_search_without_match_says_so() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;
    let req = TestRequest::get().uri("/items?search=toaster").to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("No items found matching your criteria."));
}

#[actix_web::test]
async fn list_falls_back_to_placeholders_when_offline() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::offline())))).await;
    let res = test::call_service(&app, TestRequest::get().uri("/items").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let html = body_text(res).await;
    assert!(html.contains("Failed to load items. Please try again."));
    assert!(html.contains("<strong>6</strong> product(s) found"));
    assert!(html.contains("via.placeholder.com/300x200?text=Laptop"));
}

#[actix_web::test]
async fn detail_clamps_quantity() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;

    let req = TestRequest::get().uri("/items/1?quantity=99").to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains(r#"<span id="quantity">5</span>"#));

    let req = TestRequest::get().uri("/items/1?quantity=0").to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains(r#"<span id="quantity">1</span>"#));
}

#[actix_web::test]
async fn detail_unknown_id_falls_back_to_mock() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;

    let req = TestRequest::get().uri("/items/42").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("Failed to load item details"));
    assert!(html.contains("Laptop"));
    assert!(html.contains("Intel Core i7"));
    assert!(!html.contains("Item Not Found"));
}

#[actix_web::test]
async fn detail_known_mock_id_survives_not_found() {
    let catalog = FakeCatalog::seeded();
    catalog.items.lock().unwrap().retain(|p| p.id != 2);
    let app = test::init_service(create_app(state(Arc::new(catalog)))).await;

    let req = TestRequest::get().uri("/items/2").to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("Failed to load item details"));
    assert!(html.contains("Wireless 2.4GHz"));
}

#[actix_web::test]
async fn detail_non_numeric_id_is_not_found_page() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;
    let req = TestRequest::get().uri("/items/abc").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_text(res).await.contains("Item Not Found"));
}

#[actix_web::test]
async fn detail_falls_back_to_mock_when_offline() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::offline())))).await;
    let req = TestRequest::get().uri("/items/2").to_request();
    let html = body_text(test::call_service(&app, req).await).await;
    assert!(html.contains("Failed to load item details"));
    assert!(html.contains("Wireless Mouse"));
    assert!(html.contains("Wireless 2.4GHz"));
}

// ============================================================
// Session gate
// ============================================================

#[actix_web::test]
async fn add_item_redirects_to_login_without_session() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;

    for req in [TestRequest::get(), TestRequest::post()] {
        let res = test::call_service(&app, req.uri("/add-item").to_request()).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/login");
        assert!(test::read_body(res).await.is_empty());
    }
}

#[actix_web::test]
async fn add_item_renders_with_session() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;
    let req = TestRequest::get()
        .uri("/add-item")
        .cookie(session_cookie())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("Add New Item"));
    assert!(html.contains(r#"action="/logout""#));
}

#[actix_web::test]
async fn forged_cookie_value_is_not_a_session() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;
    let req = TestRequest::get()
        .uri("/add-item")
        .cookie(Cookie::new(COOKIE_NAME, "admin"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
}

// ============================================================
// Login / logout
// ============================================================

#[actix_web::test]
async fn login_sets_session_cookie() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;
    let req = TestRequest::post()
        .uri("/login")
        .set_form(vec![("email", "user@example.com"), ("password", "password123")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == COOKIE_NAME)
        .expect("session cookie");
    assert_eq!(cookie.value(), COOKIE_VALUE);
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::hours(24)));

    let html = body_text(res).await;
    assert!(html.contains("Login successful! Redirecting..."));
    assert!(html.contains(r#"content="1;url=/items""#));
}

#[actix_web::test]
async fn bad_credentials_set_no_cookie() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;
    let req = TestRequest::post()
        .uri("/login")
        .set_form(vec![("email", "user@example.com"), ("password", "guess")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert!(res.response().cookies().next().is_none());

    let html = body_text(res).await;
    assert!(html.contains("Invalid email or password"));
    assert!(html.contains(r#"value="user@example.com""#));
}

#[actix_web::test]
async fn logout_expires_cookie_and_goes_home() {
    let app = test::init_service(create_app(state(Arc::new(FakeCatalog::seeded())))).await;
    let req = TestRequest::post()
        .uri("/logout")
        .cookie(session_cookie())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");

    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == COOKIE_NAME)
        .expect("revoking cookie");
    assert_eq!(cookie.value(), "");
    let expires = cookie.expires_datetime().expect("expiry");
    assert!(expires < actix_web::cookie::time::OffsetDateTime::now_utc());
}

// ============================================================
// Create form
// ============================================================

#[actix_web::test]
async fn add_item_missing_fields_keeps_input() {
    let catalog = Arc::new(FakeCatalog::seeded());
    let app = test::init_service(create_app(state(Arc::clone(&catalog)))).await;
    let req = TestRequest::post()
        .uri("/add-item")
        .cookie(session_cookie())
        .set_form(vec![("name", "Desk Lamp"), ("description", ""), ("price", "10")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let html = body_text(res).await;
    assert!(html.contains("Please fill in all required fields"));
    assert!(html.contains(r#"value="Desk Lamp""#));
    assert!(catalog.create_sessions.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn add_item_success_forwards_session_and_redirects() {
    let catalog = Arc::new(FakeCatalog::seeded());
    let app = test::init_service(create_app(state(Arc::clone(&catalog)))).await;
    let req = TestRequest::post()
        .uri("/add-item")
        .cookie(session_cookie())
        .set_form(vec![
            ("name", "Desk Lamp"),
            ("description", "LED lamp"),
            ("price", "24.50"),
            ("stock", "3"),
            ("category", "accessories"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let html = body_text(res).await;
    assert!(html.contains("Item created successfully!"));
    assert!(html.contains(r#"content="2;url=/items""#));
    assert_eq!(*catalog.create_sessions.lock().unwrap(), vec![true]);
    assert_eq!(catalog.items.lock().unwrap().len(), 7);
}

#[actix_web::test]
async fn add_item_service_failure_shows_error() {
    let catalog = Arc::new(FakeCatalog::offline());
    let app = test::init_service(create_app(state(catalog))).await;
    let req = TestRequest::post()
        .uri("/add-item")
        .cookie(session_cookie())
        .set_form(vec![
            ("name", "Desk Lamp"),
            ("description", "LED lamp"),
            ("price", "24.50"),
            ("stock", "3"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(res).await;
    assert!(html.contains("Failed to create item. Please try again."));
    assert!(html.contains(r#"value="LED lamp""#));
}
