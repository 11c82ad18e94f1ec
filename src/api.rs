//! REST facade for the storefront backend.
//!
//! One fixed base URL per build; when an admin token is present in
//! LocalStorage every outgoing request carries it as a bearer header,
//! unconditionally. No retries, no timeouts, no caching — failures surface
//! as `ApiError` and each screen maps them to a user-visible string.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::forms::ImageStaging;
use crate::models::{
    Admin, Category, ChangePasswordRequest, GalleryItem, LoginResponse, MeResponse, Product,
    Service, ServicePayload,
};

/// The only key that survives page reloads.
pub const TOKEN_KEY: &str = "voltra_admin_token";

/// Base URL is fixed at build time, not runtime.
fn base_url() -> &'static str {
    match option_env!("VOLTRA_API_URL") {
        Some(url) => url,
        None => "/api",
    }
}

fn url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (offline, DNS, CORS, aborted).
    Network(String),
    /// Non-2xx response.
    Status(u16),
    /// Body did not decode as the expected shape.
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status(401))
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(code) => write!(f, "Server responded with status {code}"),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {msg}"),
        }
    }
}

/// Submit path for resources that accept either JSON or multipart, resolved
/// once here at the API boundary.
pub enum Payload {
    Json(serde_json::Value),
    Multipart(FormData),
}

// ---------------------------------------------------------------------------
// Token storage
// ---------------------------------------------------------------------------

pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn store_token(token: &str) {
    let _ = LocalStorage::set(TOKEN_KEY, token);
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

// ---------------------------------------------------------------------------
// Request plumbing
// ---------------------------------------------------------------------------

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

fn check(res: Response) -> Result<Response, ApiError> {
    if res.ok() {
        Ok(res)
    } else {
        Err(ApiError::Status(res.status()))
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    res.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let res = authorize(Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(res)?).await
}

/// POST/PUT with a JSON body, expecting a JSON response.
async fn send_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &impl Serialize,
) -> Result<T, ApiError> {
    let res = authorize(builder)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(res)?).await
}

/// POST/PUT resolving the JSON-vs-multipart branch. Multipart bodies go out
/// without an explicit content type so the browser sets the boundary.
async fn send_payload<T: DeserializeOwned>(
    builder: RequestBuilder,
    payload: Payload,
) -> Result<T, ApiError> {
    let builder = authorize(builder);
    let request = match payload {
        Payload::Json(body) => builder
            .header("Content-Type", "application/json")
            .body(body.to_string()),
        Payload::Multipart(form) => builder.body(JsValue::from(form)),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let res = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(res)?).await
}

/// Fire a request where only the status matters.
async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
    let res = authorize(builder)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(res).map(|_| ())
}

// ---------------------------------------------------------------------------
// Multipart builders
// ---------------------------------------------------------------------------

pub struct ProductFields {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub featured: bool,
    pub rating: String,
}

fn form_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

pub fn product_form_data(
    fields: &ProductFields,
    staging: &ImageStaging<web_sys::File>,
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(form_error)?;
    form.append_with_str("name", &fields.name).map_err(form_error)?;
    form.append_with_str("price", &fields.price).map_err(form_error)?;
    form.append_with_str("description", &fields.description)
        .map_err(form_error)?;
    form.append_with_str("category", &fields.category)
        .map_err(form_error)?;
    form.append_with_str("featured", &fields.featured.to_string())
        .map_err(form_error)?;
    form.append_with_str("rating", &fields.rating).map_err(form_error)?;

    let removed = staging.removed_storage_ids();
    if !removed.is_empty() {
        let ids = serde_json::to_string(removed).map_err(|e| ApiError::Decode(e.to_string()))?;
        form.append_with_str("imagesToDelete", &ids).map_err(form_error)?;
    }
    for file in staging.new_files() {
        form.append_with_blob_and_filename("images", file, &file.name())
            .map_err(form_error)?;
    }
    Ok(form)
}

pub fn gallery_form_data(
    title: &str,
    description: &str,
    category: &str,
    media: &web_sys::File,
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(form_error)?;
    form.append_with_str("title", title).map_err(form_error)?;
    form.append_with_str("description", description).map_err(form_error)?;
    form.append_with_str("category", category).map_err(form_error)?;
    form.append_with_blob_and_filename("media", media, &media.name())
        .map_err(form_error)?;
    Ok(form)
}

pub fn service_form_data(
    payload: &ServicePayload,
    image: &web_sys::File,
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(form_error)?;
    form.append_with_str("name", &payload.name).map_err(form_error)?;
    form.append_with_str("description", &payload.description)
        .map_err(form_error)?;
    form.append_with_str("icon", &payload.icon).map_err(form_error)?;
    for feature in &payload.features {
        form.append_with_str("features", feature).map_err(form_error)?;
    }
    form.append_with_str("whatsappNumber", &payload.whatsapp_number)
        .map_err(form_error)?;
    form.append_with_str("whatsappContactName", &payload.whatsapp_contact_name)
        .map_err(form_error)?;
    form.append_with_str("isActive", &payload.is_active.to_string())
        .map_err(form_error)?;
    form.append_with_blob_and_filename("image", image, &image.name())
        .map_err(form_error)?;
    Ok(form)
}

// ---------------------------------------------------------------------------
// Resource modules
// ---------------------------------------------------------------------------

pub mod auth {
    use super::*;

    pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        send_json(
            Request::post(&url("/auth/login")),
            &serde_json::json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn me() -> Result<Admin, ApiError> {
        let envelope: MeResponse = get_json("/auth/me").await?;
        Ok(envelope.admin)
    }

    pub async fn logout() -> Result<(), ApiError> {
        send_empty(Request::post(&url("/auth/logout"))).await
    }

    pub async fn change_password(current: &str, new: &str) -> Result<(), ApiError> {
        let body = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        let res = authorize(Request::put(&url("/auth/change-password")))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(res).map(|_| ())
    }
}

pub mod products {
    use super::*;

    pub async fn get_all() -> Result<Vec<Product>, ApiError> {
        get_json("/products").await
    }

    pub async fn get_by_id(id: &str) -> Result<Product, ApiError> {
        get_json(&format!("/products/{id}")).await
    }

    pub async fn create(form: FormData) -> Result<Product, ApiError> {
        send_payload(Request::post(&url("/products")), Payload::Multipart(form)).await
    }

    pub async fn update(id: &str, form: FormData) -> Result<Product, ApiError> {
        send_payload(
            Request::put(&url(&format!("/products/{id}"))),
            Payload::Multipart(form),
        )
        .await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        send_empty(Request::delete(&url(&format!("/products/{id}")))).await
    }

    pub async fn seed() -> Result<(), ApiError> {
        send_empty(Request::post(&url("/products/seed"))).await
    }
}

pub mod categories {
    use super::*;

    pub async fn get_all() -> Result<Vec<Category>, ApiError> {
        get_json("/categories").await
    }

    pub async fn create(name: &str) -> Result<Category, ApiError> {
        send_json(
            Request::post(&url("/categories")),
            &serde_json::json!({ "name": name }),
        )
        .await
    }

    /// Cascades server-side to every product in the category; callers must
    /// warn before triggering this.
    pub async fn delete(id: &str) -> Result<(), ApiError> {
        send_empty(Request::delete(&url(&format!("/categories/{id}")))).await
    }

    pub async fn seed() -> Result<(), ApiError> {
        send_empty(Request::post(&url("/categories/seed"))).await
    }
}

pub mod gallery {
    use super::*;

    pub async fn get_all() -> Result<Vec<GalleryItem>, ApiError> {
        get_json("/gallery").await
    }

    pub async fn create(form: FormData) -> Result<GalleryItem, ApiError> {
        send_payload(Request::post(&url("/gallery")), Payload::Multipart(form)).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        send_empty(Request::delete(&url(&format!("/gallery/{id}")))).await
    }
}

pub mod services {
    use super::*;

    /// Public listing: the server filters to `isActive == true`.
    pub async fn get_all() -> Result<Vec<Service>, ApiError> {
        get_json("/services").await
    }

    /// Admin listing: bypasses the active-only filter.
    pub async fn get_all_admin() -> Result<Vec<Service>, ApiError> {
        get_json("/services/all").await
    }

    pub async fn get_by_id(id: &str) -> Result<Service, ApiError> {
        get_json(&format!("/services/{id}")).await
    }

    pub async fn create(payload: Payload) -> Result<Service, ApiError> {
        send_payload(Request::post(&url("/services")), payload).await
    }

    pub async fn update(id: &str, payload: Payload) -> Result<Service, ApiError> {
        send_payload(Request::put(&url(&format!("/services/{id}"))), payload).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        send_empty(Request::delete(&url(&format!("/services/{id}")))).await
    }

    pub async fn seed() -> Result<(), ApiError> {
        send_empty(Request::post(&url("/services/seed"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_only_401() {
        assert!(ApiError::Status(401).is_unauthorized());
        assert!(!ApiError::Status(403).is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn errors_render_as_user_visible_strings() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "Server responded with status 500"
        );
        assert_eq!(
            ApiError::Network("failed to fetch".into()).to_string(),
            "Network error: failed to fetch"
        );
    }

    #[test]
    fn urls_join_against_the_fixed_base() {
        assert!(url("/products").ends_with("/products"));
        assert!(url("/services/all").contains("/services/all"));
    }
}
