//! Data model exchanged with the REST backend as JSON.
//!
//! Records are plain mirrors of what the server returns; the frontend holds
//! no derived state beyond the last successful fetch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    pub storage_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Decides the render branch (img vs video tag) everywhere gallery items
/// are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub media_type: MediaType,
    pub url: String,
    pub storage_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub whatsapp_number: String,
    #[serde(default)]
    pub whatsapp_contact_name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub admin: Admin,
}

/// Envelope returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeResponse {
    pub admin: Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// JSON body for service create/update (the multipart variant goes through
/// `api::service_form_data` instead).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    pub features: Vec<String>,
    pub whatsapp_number: String,
    pub whatsapp_contact_name: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_backend_shape() {
        let json = r#"{
            "id": "p1",
            "name": "Solar Panel Kit 5kW",
            "price": 2499.0,
            "description": "Complete rooftop kit",
            "category": "Solar",
            "images": [{"url": "https://cdn/x.jpg", "storageId": "s1"}],
            "featured": true,
            "rating": 4.5
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.images[0].storage_id, "s1");
        assert!(product.featured);
    }

    #[test]
    fn product_optional_fields_default() {
        let json = r#"{"id":"p2","name":"Breaker","price":10.0,"category":"Electrical"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.images.is_empty());
        assert!(!product.featured);
        assert_eq!(product.rating, 0.0);
    }

    #[test]
    fn media_type_is_lowercase_on_the_wire() {
        let json = r#"{
            "id": "g1",
            "title": "Rooftop Array",
            "category": "Solar",
            "mediaType": "video",
            "url": "https://cdn/v.mp4",
            "storageId": "s9"
        }"#;
        let item: GalleryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.media_type, MediaType::Video);
    }

    #[test]
    fn service_payload_serializes_camel_case() {
        let payload = ServicePayload {
            name: "CCTV Installation".into(),
            description: String::new(),
            icon: "Shield".into(),
            image: String::new(),
            features: vec!["HD cameras".into()],
            whatsapp_number: "2348012345678".into(),
            whatsapp_contact_name: "Sales".into(),
            is_active: true,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["whatsappNumber"], "2348012345678");
        assert_eq!(value["isActive"], true);
    }
}
