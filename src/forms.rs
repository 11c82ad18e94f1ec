//! Pure form-domain logic: image staging and pre-submit validation.
//!
//! Kept free of `web_sys` types (the file parameter is generic) so the
//! staging rules are testable on the host.

/// One slot in a form's ordered image list. Existing images came back from
/// the server; new ones are locally-chosen files awaiting upload.
#[derive(Clone, Debug, PartialEq)]
pub enum StagedImage<F> {
    Existing { url: String, storage_id: String },
    New { preview_url: String, file: F },
}

impl<F> StagedImage<F> {
    pub fn preview(&self) -> &str {
        match self {
            StagedImage::Existing { url, .. } => url,
            StagedImage::New { preview_url, .. } => preview_url,
        }
    }
}

/// Ordered mix of persisted and newly-added images plus the storage ids
/// staged for server-side deletion.
///
/// Removal is asymmetric on purpose (it mirrors the shipped behavior):
/// removing an existing image stages its storage id to be deleted by the
/// server on the next update, while removing a new image just drops it
/// locally with no server call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageStaging<F> {
    images: Vec<StagedImage<F>>,
    removed: Vec<String>,
}

impl<F> ImageStaging<F> {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Hydrates from already-persisted `(url, storage_id)` pairs.
    pub fn from_existing(existing: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            images: existing
                .into_iter()
                .map(|(url, storage_id)| StagedImage::Existing { url, storage_id })
                .collect(),
            removed: Vec::new(),
        }
    }

    pub fn add_new(&mut self, preview_url: String, file: F) {
        self.images.push(StagedImage::New { preview_url, file });
    }

    pub fn remove(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        if let StagedImage::Existing { storage_id, .. } = &self.images[index] {
            self.removed.push(storage_id.clone());
        }
        self.images.remove(index);
    }

    pub fn images(&self) -> &[StagedImage<F>] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn new_files(&self) -> impl Iterator<Item = &F> {
        self.images.iter().filter_map(|img| match img {
            StagedImage::New { file, .. } => Some(file),
            StagedImage::Existing { .. } => None,
        })
    }

    pub fn removed_storage_ids(&self) -> &[String] {
        &self.removed
    }
}

// ---------------------------------------------------------------------------
// Pre-submit validation. Failures short-circuit submission; no network call
// is made.
// ---------------------------------------------------------------------------

pub fn validate_product(
    name: &str,
    price: &str,
    category: &str,
    image_count: usize,
) -> Result<(), String> {
    if name.trim().is_empty() || price.trim().is_empty() || category.trim().is_empty() {
        return Err("Please fill in all required fields".to_string());
    }
    if price.trim().parse::<f64>().is_err() {
        return Err("Price must be a number".to_string());
    }
    if image_count == 0 {
        return Err("Please add at least one image".to_string());
    }
    Ok(())
}

pub fn validate_service(name: &str, whatsapp_number: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Service name is required".to_string());
    }
    if whatsapp_number.trim().is_empty() {
        return Err("WhatsApp number is required".to_string());
    }
    Ok(())
}

pub fn validate_gallery_upload(title: &str, category: &str, has_file: bool) -> Result<(), String> {
    if title.trim().is_empty() || category.trim().is_empty() {
        return Err("Please fill in title and category".to_string());
    }
    if !has_file {
        return Err("Please select a file to upload".to_string());
    }
    Ok(())
}

pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), String> {
    if current.is_empty() {
        return Err("Current password is required".to_string());
    }
    if new != confirm {
        return Err("New passwords do not match".to_string());
    }
    if new.len() < 6 {
        return Err("New password must be at least 6 characters long".to_string());
    }
    Ok(())
}

pub fn validate_quote(name: &str, email: &str, details: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || details.trim().is_empty() {
        return Err("Please fill in your name, email and project details".to_string());
    }
    Ok(())
}

/// Drops blank feature rows before submit (the form always keeps at least
/// one editable row around).
pub fn clean_features(features: &[String]) -> Vec<String> {
    features
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes a WhatsApp number into the digits-only form `wa.me` expects.
pub fn whatsapp_digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged_with_two_existing() -> ImageStaging<&'static str> {
        ImageStaging::from_existing([
            ("https://cdn/a.jpg".to_string(), "stor-a".to_string()),
            ("https://cdn/b.jpg".to_string(), "stor-b".to_string()),
        ])
    }

    #[test]
    fn remove_one_existing_add_one_new_stages_exactly_one_of_each() {
        let mut staging = staged_with_two_existing();
        staging.remove(0);
        staging.add_new("blob:preview".to_string(), "local-file");

        assert_eq!(staging.new_files().count(), 1);
        assert_eq!(staging.removed_storage_ids(), ["stor-a"]);
        assert_eq!(staging.len(), 2);
    }

    #[test]
    fn removing_a_new_image_stages_nothing_for_deletion() {
        let mut staging: ImageStaging<&str> = ImageStaging::new();
        staging.add_new("blob:1".to_string(), "f1");
        staging.remove(0);

        assert!(staging.is_empty());
        assert!(staging.removed_storage_ids().is_empty());
    }

    #[test]
    fn remove_out_of_bounds_is_a_no_op() {
        let mut staging = staged_with_two_existing();
        staging.remove(5);
        assert_eq!(staging.len(), 2);
        assert!(staging.removed_storage_ids().is_empty());
    }

    #[test]
    fn staging_preserves_image_order() {
        let mut staging = staged_with_two_existing();
        staging.add_new("blob:new".to_string(), "f");
        let previews: Vec<&str> = staging.images().iter().map(|i| i.preview()).collect();
        assert_eq!(previews, ["https://cdn/a.jpg", "https://cdn/b.jpg", "blob:new"]);
    }

    #[test]
    fn product_with_empty_name_is_rejected_before_any_network_call() {
        let err = validate_product("", "99.0", "Solar", 1).unwrap_err();
        assert_eq!(err, "Please fill in all required fields");
    }

    #[test]
    fn product_requires_at_least_one_image() {
        let err = validate_product("Panel", "99.0", "Solar", 0).unwrap_err();
        assert_eq!(err, "Please add at least one image");
        assert!(validate_product("Panel", "99.0", "Solar", 1).is_ok());
    }

    #[test]
    fn product_price_must_parse() {
        assert!(validate_product("Panel", "abc", "Solar", 1).is_err());
    }

    #[test]
    fn service_requires_whatsapp_number() {
        assert!(validate_service("CCTV", "").is_err());
        assert!(validate_service("CCTV", "234 801 234 5678").is_ok());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password_change("old", "abcdef", "abcdef").is_ok());
        assert_eq!(
            validate_password_change("old", "abcdef", "abcdeg").unwrap_err(),
            "New passwords do not match"
        );
        assert_eq!(
            validate_password_change("old", "abc", "abc").unwrap_err(),
            "New password must be at least 6 characters long"
        );
    }

    #[test]
    fn features_are_trimmed_and_blank_rows_dropped() {
        let features = vec![" HD cameras ".to_string(), "".to_string(), "  ".to_string()];
        assert_eq!(clean_features(&features), vec!["HD cameras"]);
    }

    #[test]
    fn whatsapp_digits_strips_formatting() {
        assert_eq!(whatsapp_digits("+234 (801) 234-5678"), "2348012345678");
    }
}
