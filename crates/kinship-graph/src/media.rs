//! Avatar URL resolution

use kinship_domain::traits::MediaResolver;

/// Resolves avatar URLs by joining a static base URL with the stored
/// picture filename, falling back to a placeholder when none is stored
#[derive(Debug, Clone)]
pub struct StaticMediaResolver {
    base_url: String,
    placeholder: String,
}

impl StaticMediaResolver {
    /// Create a resolver for the given base URL and placeholder filename
    pub fn new(base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            placeholder: placeholder.into(),
        }
    }
}

impl Default for StaticMediaResolver {
    fn default() -> Self {
        Self::new("/static/profile_pictures", "default.jpg")
    }
}

impl MediaResolver for StaticMediaResolver {
    fn avatar_url(&self, picture: Option<&str>) -> String {
        let filename = picture.unwrap_or(&self.placeholder);
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }
}
