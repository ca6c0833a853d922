use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opaque locator (path or URL) for a static image asset.
///
/// The manifest layer never touches the referenced file; whatever serves the
/// gallery assets is responsible for resolving it.
pub type ImageRef = String;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Manifest {
    pub version: String,
    pub gallery: GalleryInfo,
    /// Optional command-name -> key-spec overrides (e.g. `next: "l"`).
    #[serde(default)]
    pub keybindings: HashMap<String, String>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryInfo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Slideshow auto-advance interval as a humantime string ("4s", "1500ms").
    #[serde(default)]
    pub slideshow_interval: Option<String>,
}

/// A named grouping of images (an event or collection) with its own cover
/// image and description.
///
/// Field names serialize in camelCase so JSON manifests stay wire-compatible
/// with `gallery.json` records exported from the website build.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub cover_image: ImageRef,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    /// Unique within the owning category.
    pub id: u32,
    pub src: ImageRef,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub caption: String,
}

impl Manifest {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id == id)
    }
}

impl Category {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}
