pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::ManifestLoader;
pub use schema::{Category, GalleryInfo, Image, ImageRef, Manifest};
pub use validator::ManifestValidator;
