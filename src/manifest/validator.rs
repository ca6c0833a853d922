use anyhow::{Context, Result, anyhow};
use std::collections::HashSet;

use super::schema::{Category, Manifest};
use crate::input::{ActionKey, NavCommand};

pub struct ManifestValidator;

impl ManifestValidator {
    pub fn validate(manifest: &Manifest) -> Result<()> {
        // Validate version
        if manifest.version != "v1" {
            return Err(anyhow!(
                "Unsupported manifest version: {}. Expected: v1",
                manifest.version
            ));
        }

        // Validate gallery title
        if manifest.gallery.title.trim().is_empty() {
            return Err(anyhow!("Gallery title cannot be empty"));
        }

        // Validate slideshow interval format if present
        if let Some(interval) = &manifest.gallery.slideshow_interval {
            humantime::parse_duration(interval)
                .with_context(|| format!("Invalid slideshow_interval format: {}", interval))?;
        }

        // Validate categories exist
        if manifest.categories.is_empty() {
            return Err(anyhow!("No categories defined in manifest"));
        }

        // Validate each category, checking id uniqueness across the set
        let mut seen_ids = HashSet::new();
        for category in &manifest.categories {
            Self::validate_category(category)
                .with_context(|| format!("Invalid category: {}", category.id))?;

            if !seen_ids.insert(category.id.as_str()) {
                return Err(anyhow!("Duplicate category id: {}", category.id));
            }
        }

        // Validate keybinding overrides
        for (command, key) in &manifest.keybindings {
            Self::validate_keybinding(command, key)
                .with_context(|| format!("Invalid keybinding for '{}'", command))?;
        }

        Ok(())
    }

    fn validate_category(category: &Category) -> Result<()> {
        if category.id.trim().is_empty() {
            return Err(anyhow!("Category id cannot be empty"));
        }

        if category.title.trim().is_empty() {
            return Err(anyhow!("Category title cannot be empty"));
        }

        if category.cover_image.trim().is_empty() {
            return Err(anyhow!("Category cover image cannot be empty"));
        }

        // An empty category would make the image grid and lightbox
        // unreachable dead ends, so reject it at the boundary.
        if category.images.is_empty() {
            return Err(anyhow!("Category must contain at least one image"));
        }

        let mut seen_ids = HashSet::new();
        for image in &category.images {
            if image.src.trim().is_empty() {
                return Err(anyhow!("Image {} has an empty src", image.id));
            }
            if !seen_ids.insert(image.id) {
                return Err(anyhow!("Duplicate image id within category: {}", image.id));
            }
        }

        Ok(())
    }

    fn validate_keybinding(command: &str, key: &str) -> Result<()> {
        if NavCommand::from_name(command).is_none() {
            return Err(anyhow!(
                "Unknown command: {}. Valid commands: {:?}",
                command,
                NavCommand::names()
            ));
        }

        let parsed_key =
            ActionKey::parse(key).map_err(|e| anyhow!("Invalid key '{}': {}", key, e))?;

        // Warn about Ctrl combinations that may conflict with the terminal
        if let ActionKey::Ctrl(ch) = parsed_key {
            match ch {
                'c' | 'z' | 's' | 'q' | 'w' => {
                    eprintln!(
                        "Warning: keybinding '{}' uses Ctrl+{} which may be intercepted by the terminal. \
                        Consider using a different key combination.",
                        command,
                        ch.to_ascii_uppercase()
                    );
                }
                _ => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::loader::ManifestLoader;

    fn manifest_from(yaml: &str) -> Manifest {
        ManifestLoader::load_from_yaml(yaml).unwrap()
    }

    const VALID: &str = r#"
version: v1
gallery:
  title: "School Gallery"
  slideshow_interval: "4s"
keybindings:
  next: "l"
categories:
  - id: sports
    title: "Sports Day"
    coverImage: /images/sports/cover.jpg
    images:
      - id: 1
        src: /images/sports/01.jpg
        caption: "100m final"
"#;

    #[test]
    fn test_validate_valid_manifest() {
        let manifest = manifest_from(VALID);
        assert!(ManifestValidator::validate(&manifest).is_ok());
    }

    #[test]
    fn test_validate_invalid_version() {
        let mut manifest = manifest_from(VALID);
        manifest.version = "v2".to_string();

        let result = ManifestValidator::validate(&manifest);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("version"));
    }

    #[test]
    fn test_validate_empty_gallery_title() {
        let mut manifest = manifest_from(VALID);
        manifest.gallery.title = "  ".to_string();

        assert!(ManifestValidator::validate(&manifest).is_err());
    }

    #[test]
    fn test_validate_bad_slideshow_interval() {
        let mut manifest = manifest_from(VALID);
        manifest.gallery.slideshow_interval = Some("four seconds-ish".to_string());

        let result = ManifestValidator::validate(&manifest);
        assert!(result.is_err());
        assert!(
            format!("{:#}", result.unwrap_err()).contains("slideshow_interval"),
            "error should name the offending field"
        );
    }

    #[test]
    fn test_validate_no_categories() {
        let mut manifest = manifest_from(VALID);
        manifest.categories.clear();

        assert!(ManifestValidator::validate(&manifest).is_err());
    }

    #[test]
    fn test_validate_duplicate_category_ids() {
        let mut manifest = manifest_from(VALID);
        let duplicate = manifest.categories[0].clone();
        manifest.categories.push(duplicate);

        let result = ManifestValidator::validate(&manifest);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Duplicate category"));
    }

    #[test]
    fn test_validate_empty_category_rejected() {
        let mut manifest = manifest_from(VALID);
        manifest.categories[0].images.clear();

        let result = ManifestValidator::validate(&manifest);
        assert!(result.is_err());
        assert!(
            format!("{:#}", result.unwrap_err()).contains("at least one image"),
            "empty categories must be rejected at the boundary"
        );
    }

    #[test]
    fn test_validate_duplicate_image_ids() {
        let mut manifest = manifest_from(VALID);
        let duplicate = manifest.categories[0].images[0].clone();
        manifest.categories[0].images.push(duplicate);

        assert!(ManifestValidator::validate(&manifest).is_err());
    }

    #[test]
    fn test_validate_unknown_keybinding_command() {
        let mut manifest = manifest_from(VALID);
        manifest
            .keybindings
            .insert("teleport".to_string(), "t".to_string());

        let result = ManifestValidator::validate(&manifest);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Unknown command"));
    }

    #[test]
    fn test_validate_unparseable_key() {
        let mut manifest = manifest_from(VALID);
        manifest
            .keybindings
            .insert("quit".to_string(), "super+mega+q".to_string());

        assert!(ManifestValidator::validate(&manifest).is_err());
    }
}
