//! Presentation data returned for a character/category pair.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const FALLBACK_DIALOGUE: &str = "No dialogue available.";

/// Image directory the rendering layer serves character art from
pub const IMAGE_DIR: &str = "characterEmotions";

/// At or below this viewport width characters are drawn at scale 1
pub const NARROW_VIEWPORT_PX: u32 = 900;

/// CSS custom property carrying the scale to the stylesheet
pub const SCALE_PROPERTY: &str = "--scaleValue";

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub dialogue_text: String,
    #[serde(default)]
    pub image_reference: String,
    #[serde(default = "default_scale")]
    pub visual_scale: f64,
    #[serde(default)]
    pub style_classes: String,
    #[serde(default)]
    pub placement_hints: BTreeMap<String, String>,
}

impl ResponsePayload {
    pub fn new(dialogue_text: impl Into<String>) -> Self {
        Self {
            dialogue_text: dialogue_text.into(),
            image_reference: String::new(),
            visual_scale: default_scale(),
            style_classes: String::new(),
            placement_hints: BTreeMap::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image_reference = image.into();
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.visual_scale = scale;
        self
    }

    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.style_classes = classes.into();
        self
    }

    pub fn with_hint(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.placement_hints.insert(property.into(), value.into());
        self
    }

    /// Payload returned when a character has no line for a category.
    pub fn fallback() -> &'static ResponsePayload {
        static FALLBACK: OnceLock<ResponsePayload> = OnceLock::new();
        FALLBACK.get_or_init(|| ResponsePayload::new(FALLBACK_DIALOGUE))
    }

    pub fn is_fallback(&self) -> bool {
        self == Self::fallback()
    }

    /// Image path relative to the asset root, or `None` when there is no art.
    pub fn image_path(&self) -> Option<String> {
        if self.image_reference.is_empty() {
            return None;
        }
        Some(format!("{}/{}", IMAGE_DIR, self.image_reference))
    }

    /// Inline style for the character image: the placement hints plus the
    /// scale property, which is pinned to 1 on narrow viewports.
    pub fn render_style(&self, viewport_width: u32) -> BTreeMap<String, String> {
        let scale = if viewport_width <= NARROW_VIEWPORT_PX {
            1.0
        } else {
            self.visual_scale
        };
        let mut style = self.placement_hints.clone();
        style.insert(SCALE_PROPERTY.to_string(), scale.to_string());
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let fallback = ResponsePayload::fallback();
        assert_eq!(fallback.dialogue_text, "No dialogue available.");
        assert_eq!(fallback.image_reference, "");
        assert_eq!(fallback.visual_scale, 1.0);
        assert_eq!(fallback.style_classes, "");
        assert!(fallback.placement_hints.is_empty());
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_image_path() {
        assert_eq!(ResponsePayload::new("hi").image_path(), None);
        let payload = ResponsePayload::new("hi").with_image("LeafyHappy.png");
        assert_eq!(payload.image_path().as_deref(), Some("characterEmotions/LeafyHappy.png"));
    }

    #[test]
    fn test_render_style_scales_on_wide_viewports() {
        let payload = ResponsePayload::new("hi")
            .with_scale(1.5)
            .with_hint("bottom", "-2rem");

        let wide = payload.render_style(1280);
        assert_eq!(wide.get("--scaleValue").map(String::as_str), Some("1.5"));
        assert_eq!(wide.get("bottom").map(String::as_str), Some("-2rem"));

        let narrow = payload.render_style(900);
        assert_eq!(narrow.get("--scaleValue").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let payload: ResponsePayload =
            serde_json::from_str(r#"{ "dialogue_text": "Hello!" }"#).unwrap();
        assert_eq!(payload, ResponsePayload::new("Hello!"));
    }
}
