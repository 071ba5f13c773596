//! Avatar editor WASM bindings.
//!
//! `JsAvatarEditor` owns one editing session. The host forwards picker
//! results and gesture events; the editor keeps the crop transform clamped
//! and renders the avatar on confirm.
//!
//! # Example
//!
//! ```typescript
//! const editor = new JsAvatarEditor(window.innerWidth, window.innerHeight, 300);
//! editor.load_picked_bytes(new Uint8Array(await file.arrayBuffer()));
//!
//! // While a drag is in progress, pass the translation since it began
//! editor.drag_changed(dx, dy);
//! editor.drag_ended();
//!
//! const avatar = editor.confirm();
//! ```

use crate::types::{interpolation_from_u8, JsDecodedImage};
use avatar_core::{EditorConfig, EditorSession, Size, Vec2};
use wasm_bindgen::prelude::*;

/// Crop editor wrapper for JavaScript
#[wasm_bindgen]
pub struct JsAvatarEditor {
    inner: EditorSession,
}

#[wasm_bindgen]
impl JsAvatarEditor {
    /// Create an idle editor for a screen, using default settings otherwise.
    ///
    /// # Errors
    ///
    /// Fails if the screen is not positive or the circle does not fit it.
    #[wasm_bindgen(constructor)]
    pub fn new(
        screen_width: f64,
        screen_height: f64,
        circle_diameter: f64,
    ) -> Result<JsAvatarEditor, JsValue> {
        let mut config = EditorConfig::for_screen(screen_width, screen_height);
        config.circle_diameter = circle_diameter;
        Self::with_config(config)
    }

    /// Create an editor from a serialized `EditorConfig`.
    ///
    /// Missing fields take their defaults.
    pub fn from_config(value: JsValue) -> Result<JsAvatarEditor, JsValue> {
        let config: EditorConfig =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(config)
    }

    /// Serialize the current settings
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.config())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current zoom factor
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.controller().scale()
    }

    /// Current horizontal offset in screen units
    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> f64 {
        self.inner.controller().offset().x
    }

    /// Current vertical offset in screen units
    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> f64 {
        self.inner.controller().offset().y
    }

    /// Whether the crop editor is showing
    #[wasm_bindgen(getter)]
    pub fn is_editing(&self) -> bool {
        self.inner.is_editing()
    }

    /// Whether an avatar has been committed
    #[wasm_bindgen(getter)]
    pub fn has_avatar(&self) -> bool {
        self.inner.avatar().is_some()
    }

    /// Pixel size of the avatar `confirm` produces
    #[wasm_bindgen(getter)]
    pub fn avatar_size(&self) -> u32 {
        self.inner.config().avatar_size()
    }

    /// Accept a picker result; pass `undefined` when the picker was dismissed.
    ///
    /// Returns true if the editor opened.
    pub fn image_picked(&mut self, image: Option<JsDecodedImage>) -> bool {
        self.inner.image_picked(image.map(|img| img.to_decoded()))
    }

    /// Decode and accept picked file bytes. Undecodable data opens nothing.
    pub fn load_picked_bytes(&mut self, bytes: &[u8]) -> bool {
        self.inner.load_picked_bytes(bytes)
    }

    /// Re-open the editor on the last picked image
    pub fn edit_current(&mut self) -> bool {
        self.inner.edit_current()
    }

    /// Reset the framing before opening the picker again.
    ///
    /// The current image is kept, so `edit_current` still works if the
    /// picker is dismissed.
    pub fn choose_new_photo(&mut self) {
        self.inner.choose_new_photo();
    }

    /// Drag translation since the drag began, in screen units
    pub fn drag_changed(&mut self, dx: f64, dy: f64) {
        self.inner.drag_changed(Vec2::new(dx, dy));
    }

    pub fn drag_ended(&mut self) {
        self.inner.drag_ended();
    }

    /// Pinch magnification since the pinch began
    pub fn pinch_changed(&mut self, magnification: f64) {
        self.inner.pinch_changed(magnification);
    }

    pub fn pinch_ended(&mut self) {
        self.inner.pinch_ended();
    }

    /// Close the editor, keeping the previous avatar
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    /// Render and commit the avatar, then close the editor.
    ///
    /// Returns `undefined` when the editor is not open.
    pub fn confirm(&mut self) -> Option<JsDecodedImage> {
        self.inner
            .confirm()
            .cloned()
            .map(JsDecodedImage::from_decoded)
    }

    /// The last committed avatar (a copy)
    pub fn avatar(&self) -> Option<JsDecodedImage> {
        self.inner
            .avatar()
            .cloned()
            .map(JsDecodedImage::from_decoded)
    }

    /// Full-screen rendering of the editor as currently shown
    pub fn preview(&self) -> Option<JsDecodedImage> {
        self.inner.preview().map(JsDecodedImage::from_decoded)
    }

    /// Update the screen size, e.g. after an orientation change
    pub fn set_screen_size(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.inner
            .set_screen_size(Size::new(width, height))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set avatar resampling: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
    pub fn set_filter(&mut self, filter: u8) {
        self.inner.set_filter(interpolation_from_u8(filter));
    }
}

impl JsAvatarEditor {
    fn with_config(config: EditorConfig) -> Result<JsAvatarEditor, JsValue> {
        EditorSession::new(config)
            .map(|inner| Self { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_invalid_screen_rejected() {
        assert!(JsAvatarEditor::new(0.0, 844.0, 300.0).is_err());
        assert!(JsAvatarEditor::new(390.0, 844.0, 500.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_config_round_trip() {
        let e = JsAvatarEditor::new(400.0, 800.0, 250.0).unwrap();
        let json = e.to_json().unwrap();
        let restored = JsAvatarEditor::from_config(json).unwrap();
        assert_eq!(restored.inner.config(), e.inner.config());
    }

    #[wasm_bindgen_test]
    fn test_set_screen_size_too_small() {
        let mut e = JsAvatarEditor::new(390.0, 844.0, 300.0).unwrap();
        assert!(e.set_screen_size(100.0, 100.0).is_err());
    }
}
