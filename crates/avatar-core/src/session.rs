//! Avatar editing session.
//!
//! Ties the picked source, the committed avatar and the crop controller
//! together behind a two-state machine:
//!
//! ```text
//!            image picked / edit current
//!   Idle ───────────────────────────────▶ Editing
//!    ▲                                       │
//!    └──────────── cancel / confirm ─────────┘
//! ```
//!
//! The transform is reset every time the editor is entered and again when it
//! is left, so nothing leaks from one editing pass into the next.

use log::{debug, info, warn};

use crate::config::{ConfigError, EditorConfig};
use crate::controller::CropController;
use crate::decode::{load_picked_image, resize_to_fit, DecodedImage, FilterType};
use crate::geometry::{Size, Vec2};
use crate::transform::{render_avatar, render_preview, InterpolationFilter};

/// Whether the crop editor is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Profile screen (or the picker) is showing.
    #[default]
    Idle,
    /// The crop editor is showing and accepts gestures.
    Editing,
}

/// State of one profile screen's avatar editing.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    state: EditorState,
    controller: CropController,
    source: Option<DecodedImage>,
    avatar: Option<DecodedImage>,
}

impl EditorSession {
    /// Create an idle session with no source and no avatar.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            controller: CropController::new(config.screen),
            config,
            state: EditorState::Idle,
            source: None,
            avatar: None,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditorState::Editing
    }

    pub fn controller(&self) -> &CropController {
        &self.controller
    }

    /// The image currently being (or last) edited.
    pub fn source(&self) -> Option<&DecodedImage> {
        self.source.as_ref()
    }

    /// The last committed avatar.
    pub fn avatar(&self) -> Option<&DecodedImage> {
        self.avatar.as_ref()
    }

    /// Accept the picker result. `None` means the user cancelled.
    ///
    /// Returns `true` if the editor was entered.
    pub fn image_picked(&mut self, image: Option<DecodedImage>) -> bool {
        let Some(image) = image else {
            debug!("Picker returned no image");
            return false;
        };
        if !image.is_well_formed() {
            warn!(
                "Ignoring picked image: {}x{} with {} pixel bytes",
                image.width,
                image.height,
                image.pixels.len()
            );
            return false;
        }

        let image = match resize_to_fit(&image, self.config.max_source_edge, FilterType::Lanczos3) {
            Ok(resized) => resized,
            Err(e) => {
                warn!("Keeping picked image at full size: {}", e);
                image
            }
        };

        self.source = Some(image);
        self.enter_editor();
        true
    }

    /// Decode picker bytes and accept them. Undecodable bytes count as no pick.
    pub fn load_picked_bytes(&mut self, bytes: &[u8]) -> bool {
        self.image_picked(load_picked_image(bytes))
    }

    /// Re-open the editor on the current source.
    ///
    /// Returns `false` and stays idle when there is nothing to edit.
    pub fn edit_current(&mut self) -> bool {
        if self.source.is_none() {
            debug!("Edit requested without a source image");
            return false;
        }
        self.enter_editor();
        true
    }

    /// Reset the framing before the picker is reopened.
    ///
    /// The current source is kept, so dismissing the picker still leaves
    /// "edit current" working on the previous photo.
    pub fn choose_new_photo(&mut self) {
        self.leave_editor();
        debug!("Waiting for a new photo");
    }

    /// Leave the editor without touching the avatar.
    pub fn cancel(&mut self) {
        if self.state == EditorState::Editing {
            debug!("Editing cancelled");
        }
        self.leave_editor();
    }

    /// Commit the current transform into a new avatar and leave the editor.
    ///
    /// Outside the editor this does nothing and returns `None`. Without a
    /// source image it only leaves the editor.
    pub fn confirm(&mut self) -> Option<&DecodedImage> {
        if self.state != EditorState::Editing {
            debug!("Ignoring confirm while idle");
            return None;
        }
        let Some(source) = self.source.as_ref() else {
            debug!("Confirm without a source image");
            self.leave_editor();
            return None;
        };

        let transform = self.controller.transform();
        let avatar = render_avatar(source, &transform, &self.config);
        info!(
            "Avatar committed: {}x{} at scale {:.3} offset ({:.1}, {:.1})",
            avatar.width, avatar.height, transform.scale, transform.offset.x, transform.offset.y
        );

        self.avatar = Some(avatar);
        self.leave_editor();
        self.avatar.as_ref()
    }

    /// Full-screen rendering of the editor, or `None` when it is not shown.
    pub fn preview(&self) -> Option<DecodedImage> {
        if self.state != EditorState::Editing {
            return None;
        }
        self.source
            .as_ref()
            .map(|source| render_preview(source, &self.controller.transform(), &self.config))
    }

    /// Update the screen size, e.g. after a rotation.
    pub fn set_screen_size(&mut self, screen: Size) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.screen = screen;
        config.validate()?;
        self.config = config;
        self.controller.set_screen_size(screen);
        Ok(())
    }

    /// Change the resampling used for the avatar and preview.
    pub fn set_filter(&mut self, filter: InterpolationFilter) {
        self.config.filter = filter;
    }

    pub fn drag_changed(&mut self, translation: Vec2) {
        if self.accepts_gestures("drag") {
            self.controller.drag_changed(translation);
        }
    }

    pub fn drag_ended(&mut self) {
        if self.accepts_gestures("drag end") {
            self.controller.drag_ended();
        }
    }

    pub fn pinch_changed(&mut self, magnification: f64) {
        if self.accepts_gestures("pinch") {
            self.controller.pinch_changed(magnification);
        }
    }

    pub fn pinch_ended(&mut self) {
        if self.accepts_gestures("pinch end") {
            self.controller.pinch_ended();
        }
    }

    fn accepts_gestures(&self, gesture: &str) -> bool {
        if self.state != EditorState::Editing {
            debug!("Ignoring {} while idle", gesture);
            return false;
        }
        true
    }

    fn enter_editor(&mut self) {
        self.controller.reset();
        self.state = EditorState::Editing;
        debug!("Editor shown");
    }

    fn leave_editor(&mut self) {
        self.controller.reset();
        self.state = EditorState::Idle;
    }
}
