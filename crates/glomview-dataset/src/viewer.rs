//! Full-screen viewer state machine.
//!
//! The viewer is either closed or showing one image. While open, the
//! mask overlay can be hidden, loading, shown, or unavailable:
//!
//! ```text
//!            open                toggle_mask
//!  Closed ---------> NoMask <----------------> MaskLoading
//!    ^                                          |        |
//!    |  close (from any open phase)  mask_loaded|        |mask_failed
//!    +-----------------------------             v        v
//!                                           MaskShown  MaskError
//! ```
//!
//! Navigation never stores an index: the position of the selected image
//! is looked up by filename in whatever list the caller currently
//! displays, so it stays valid when the list is re-filtered.

use crate::types::ImageRecord;

/// Overlay opacity bounds and default.
pub const MIN_MASK_OPACITY: f64 = 0.1;
/// Upper bound of the overlay opacity.
pub const MAX_MASK_OPACITY: f64 = 1.0;
/// Overlay opacity when the viewer opens.
pub const DEFAULT_MASK_OPACITY: f64 = 0.6;

/// Load outcome of the current image's mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskStatus {
    /// No response yet for the current image.
    #[default]
    Loading,
    /// The mask image loaded.
    Loaded,
    /// The mask request failed (usually: no mask on disk).
    Failed,
}

/// Observable phase of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerPhase {
    /// No image selected.
    Closed,
    /// Image shown, overlay hidden.
    NoMask,
    /// Overlay requested, mask not loaded yet.
    MaskLoading,
    /// Overlay drawn over the image.
    MaskShown,
    /// Overlay requested but the mask is unavailable.
    MaskError,
}

/// User intent, from keyboard or buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Close the viewer.
    Close,
    /// Go to the previous image.
    Previous,
    /// Go to the next image.
    Next,
    /// Show or hide the mask overlay.
    ToggleMask,
}

impl ViewerAction {
    /// Map a DOM `KeyboardEvent.key` name to an action.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "m" | "M" => Some(Self::ToggleMask),
            _ => None,
        }
    }

    /// Whether the action moves through the image list.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(self, Self::Previous | Self::Next)
    }

    /// Map a window-level keydown to an action.
    ///
    /// `on_slider` is set when the event comes from the opacity slider,
    /// which keeps the arrow keys for itself.
    #[must_use]
    pub fn from_keydown(key: &str, on_slider: bool) -> Option<Self> {
        Self::from_key(key).filter(|action| !(on_slider && action.is_navigation()))
    }
}

/// State of the full-screen viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    selected: Option<ImageRecord>,
    show_mask: bool,
    mask_opacity: f64,
    image_loaded: bool,
    mask_status: MaskStatus,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            selected: None,
            show_mask: false,
            mask_opacity: DEFAULT_MASK_OPACITY,
            image_loaded: false,
            mask_status: MaskStatus::Loading,
        }
    }
}

impl ViewerState {
    /// Open the viewer on `record` with a fresh overlay state.
    pub fn open(&mut self, record: ImageRecord) {
        *self = Self {
            selected: Some(record),
            ..Self::default()
        };
    }

    /// Close the viewer and forget all overlay settings.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Switch to another image, keeping overlay visibility and opacity.
    ///
    /// Load flags are reset so the new image and mask are fetched fresh.
    /// Selecting the already-selected filename changes nothing.
    pub fn select(&mut self, record: ImageRecord) {
        if self.is_selected(&record.filename) {
            return;
        }
        self.selected = Some(record);
        self.image_loaded = false;
        self.mask_status = MaskStatus::Loading;
    }

    /// Currently selected image.
    #[must_use]
    pub const fn selected(&self) -> Option<&ImageRecord> {
        self.selected.as_ref()
    }

    /// Whether an image is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether `filename` is the open image.
    #[must_use]
    pub fn is_selected(&self, filename: &str) -> bool {
        self.selected.as_ref().is_some_and(|r| r.filename == filename)
    }

    /// Whether the overlay is toggled on.
    #[must_use]
    pub const fn show_mask(&self) -> bool {
        self.show_mask
    }

    /// Overlay opacity in `[0.1, 1.0]`.
    #[must_use]
    pub const fn mask_opacity(&self) -> f64 {
        self.mask_opacity
    }

    /// Overlay opacity as a whole percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn opacity_percent(&self) -> u32 {
        // Bounded to 10..=100 by set_opacity.
        (self.mask_opacity * 100.0).round() as u32
    }

    /// Whether the current image has finished loading.
    #[must_use]
    pub const fn image_loaded(&self) -> bool {
        self.image_loaded
    }

    /// Load outcome of the current mask.
    #[must_use]
    pub const fn mask_status(&self) -> MaskStatus {
        self.mask_status
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> ViewerPhase {
        if self.selected.is_none() {
            return ViewerPhase::Closed;
        }
        if !self.show_mask {
            return ViewerPhase::NoMask;
        }
        match self.mask_status {
            MaskStatus::Loading => ViewerPhase::MaskLoading,
            MaskStatus::Loaded => ViewerPhase::MaskShown,
            MaskStatus::Failed => ViewerPhase::MaskError,
        }
    }

    /// Show or hide the overlay. No-op while closed.
    pub const fn toggle_mask(&mut self) {
        if self.selected.is_some() {
            self.show_mask = !self.show_mask;
        }
    }

    /// Record that the current image finished loading.
    pub const fn mark_image_loaded(&mut self) {
        if self.selected.is_some() {
            self.image_loaded = true;
        }
    }

    /// Record that the current mask loaded.
    pub const fn mask_loaded(&mut self) {
        if self.selected.is_some() {
            self.mask_status = MaskStatus::Loaded;
        }
    }

    /// Record that the current mask could not be loaded.
    pub const fn mask_failed(&mut self) {
        if self.selected.is_some() {
            self.mask_status = MaskStatus::Failed;
        }
    }

    /// Set the overlay opacity, clamped to `[0.1, 1.0]`.
    ///
    /// Only takes effect while the mask is shown. Returns whether the
    /// value was applied.
    pub fn set_opacity(&mut self, opacity: f64) -> bool {
        if self.phase() != ViewerPhase::MaskShown || !opacity.is_finite() {
            return false;
        }
        self.mask_opacity = opacity.clamp(MIN_MASK_OPACITY, MAX_MASK_OPACITY);
        true
    }

    /// Index of the selected image in `images`, looked up by filename.
    #[must_use]
    pub fn current_index(&self, images: &[ImageRecord]) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        images.iter().position(|r| r.filename == selected.filename)
    }

    /// One-based position and list length, for an "N of M" caption.
    #[must_use]
    pub fn position(&self, images: &[ImageRecord]) -> Option<(usize, usize)> {
        self.current_index(images).map(|i| (i + 1, images.len()))
    }

    /// Whether a previous image exists in `images`.
    #[must_use]
    pub fn can_go_previous(&self, images: &[ImageRecord]) -> bool {
        self.current_index(images).is_some_and(|i| i > 0)
    }

    /// Whether a next image exists in `images`.
    #[must_use]
    pub fn can_go_next(&self, images: &[ImageRecord]) -> bool {
        self.current_index(images)
            .is_some_and(|i| i + 1 < images.len())
    }

    /// Move to the previous image. Returns whether the selection changed.
    ///
    /// Stops at the first image; no wraparound.
    pub fn previous(&mut self, images: &[ImageRecord]) -> bool {
        match self.current_index(images) {
            Some(i) if i > 0 => {
                self.select(images[i - 1].clone());
                true
            }
            _ => false,
        }
    }

    /// Move to the next image. Returns whether the selection changed.
    ///
    /// Stops at the last image; no wraparound.
    pub fn next(&mut self, images: &[ImageRecord]) -> bool {
        match self.current_index(images) {
            Some(i) if i + 1 < images.len() => {
                self.select(images[i + 1].clone());
                true
            }
            _ => false,
        }
    }

    /// Apply an action. Returns whether the state changed.
    pub fn apply(&mut self, action: ViewerAction, images: &[ImageRecord]) -> bool {
        if self.selected.is_none() {
            return false;
        }
        match action {
            ViewerAction::Close => {
                self.close();
                true
            }
            ViewerAction::Previous => self.previous(images),
            ViewerAction::Next => self.next(images),
            ViewerAction::ToggleMask => {
                self.toggle_mask();
                true
            }
        }
    }

    /// Handle a DOM key name. Unbound keys are ignored, and so are the
    /// arrow keys while the opacity slider has them (`on_slider`).
    pub fn handle_key(&mut self, key: &str, on_slider: bool, images: &[ImageRecord]) -> bool {
        ViewerAction::from_keydown(key, on_slider).is_some_and(|action| self.apply(action, images))
    }
}
