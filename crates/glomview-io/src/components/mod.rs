//! Dioxus UI components for glomview.
//!
//! Provides the stain tab bar, the searchable thumbnail gallery, and
//! the full-screen viewer with its mask overlay.

mod gallery;
mod stain_tabs;
mod viewer;

pub use gallery::Gallery;
pub use stain_tabs::StainTabs;
pub use viewer::FullPageViewer;
