//! glomview-io: Browser I/O and Dioxus component library.
//!
//! Fetches the dataset listing from the server and provides the
//! gallery, stain tabs, and full-screen viewer components used by the
//! glomview web application.

pub mod api;
pub mod components;
pub mod keyboard;

pub use api::{FetchError, fetch_images};
pub use components::{FullPageViewer, Gallery, StainTabs};
