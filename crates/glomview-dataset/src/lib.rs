//! glomview-dataset: Pure dataset logic for the ROI viewer (sans-IO).
//!
//! Everything the server and the browser UI agree on lives here:
//! image records and their URLs, stain parsing and tab filtering,
//! filename search, display labels, mask filename derivation, mask
//! alignment, and the full-screen viewer state machine.
//!
//! This crate has **no I/O dependencies** -- it operates on filenames
//! and in-memory byte slices. Filesystem access lives in
//! `glomview-server`, browser access in `glomview-io`.

pub mod filter;
pub mod label;
pub mod mask;
pub mod stain;
pub mod types;
pub mod viewer;

pub use filter::{GalleryFilter, ViewMode};
pub use label::image_label;
pub use mask::{align_to_image, mask_filename, mask_url};
pub use stain::{Stain, StainCounts, StainTab};
pub use types::{DatasetError, Dimensions, ImageListing, ImageRecord};
pub use viewer::{MaskStatus, ViewerAction, ViewerPhase, ViewerState};

/// Build the image records for a listing, in listing order.
#[must_use]
pub fn records_from_listing(listing: &ImageListing) -> Vec<ImageRecord> {
    listing
        .images
        .iter()
        .map(|filename| ImageRecord::new(filename.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_follow_listing_order() {
        let listing = ImageListing {
            images: vec!["PAS_b.jpg".to_owned(), "HE_a.jpg".to_owned()],
        };
        let records = records_from_listing(&listing);
        let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, ["PAS_b.jpg", "HE_a.jpg"]);
        assert_eq!(records[1].url, "/images/HE_a.jpg");
    }

    #[test]
    fn empty_listing_yields_no_records() {
        let records = records_from_listing(&ImageListing::default());
        assert!(records.is_empty());
    }
}
