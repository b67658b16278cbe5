//! Gallery search filter and display mode.

use serde::{Deserialize, Serialize};

use crate::types::ImageRecord;

/// How the gallery lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Thumbnail grid.
    #[default]
    Grid,
    /// One row per image with label and filename.
    List,
}

impl ViewMode {
    /// Both modes, in toggle order.
    pub const ALL: [Self; 2] = [Self::Grid, Self::List];

    /// Accessible name for the toggle button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid view",
            Self::List => "List view",
        }
    }
}

/// Client-side gallery filter state.
///
/// Ephemeral: lives only as long as the gallery component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryFilter {
    /// Case-insensitive substring matched against filenames.
    pub search_term: String,
    /// Grid or list display.
    pub view_mode: ViewMode,
}

impl GalleryFilter {
    /// Whether `filename` passes the search term.
    ///
    /// An empty term matches everything.
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        filename
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    /// The records that pass the search term, in input order.
    #[must_use]
    pub fn apply(&self, records: &[ImageRecord]) -> Vec<ImageRecord> {
        let needle = self.search_term.to_lowercase();
        records
            .iter()
            .filter(|record| record.filename.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<ImageRecord> {
        names.iter().map(|n| ImageRecord::new(*n)).collect()
    }

    fn search(term: &str) -> GalleryFilter {
        GalleryFilter {
            search_term: term.to_owned(),
            ..GalleryFilter::default()
        }
    }

    #[test]
    fn empty_term_matches_everything() {
        let all = records(&["HE_1.jpg", "PAS_2.jpg"]);
        assert_eq!(GalleryFilter::default().apply(&all), all);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let all = records(&["HE_K1_S3_ROI2.jpg", "PAS_K2_S1_ROI7.jpg"]);
        assert_eq!(search("roi2").apply(&all), records(&["HE_K1_S3_ROI2.jpg"]));
        assert_eq!(search("pas_k2").apply(&all), records(&["PAS_K2_S1_ROI7.jpg"]));
        assert_eq!(search("_S").apply(&all), all);
    }

    #[test]
    fn search_with_no_match_is_empty() {
        let all = records(&["HE_1.jpg", "PAS_2.jpg"]);
        assert!(search("glomerulus").apply(&all).is_empty());
        assert!(!search("glomerulus").matches("HE_1.jpg"));
    }

    #[test]
    fn matches_agrees_with_apply() {
        let all = records(&["HE_1.jpg", "PAS_2.jpg", "he_lower.jpg"]);
        let filter = search("He");
        let kept = filter.apply(&all);
        for record in &all {
            assert_eq!(filter.matches(&record.filename), kept.contains(record));
        }
    }

    #[test]
    fn default_view_is_grid() {
        assert_eq!(GalleryFilter::default().view_mode, ViewMode::Grid);
    }
}
