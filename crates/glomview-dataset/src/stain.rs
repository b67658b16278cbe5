//! Histological stains and the stain tabs above the gallery.
//!
//! The stain is encoded as the filename prefix (`HE...` or `PAS...`).
//! Tab filtering and the per-tab counts both use that prefix test.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::ImageRecord;

/// Staining method of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stain {
    /// Hematoxylin and eosin.
    HE,
    /// Periodic acid-Schiff.
    PAS,
}

impl Stain {
    /// Both stains, in tab order.
    pub const ALL: [Self; 2] = [Self::HE, Self::PAS];

    /// Filename prefix that identifies this stain.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::HE => "HE",
            Self::PAS => "PAS",
        }
    }

    /// Human-readable stain name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HE => "H&E",
            Self::PAS => "PAS",
        }
    }

    /// Whether `filename` belongs to this stain.
    #[must_use]
    pub fn matches(self, filename: &str) -> bool {
        filename.starts_with(self.prefix())
    }

    /// Parse the stain from a filename prefix.
    #[must_use]
    pub fn from_filename(filename: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stain| stain.matches(filename))
    }
}

impl fmt::Display for Stain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active tab of the stain navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StainTab {
    /// No stain restriction.
    #[default]
    All,
    /// Only H&E images.
    HE,
    /// Only PAS images.
    PAS,
}

impl StainTab {
    /// All tabs in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::HE, Self::PAS];

    /// The stain restriction, if any.
    #[must_use]
    pub const fn stain(self) -> Option<Stain> {
        match self {
            Self::All => None,
            Self::HE => Some(Stain::HE),
            Self::PAS => Some(Stain::PAS),
        }
    }

    /// Tab caption without the count.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All ROIs",
            Self::HE => "H&E ROIs",
            Self::PAS => "PAS ROIs",
        }
    }

    /// Whether `filename` is visible under this tab.
    #[must_use]
    pub fn includes(self, filename: &str) -> bool {
        self.stain().is_none_or(|stain| stain.matches(filename))
    }

    /// The records visible under this tab, in input order.
    #[must_use]
    pub fn filter(self, records: &[ImageRecord]) -> Vec<ImageRecord> {
        records
            .iter()
            .filter(|record| self.includes(&record.filename))
            .cloned()
            .collect()
    }
}

/// Number of records per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StainCounts {
    /// Every record.
    pub all: usize,
    /// Records with the `HE` prefix.
    pub he: usize,
    /// Records with the `PAS` prefix.
    pub pas: usize,
}

impl StainCounts {
    /// Count records per tab in a single pass.
    #[must_use]
    pub fn tally(records: &[ImageRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            counts.all += 1;
            match Stain::from_filename(&record.filename) {
                Some(Stain::HE) => counts.he += 1,
                Some(Stain::PAS) => counts.pas += 1,
                None => {}
            }
            counts
        })
    }

    /// Count shown on the given tab.
    #[must_use]
    pub const fn for_tab(self, tab: StainTab) -> usize {
        match tab {
            StainTab::All => self.all,
            StainTab::HE => self.he,
            StainTab::PAS => self.pas,
        }
    }
}
