//! Display labels parsed from ROI filenames.
//!
//! Dataset filenames carry their metadata as underscore-delimited
//! tokens, e.g. `HE_K12_2019_x_S3_x_ROI2.jpg`:
//!
//! | index | token  | meaning      |
//! |-------|--------|--------------|
//! | 0     | `HE`   | stain        |
//! | 4     | `S3`   | slide number |
//! | 6     | `ROI2` | ROI number   |
//!
//! Filenames with fewer than [`MIN_LABEL_PARTS`] tokens are shown as-is
//! (minus the extension).

use crate::stain::Stain;
use crate::types::IMAGE_EXTENSION;

/// Minimum number of underscore-delimited tokens for a parsed label.
pub const MIN_LABEL_PARTS: usize = 7;

const STAIN_INDEX: usize = 0;
const SLIDE_INDEX: usize = 4;
const ROI_INDEX: usize = 6;

/// Filename with the first image extension occurrence removed.
#[must_use]
pub fn strip_extension(filename: &str) -> String {
    filename.replacen(IMAGE_EXTENSION, "", 1)
}

/// Human-readable label for an ROI image.
///
/// `HE_x_x_x_S3_x_ROI2.jpg` becomes `H&E Slide 3 ROI 2`. Unknown stain
/// prefixes are shown verbatim. Tokens without the `S`/`ROI` markers are
/// used as they are.
#[must_use]
pub fn image_label(filename: &str) -> String {
    let name = strip_extension(filename);
    let parts: Vec<&str> = name.split('_').collect();
    if parts.len() < MIN_LABEL_PARTS {
        return name;
    }

    let stain_token = parts[STAIN_INDEX];
    let stain = match Stain::from_filename(stain_token) {
        Some(stain) if stain.prefix() == stain_token => stain.label(),
        _ => stain_token,
    };
    let slide = strip_marker(parts[SLIDE_INDEX], "S");
    let roi = strip_marker(parts[ROI_INDEX], "ROI");

    format!("{stain} Slide {slide} ROI {roi}")
}

/// Remove a leading marker from a token, unless that leaves nothing.
fn strip_marker<'a>(token: &'a str, marker: &str) -> &'a str {
    match token.strip_prefix(marker) {
        Some(rest) if !rest.is_empty() => rest,
        _ => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn he_label_from_full_filename() {
        assert_eq!(image_label("HE_x_x_x_S3_x_ROI2.jpg"), "H&E Slide 3 ROI 2");
    }

    #[test]
    fn pas_label_keeps_stain_name() {
        assert_eq!(
            image_label("PAS_K7_2020_a_S12_b_ROI41.jpg"),
            "PAS Slide 12 ROI 41"
        );
    }

    #[test]
    fn extra_parts_are_ignored() {
        assert_eq!(
            image_label("HE_a_b_c_S1_d_ROI5_extra_tokens.jpg"),
            "H&E Slide 1 ROI 5"
        );
    }

    #[test]
    fn short_filename_falls_back_to_stem() {
        assert_eq!(image_label("HE_x_S3_ROI2.jpg"), "HE_x_S3_ROI2");
        assert_eq!(image_label("scan.jpg"), "scan");
    }

    #[test]
    fn fallback_keeps_non_jpg_names() {
        assert_eq!(image_label("mask.png"), "mask.png");
    }

    #[test]
    fn unmarked_tokens_are_used_verbatim() {
        assert_eq!(image_label("HE_a_b_c_7_d_9.jpg"), "H&E Slide 7 ROI 9");
        // A bare marker is not stripped to an empty string.
        assert_eq!(image_label("HE_a_b_c_S_d_ROI.jpg"), "H&E Slide S ROI ROI");
    }

    #[test]
    fn unknown_stain_is_verbatim() {
        assert_eq!(image_label("TRI_a_b_c_S2_d_ROI3.jpg"), "TRI Slide 2 ROI 3");
        // "HEX" starts with "HE" but is not the HE token.
        assert_eq!(image_label("HEX_a_b_c_S2_d_ROI3.jpg"), "HEX Slide 2 ROI 3");
    }

    #[test]
    fn only_first_extension_is_stripped() {
        assert_eq!(strip_extension("a.jpg.jpg"), "a.jpg");
    }
}
