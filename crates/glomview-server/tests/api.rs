//! Integration tests: drive the router against a temporary dataset.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use glomview_dataset::ImageListing;
use glomview_server::{ServerConfig, router};
use image::ImageEncoder;
use tempfile::TempDir;
use tower::ServiceExt;

const HE: &str = "HE_K1_a_b_S3_c_ROI2.jpg";
const PAS: &str = "PAS_K2_a_b_S1_c_ROI4.jpg";

/// Temporary `jpegs/` + `masks/` dataset. Only the HE image has a mask.
struct Dataset {
    root: TempDir,
}

impl Dataset {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("jpegs")).unwrap();
        std::fs::create_dir(root.path().join("masks")).unwrap();

        std::fs::write(root.path().join("jpegs").join(HE), jpeg(32, 24)).unwrap();
        std::fs::write(root.path().join("jpegs").join(PAS), jpeg(16, 16)).unwrap();
        std::fs::write(root.path().join("jpegs").join("notes.txt"), b"skip").unwrap();
        std::fs::write(
            root.path().join("masks").join("HE_K1_a_b_S3_c_ROI2_mask.png"),
            png(8, 6),
        )
        .unwrap();

        Self { root }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn config(&self) -> ServerConfig {
        ServerConfig::new(self.path().join("jpegs"), self.path().join("masks"))
    }
}

fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, _| image::Rgb([200, 100, (x * 4) as u8]));
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgba([0, 0, 0, 0])
        } else {
            image::Rgba([255, 0, 0, 255])
        }
    });
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
    buf
}

async fn get(config: ServerConfig, uri: &str) -> Response {
    router(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn error_message(response: Response) -> String {
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    json["error"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn listing_returns_only_images() {
    let dataset = Dataset::new();
    let response = get(dataset.config(), "/api/images").await;
    assert_eq!(response.status(), StatusCode::OK);

    let listing: ImageListing = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(listing.images, [HE, PAS]);
}

#[tokio::test]
async fn every_listed_image_is_servable() {
    let dataset = Dataset::new();
    let response = get(dataset.config(), "/api/images").await;
    let listing: ImageListing = serde_json::from_slice(&body_bytes(response).await).unwrap();

    for filename in &listing.images {
        for prefix in ["/api/images/", "/images/"] {
            let response = get(dataset.config(), &format!("{prefix}{filename}")).await;
            assert_eq!(response.status(), StatusCode::OK, "{prefix}{filename}");
            assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
            assert_eq!(
                response.headers()[header::CACHE_CONTROL],
                "public, max-age=31536000, immutable"
            );
            assert!(!body_bytes(response).await.is_empty());
        }
    }
}

#[tokio::test]
async fn unlisted_image_is_404_json() {
    let dataset = Dataset::new();
    let response = get(dataset.config(), "/api/images/HE_missing.jpg").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Image not found");
}

#[tokio::test]
async fn non_image_files_are_not_served() {
    let dataset = Dataset::new();
    std::fs::write(
        dataset.path().join("jpegs").join("HE_K1_a_b_S3_c_ROI2_mask.png"),
        png(4, 4),
    )
    .unwrap();

    for uri in [
        "/api/images/notes.txt",
        "/images/notes.txt",
        "/api/images/HE_K1_a_b_S3_c_ROI2_mask.png",
    ] {
        let response = get(dataset.config(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(error_message(response).await, "Image not found");
    }
}

#[tokio::test]
async fn traversal_is_404() {
    let dataset = Dataset::new();
    std::fs::write(dataset.path().join("secret.jpg"), b"secret").unwrap();

    for uri in ["/api/images/..%2Fsecret.jpg", "/masks/..%2Fsecret.jpg"] {
        let response = get(dataset.config(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn missing_image_dir_is_500_json() {
    let dataset = Dataset::new();
    let config = ServerConfig::new(dataset.path().join("absent"), dataset.path().join("masks"));
    let response = get(config, "/api/images").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message(response).await, "Failed to read images");
}

#[tokio::test]
async fn mask_is_derived_from_image_name() {
    let dataset = Dataset::new();
    for prefix in ["/api/masks/", "/masks/"] {
        let response = get(dataset.config(), &format!("{prefix}{HE}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(body_bytes(response).await, png(8, 6));
    }
}

#[tokio::test]
async fn absent_mask_is_404_json() {
    let dataset = Dataset::new();
    let response = get(dataset.config(), &format!("/masks/{PAS}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Mask not found");
}

#[tokio::test]
async fn mask_for_non_jpg_name_is_404() {
    let dataset = Dataset::new();
    let response = get(dataset.config(), "/masks/HE_K1_a_b_S3_c_ROI2_mask.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn aligned_mask_matches_image_dimensions() {
    let dataset = Dataset::new();
    let config = ServerConfig {
        align_masks: true,
        ..dataset.config()
    };
    let response = get(config, &format!("/masks/{HE}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mask = image::load_from_memory(&body_bytes(response).await).unwrap();
    assert_eq!((mask.width(), mask.height()), (32, 24));
}

#[tokio::test]
async fn aligned_mask_without_source_image_is_404() {
    let dataset = Dataset::new();
    std::fs::remove_file(dataset.path().join("jpegs").join(HE)).unwrap();
    let config = ServerConfig {
        align_masks: true,
        ..dataset.config()
    };
    let response = get(config, &format!("/masks/{HE}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Source image not found");
}

#[tokio::test]
async fn aligned_mask_source_must_be_an_image() {
    let dataset = Dataset::new();
    let config = ServerConfig {
        align_masks: true,
        image_extension: ".jpeg".to_owned(),
        ..dataset.config()
    };
    let response = get(config, &format!("/masks/{HE}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Source image not found");
}

#[tokio::test]
async fn static_dir_serves_ui_bundle() {
    let dataset = Dataset::new();
    let dist = dataset.path().join("dist");
    std::fs::create_dir(&dist).unwrap();
    std::fs::write(dist.join("index.html"), "<html>viewer</html>").unwrap();

    let config = ServerConfig {
        static_dir: Some(dist),
        ..dataset.config()
    };
    let response = get(config.clone(), "/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<html>viewer</html>");

    // API routes still win over the fallback.
    let response = get(config, "/api/images").await;
    assert_eq!(response.status(), StatusCode::OK);
}
