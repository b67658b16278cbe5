use dioxus::prelude::*;
use glomview_dataset::{ImageRecord, StainCounts, StainTab, ViewerState};
use glomview_io::{FullPageViewer, Gallery, StainTabs};

/// Paper the dataset comes from.
const DATASET_PAPER_URL: &str = "https://www.nature.com/articles/s41598-024-51651-1";

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Fetches the listing once, derives the stain counts and the active
/// tab's subset, and owns the single selected image shared by the
/// gallery and the full-screen viewer.
fn app() -> Element {
    // --- Application state ---
    let mut images = use_signal(Vec::<ImageRecord>::new);
    let mut loading = use_signal(|| true);
    let mut active_tab = use_signal(StainTab::default);
    let mut viewer = use_signal(ViewerState::default);

    // --- Listing fetch (once, on mount) ---
    use_hook(move || {
        spawn(async move {
            match glomview_io::fetch_images().await {
                Ok(records) => images.set(records),
                Err(e) => {
                    // No retry: the gallery stays empty.
                    web_sys::console::error_1(&format!("Error fetching images: {e}").into());
                }
            }
            loading.set(false);
        });
    });

    let counts = StainCounts::tally(&images.read());
    let filtered = active_tab().filter(&images.read());
    let total = counts.all;

    // --- Handlers ---
    let on_tab_select = move |tab: StainTab| {
        active_tab.set(tab);
    };

    let on_image_select = move |record: ImageRecord| {
        viewer.write().open(record);
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        if loading() {
            div { class: "loading", "Loading images..." }
        } else {
            main { class: "page",
                header { class: "page-header",
                    div { class: "container",
                        h1 { "Glomeruli Dataset Viewer" }
                        p { class: "intro",
                            "H&E and PAS stained kidney slides from "
                            a { href: DATASET_PAPER_URL, target: "_blank", "He et al. (2024)" }
                            ", labeled with glomeruli masks (green for normal, red for sclerosis). "
                            "Click a thumbnail to view a region of interest (ROI), then toggle "
                            "the mask with the button in the top right corner or by pressing 'M'."
                        }
                        p { class: "roi-count", "{total} ROIs available" }
                    }
                }

                div { class: "tab-bar",
                    div { class: "container",
                        StainTabs {
                            active: active_tab(),
                            counts: counts,
                            on_select: on_tab_select,
                        }
                    }
                }

                div { class: "container",
                    Gallery {
                        images: filtered.clone(),
                        on_select: on_image_select,
                    }
                }

                if viewer.read().is_open() {
                    FullPageViewer {
                        viewer: viewer,
                        images: filtered,
                    }
                }
            }
        }
    }
}
