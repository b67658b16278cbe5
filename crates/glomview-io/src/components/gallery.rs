//! Searchable thumbnail gallery with grid and list layouts.
//!
//! Filter state (search term, layout) is local to the component and
//! lost on reload.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdLayoutGrid, LdList, LdSearch};
use glomview_dataset::{GalleryFilter, ImageRecord, ViewMode, image_label};

/// Props for the [`Gallery`] component.
#[derive(Props, Clone, PartialEq)]
pub struct GalleryProps {
    /// Images of the active stain tab, in display order.
    images: Vec<ImageRecord>,
    /// Callback fired when an image is clicked.
    on_select: EventHandler<ImageRecord>,
}

/// Gallery of the given images with a search box and layout toggle.
#[component]
pub fn Gallery(props: GalleryProps) -> Element {
    let mut filter = use_signal(GalleryFilter::default);

    let visible = filter.read().apply(&props.images);
    let view_mode = filter.read().view_mode;
    let search_term = filter.read().search_term.clone();
    let shown = visible.len();
    let total = props.images.len();
    let on_select = props.on_select;

    rsx! {
        div { class: "gallery",
            div { class: "gallery-controls",
                div { class: "search",
                    span { class: "search-icon",
                        Icon { width: 16, height: 16, icon: LdSearch }
                    }
                    input {
                        r#type: "text",
                        placeholder: "Search images...",
                        value: "{search_term}",
                        oninput: move |e| filter.write().search_term = e.value(),
                    }
                }

                div { class: "view-toggle",
                    for mode in ViewMode::ALL {
                        {render_mode_button(mode, view_mode == mode, filter)}
                    }
                }
            }

            p { class: "gallery-count", "Showing {shown} of {total} images" }

            {match view_mode {
                ViewMode::Grid => rsx! {
                    div { class: "image-grid",
                        for record in visible {
                            {render_grid_item(record, on_select)}
                        }
                    }
                },
                ViewMode::List => rsx! {
                    div { class: "image-list",
                        for record in visible {
                            {render_list_item(record, on_select)}
                        }
                    }
                },
            }}

            if shown == 0 {
                div { class: "empty-state",
                    p { class: "empty-title", "No images found" }
                    p { class: "empty-hint", "Try adjusting your search terms" }
                }
            }
        }
    }
}

fn render_mode_button(mode: ViewMode, is_active: bool, mut filter: Signal<GalleryFilter>) -> Element {
    let class = if is_active { "icon-btn active" } else { "icon-btn" };
    rsx! {
        button {
            key: "{mode.label()}",
            class: "{class}",
            title: "{mode.label()}",
            aria_label: "{mode.label()}",
            "aria-pressed": "{is_active}",
            onclick: move |_| filter.write().view_mode = mode,
            {match mode {
                ViewMode::Grid => rsx! { Icon { width: 16, height: 16, icon: LdLayoutGrid } },
                ViewMode::List => rsx! { Icon { width: 16, height: 16, icon: LdList } },
            }}
        }
    }
}

fn render_grid_item(record: ImageRecord, on_select: EventHandler<ImageRecord>) -> Element {
    let label = image_label(&record.filename);
    let filename = record.filename.clone();
    let url = record.url.clone();
    rsx! {
        div {
            key: "{filename}",
            class: "image-item",
            onclick: move |_| on_select.call(record.clone()),
            img {
                src: "{url}",
                alt: "{filename}",
                "loading": "lazy",
                class: "thumbnail",
            }
            div { class: "image-label", "{label}" }
        }
    }
}

fn render_list_item(record: ImageRecord, on_select: EventHandler<ImageRecord>) -> Element {
    let label = image_label(&record.filename);
    let filename = record.filename.clone();
    let url = record.url.clone();
    rsx! {
        div {
            key: "{filename}",
            class: "list-item",
            onclick: move |_| on_select.call(record.clone()),
            img {
                src: "{url}",
                alt: "{filename}",
                class: "list-thumbnail",
            }
            div { class: "list-text",
                h3 { "{label}" }
                p { class: "list-filename", "{filename}" }
            }
            span { class: "list-hint", "Click to view" }
        }
    }
}
