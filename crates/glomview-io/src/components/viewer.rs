//! Full-screen image viewer with a togglable mask overlay.
//!
//! Renders whatever [`ViewerState`] says and feeds user input and
//! image load events back into it. Keyboard: arrows navigate, `M`
//! toggles the mask, `Escape` closes. Keys are read from the window
//! for as long as the viewer is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight, LdEye, LdEyeOff, LdX};
use glomview_dataset::viewer::{MAX_MASK_OPACITY, MIN_MASK_OPACITY};
use glomview_dataset::{
    ImageRecord, MaskStatus, ViewerAction, ViewerPhase, ViewerState, image_label, mask_url,
};

use crate::keyboard::{self, KeyListener};

/// Slider step for the overlay opacity.
const OPACITY_STEP: f64 = 0.1;

/// Props for the [`FullPageViewer`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FullPageViewerProps {
    /// Shared viewer state, owned by the page.
    viewer: Signal<ViewerState>,
    /// The list navigation moves through (the active tab's images).
    images: Vec<ImageRecord>,
}

/// Full-screen overlay showing the selected image.
///
/// Renders nothing while the viewer is closed.
#[component]
pub fn FullPageViewer(props: FullPageViewerProps) -> Element {
    let mut viewer = props.viewer;
    let images: Rc<[ImageRecord]> = props.images.into();

    // The window listener outlives this render; it reads the latest list
    // through this cell.
    let nav_list = use_hook(|| Rc::new(RefCell::new(Rc::clone(&images))));
    *nav_list.borrow_mut() = Rc::clone(&images);

    let listener = use_hook(|| {
        let nav_list = Rc::clone(&nav_list);
        let attached = KeyListener::attach(move |e: web_sys::KeyboardEvent| {
            let on_slider = keyboard::targets_range_input(&e);
            let images = Rc::clone(&nav_list.borrow());
            if viewer.write().handle_key(&e.key(), on_slider, &images) {
                e.prevent_default();
            }
        });
        let attached = attached
            .inspect_err(|err| {
                web_sys::console::warn_1(&format!("keyboard shortcuts unavailable: {err:?}").into());
            })
            .ok();
        Rc::new(RefCell::new(attached))
    });
    use_drop(move || {
        listener.borrow_mut().take();
    });

    let state = viewer.read().clone();
    let Some(record) = state.selected().cloned() else {
        return rsx! {};
    };

    let label = image_label(&record.filename);
    let position = state
        .position(&images)
        .map(|(n, total)| format!("{n} of {total}"));
    let can_go_previous = state.can_go_previous(&images);
    let can_go_next = state.can_go_next(&images);
    let show_mask = state.show_mask();
    let phase = state.phase();

    let act = {
        let images = Rc::clone(&images);
        move |action: ViewerAction| {
            let mut viewer = viewer;
            viewer.write().apply(action, &images);
        }
    };

    let toggle_label = if show_mask { "Hide Mask" } else { "Show Mask" };
    let toggle_class = if show_mask {
        "btn toggle-btn active"
    } else {
        "btn toggle-btn"
    };

    rsx! {
        div {
            class: "fullpage-viewer",
            tabindex: "-1",
            onmounted: move |e| async move {
                if let Err(err) = e.set_focus(true).await {
                    web_sys::console::warn_1(&format!("viewer focus failure: {err:?}").into());
                }
            },

            // Header
            div { class: "viewer-header",
                div { class: "viewer-title",
                    h2 { "{label}" }
                    if let Some(ref position) = position {
                        span { class: "viewer-position", "{position}" }
                    }
                }

                div { class: "controls",
                    if phase == ViewerPhase::MaskShown {
                        {render_opacity_slider(viewer, state.mask_opacity(), state.opacity_percent())}
                    }

                    button {
                        class: "{toggle_class}",
                        title: "Toggle mask overlay (M)",
                        onclick: {
                            let act = act.clone();
                            move |_| act(ViewerAction::ToggleMask)
                        },
                        if show_mask {
                            Icon { width: 16, height: 16, icon: LdEyeOff }
                        } else {
                            Icon { width: 16, height: 16, icon: LdEye }
                        }
                        span { "{toggle_label}" }
                    }

                    button {
                        class: "btn btn-secondary",
                        title: "Close viewer (ESC)",
                        aria_label: "Close viewer",
                        onclick: {
                            let act = act.clone();
                            move |_| act(ViewerAction::Close)
                        },
                        Icon { width: 16, height: 16, icon: LdX }
                    }
                }
            }

            // Content
            div { class: "viewer-content",
                if can_go_previous {
                    button {
                        class: "nav-arrow prev",
                        title: "Previous image (←)",
                        aria_label: "Previous image",
                        onclick: {
                            let act = act.clone();
                            move |_| act(ViewerAction::Previous)
                        },
                        Icon { width: 24, height: 24, icon: LdChevronLeft }
                    }
                }

                if can_go_next {
                    button {
                        class: "nav-arrow next",
                        title: "Next image (→)",
                        aria_label: "Next image",
                        onclick: {
                            let act = act.clone();
                            move |_| act(ViewerAction::Next)
                        },
                        Icon { width: 24, height: 24, icon: LdChevronRight }
                    }
                }

                div { class: "viewer-stage",
                    {render_image(viewer, &record, state.image_loaded())}

                    if show_mask {
                        {render_mask(viewer, &record, state.mask_status(), state.mask_opacity())}
                    }
                }
            }

            // Keyboard hints
            div { class: "viewer-hints",
                div { "Arrow keys: Navigate between images" }
                div { "M: Toggle mask • ESC: Close" }
            }
        }
    }
}

fn render_image(mut viewer: Signal<ViewerState>, record: &ImageRecord, loaded: bool) -> Element {
    let filename = record.filename.clone();
    rsx! {
        img {
            src: "{record.url}",
            alt: "{record.filename}",
            class: "viewer-image",
            onload: move |_| {
                if viewer.peek().is_selected(&filename) {
                    viewer.write().mark_image_loaded();
                }
            },
        }
        if !loaded {
            div { class: "viewer-loading", "Loading..." }
        }
    }
}

fn render_mask(
    mut viewer: Signal<ViewerState>,
    record: &ImageRecord,
    status: MaskStatus,
    opacity: f64,
) -> Element {
    if status == MaskStatus::Failed {
        return rsx! {
            div { class: "mask-overlay",
                div { class: "mask-missing",
                    div { class: "mask-missing-title", "Mask Not Available" }
                    div { class: "mask-missing-hint", "No mask found for this image" }
                }
            }
        };
    }

    let url = mask_url(&record.filename);
    let loaded_for = record.filename.clone();
    let failed_for = record.filename.clone();
    rsx! {
        div { class: "mask-overlay",
            img {
                src: "{url}",
                alt: "Mask overlay",
                class: "viewer-image mask-image",
                style: "opacity: {opacity};",
                onload: move |_| {
                    if viewer.peek().is_selected(&loaded_for) {
                        viewer.write().mask_loaded();
                    }
                },
                onerror: move |_| {
                    if viewer.peek().is_selected(&failed_for) {
                        viewer.write().mask_failed();
                    }
                },
            }
            if status == MaskStatus::Loading {
                div { class: "viewer-loading", "Loading mask..." }
            }
        }
    }
}

fn render_opacity_slider(mut viewer: Signal<ViewerState>, opacity: f64, percent: u32) -> Element {
    rsx! {
        div { class: "opacity-control",
            label { r#for: "mask-opacity", "Opacity:" }
            input {
                r#type: "range",
                id: "mask-opacity",
                min: "{MIN_MASK_OPACITY}",
                max: "{MAX_MASK_OPACITY}",
                step: "{OPACITY_STEP}",
                value: "{opacity}",
                title: "Adjust mask opacity",
                oninput: move |e| {
                    match e.value().parse::<f64>() {
                        Ok(v) => {
                            viewer.write().set_opacity(v);
                        }
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("opacity parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
            span { class: "opacity-value", "{percent}%" }
        }
    }
}
