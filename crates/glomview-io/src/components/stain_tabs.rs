//! Stain tab bar: All / H&E / PAS with per-tab counts.

use dioxus::prelude::*;
use glomview_dataset::{StainCounts, StainTab};

/// Props for the [`StainTabs`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StainTabsProps {
    /// Currently active tab.
    active: StainTab,
    /// Number of images per tab.
    counts: StainCounts,
    /// Callback fired when a tab is clicked.
    on_select: EventHandler<StainTab>,
}

/// Horizontal tab bar restricting the gallery to one stain.
#[component]
pub fn StainTabs(props: StainTabsProps) -> Element {
    rsx! {
        nav { class: "stain-tabs",
            for tab in StainTab::ALL {
                {render_tab(tab, props.active == tab, props.counts.for_tab(tab), props.on_select)}
            }
        }
    }
}

fn render_tab(
    tab: StainTab,
    is_active: bool,
    count: usize,
    on_select: EventHandler<StainTab>,
) -> Element {
    let class = if is_active { "tab active" } else { "tab" };
    rsx! {
        button {
            key: "{tab.label()}",
            class: "{class}",
            "aria-pressed": "{is_active}",
            onclick: move |_| on_select.call(tab),
            "{tab.label()} ({count})"
        }
    }
}
