use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{NAV_MARKER_OFFSET_PX, NAV_SCROLLED_AFTER_PX};

pub struct NavItem {
    pub name: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Services", section: "services" },
    NavItem { name: "Our Work", section: "case-studies" },
    NavItem { name: "Process", section: "process" },
    NavItem { name: "Integrations", section: "integrations" },
    NavItem { name: "Testimonials", section: "testimonials" },
    NavItem { name: "Contact", section: "contact" },
];

/// Picks the last section whose top has scrolled past the marker line.
/// `offsets` must be in page order.
pub fn active_section<'a>(offsets: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    let marker = scroll_y + NAV_MARKER_OFFSET_PX;
    offsets
        .iter()
        .take_while(|(_, top)| *top <= marker)
        .last()
        .map(|(id, _)| *id)
}

fn section_offsets() -> Vec<(&'static str, f64)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    std::iter::once("hero")
        .chain(NAV_ITEMS.iter().map(|item| item.section))
        .filter_map(|id| {
            let el = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some((id, f64::from(el.offset_top())))
        })
        .collect()
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let active = use_state(|| "hero");
    let menu_open = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |scroll_y| {
                if let Some(current) = active_section(&section_offsets(), *scroll_y) {
                    if *active != current {
                        active.set(current);
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let scrolled = scroll_y > NAV_SCROLLED_AFTER_PX;

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">
                    <span class="logo-mark">{ "TDF" }</span>
                    <span class="logo-text">{ "The Digital Front" }</span>
                </a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    if *menu_open { { "✕" } } else { { "☰" } }
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for NAV_ITEMS.iter().map(|item| {
                        let onclick = {
                            let active = active.clone();
                            let menu_open = menu_open.clone();
                            let section = item.section;
                            Callback::from(move |_: MouseEvent| {
                                active.set(section);
                                menu_open.set(false);
                            })
                        };
                        html! {
                            <a
                                key={item.section}
                                href={format!("#{}", item.section)}
                                class={classes!("nav-link", (*active == item.section).then_some("active"))}
                                {onclick}
                            >
                                { item.name }
                            </a>
                        }
                    }) }
                    <a href="#contact" class="nav-cta">{ "Get Started" }</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSETS: &[(&str, f64)] = &[
        ("hero", 0.0),
        ("services", 800.0),
        ("case-studies", 1600.0),
        ("contact", 3000.0),
    ];

    #[test]
    fn top_of_page_is_hero() {
        assert_eq!(active_section(OFFSETS, 0.0), Some("hero"));
    }

    #[test]
    fn section_becomes_active_at_marker_line() {
        assert_eq!(active_section(OFFSETS, 800.0 - NAV_MARKER_OFFSET_PX), Some("services"));
        assert_eq!(active_section(OFFSETS, 799.0 - NAV_MARKER_OFFSET_PX), Some("hero"));
    }

    #[test]
    fn far_down_is_last_section() {
        assert_eq!(active_section(OFFSETS, 10_000.0), Some("contact"));
    }

    #[test]
    fn nothing_measured_means_no_active_section() {
        assert_eq!(active_section(&[], 500.0), None);
    }

    #[test]
    fn nav_links_point_at_unique_sections() {
        let mut ids: Vec<_> = NAV_ITEMS.iter().map(|i| i.section).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }
}
