use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::effects::header::HeaderStyle;
use crate::effects::scroll;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#programs", "Programs"),
    ("#faculty", "Faculty"),
    ("#research", "Research"),
    ("#news", "News"),
    ("#contact", "Contact"),
];

/// Click handler for in-page links: smooth scroll instead of jumping.
pub fn anchor_click(href: &'static str, after: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if !scroll::is_in_page_anchor(href) {
            return;
        }
        e.prevent_default();
        if let Err(err) = scroll::scroll_to_section(href) {
            err.report("smooth scrolling");
        }
        after.emit(());
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let header_style = use_state_eq(|| HeaderStyle::Resting);
    let toggle_ref = use_node_ref();
    let nav_ref = use_node_ref();

    {
        let header_style = header_style.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn Fn()>::new({
                let window = window.clone();
                move || {
                    if let Some(window) = window.as_ref() {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        header_style.set(HeaderStyle::for_scroll(scroll_y));
                    }
                }
            });

            if let Some(window) = window.as_ref() {
                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    error!("Failed to watch scrolling for the header: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // Outside click closes the menu.
    {
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        let nav_ref = nav_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if !*menu_open {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .get()
                    .map_or(false, |container| container.contains(target.as_ref()))
            };
            if !inside(&nav_ref) && !inside(&toggle_ref) {
                menu_open.set(false);
            }
        });
    }

    // Escape closes the menu and hands focus back to the toggle.
    {
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                menu_open.set(false);
                if let Some(toggle) = toggle_ref.cast::<HtmlElement>() {
                    if let Err(e) = toggle.focus() {
                        error!("Failed to focus menu toggle: {:?}", e);
                    }
                }
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let active = (*menu_open).then(|| "active");

    html! {
        <header class="header" style={header_style.css()}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={anchor_click("#home", close_menu.clone())}>
                    {"Industrial Technology"}
                </a>

                <button
                    id="menuToggle"
                    ref={toggle_ref}
                    class={classes!("menu-toggle", active)}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav id="navigation" ref={nav_ref} class={classes!("nav", active)}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={anchor_click(*href, close_menu.clone())}>{*label}</a>
                    }) }
                </nav>
            </div>
        </header>
    }
}
