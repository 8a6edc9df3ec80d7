use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::hero::PRESS_FEEDBACK_MS;
use crate::effects::parallax::ParallaxOffsets;
use crate::effects::scroll;
use crate::effects::typewriter::TypingStage;

const HERO_TITLE: &str = "Department of Industrial Technology";

#[derive(Properties, PartialEq)]
struct HeroButtonProps {
    target: &'static str,
    primary: bool,
    label: &'static str,
}

/// Call-to-action that scrolls to its section and briefly shrinks as feedback.
#[function_component(HeroButton)]
fn hero_button(props: &HeroButtonProps) -> Html {
    let pressed = use_state_eq(|| false);
    let feedback = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let pressed = pressed.clone();
        let target = props.target;
        Callback::from(move |_: MouseEvent| match scroll::scroll_to_section(target) {
            Ok(true) => {
                pressed.set(true);
                let pressed = pressed.clone();
                *feedback.borrow_mut() = Some(Timeout::new(PRESS_FEEDBACK_MS, move || pressed.set(false)));
            }
            Ok(false) => {}
            Err(e) => e.report("hero buttons"),
        })
    };

    html! {
        <button
            class={classes!("btn", if props.primary { "primary" } else { "secondary" })}
            style={(*pressed).then(|| "transform: scale(0.95);")}
            {onclick}
        >
            {props.label}
        </button>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let parallax = use_state_eq(ParallaxOffsets::default);
    let typing = use_state(|| TypingStage::Waiting);

    // Parallax while the hero is on screen.
    {
        let parallax = parallax.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn Fn()>::new({
                let window = window.clone();
                move || {
                    let Some(window) = window.as_ref() else { return };
                    let scrolled = window.page_y_offset().unwrap_or(0.0);
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    if let Some(offsets) = ParallaxOffsets::for_scroll(scrolled, viewport) {
                        parallax.set(offsets);
                    }
                }
            });

            if let Some(window) = window.as_ref() {
                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    error!("Failed to attach parallax: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // Typewriter: every stage schedules the next one.
    {
        let typing_setter = typing.setter();
        use_effect_with_deps(
            move |stage: &TypingStage| {
                let total = HERO_TITLE.chars().count();
                if *stage == TypingStage::Finished {
                    info!("Hero title typed");
                }
                let timeout = stage
                    .next(total)
                    .map(|(delay, next)| Timeout::new(delay, move || typing_setter.set(next)));
                move || drop(timeout)
            },
            *typing,
        );
    }

    let title_style = typing
        .shows_cursor()
        .then(|| "border-right: 2px solid white;");

    html! {
        <section id="home" class="hero">
            <div class="hero-bg" style={parallax.background_transform()}></div>
            <div class="hero-content" style={parallax.content_transform()}>
                <h1 class="hero-title" style={title_style}>{typing.visible_text(HERO_TITLE)}</h1>
                <p class="hero-subtitle">
                    {"Hands-on programs in automation, electronics, manufacturing and industrial management, \
                      taught by practitioners in fully equipped laboratories."}
                </p>
                <div class="hero-buttons">
                    <HeroButton target="#programs" primary={true} label="Explore Programs" />
                    <HeroButton target="#faculty" primary={false} label="Meet the Faculty" />
                </div>
            </div>
        </section>
    }
}
