use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::announcements::Announcement;
use super::controller::{Activatable, SlideshowController};
use super::dom;
use super::timer::{GlooTimers, TimerService};
use crate::config::slideshow::PERIOD_MS;
use crate::effects::visibility::{PageVisibility, VisibilityListener};
use crate::error;

type BrowserSlideshow = SlideshowController<Element, GlooTimers>;
type SlideshowSlot = Rc<RefCell<Option<BrowserSlideshow>>>;

/// Hidden pages stop rotating; coming back starts a fresh period.
pub fn follow_visibility<E, T>(slideshow: &SlideshowController<E, T>, visibility: PageVisibility)
where
    E: Activatable + 'static,
    T: TimerService + 'static,
{
    match visibility {
        PageVisibility::Hidden => slideshow.pause(),
        PageVisibility::Visible => slideshow.resume(),
    }
}

fn on_slideshow<F>(slot: &SlideshowSlot, action: F) -> Callback<MouseEvent>
where
    F: Fn(&BrowserSlideshow) + 'static,
{
    let slot = slot.clone();
    Callback::from(move |_: MouseEvent| {
        if let Some(slideshow) = slot.borrow().as_ref() {
            action(slideshow);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    pub announcements: Vec<Announcement>,
}

#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let container = use_node_ref();
    let slot: SlideshowSlot = use_mut_ref(|| None);

    {
        let container = container.clone();
        let slot = slot.clone();
        use_effect_with_deps(
            move |_| {
                // Elements are captured once per announcement set.
                *slot.borrow_mut() = error::init_feature("slideshow", || {
                    let captured = dom::capture(&container)?;
                    let slideshow =
                        SlideshowController::new(captured.slides, captured.indicators, GlooTimers, PERIOD_MS)?;
                    slideshow.initialize()?;
                    info!("Slideshow rotating {} announcements", slideshow.len());
                    Ok(slideshow)
                });

                let listener = {
                    let slot = slot.clone();
                    error::init_feature("slideshow visibility", move || {
                        VisibilityListener::attach(move |visibility| {
                            if let Some(slideshow) = slot.borrow().as_ref() {
                                follow_visibility(slideshow, visibility);
                            }
                        })
                    })
                };

                move || {
                    drop(listener);
                    if let Some(slideshow) = slot.borrow_mut().take() {
                        slideshow.pause();
                    }
                }
            },
            props.announcements.clone(),
        );
    }

    let previous = on_slideshow(&slot, |s| s.advance(-1));
    let next = on_slideshow(&slot, |s| s.advance(1));
    let pause = on_slideshow(&slot, |s| s.pause());
    let resume = on_slideshow(&slot, |s| s.resume());

    html! {
        <section id="news" class="announcements">
            <style>
                {r#"
                .announcements {
                    padding: 5rem 2rem;
                    background: #f8fafc;
                }
                .slideshow {
                    position: relative;
                    max-width: 820px;
                    margin: 0 auto;
                    min-height: 240px;
                    background: #ffffff;
                    border-radius: 16px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }
                .slide {
                    display: none;
                    padding: 3rem 4.5rem 4rem;
                    animation: slideFade 0.6s ease;
                }
                .slide.active {
                    display: block;
                }
                .slide-date {
                    color: #1e40af;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .slide h3 {
                    margin: 0.75rem 0;
                    font-size: 1.6rem;
                    color: #111827;
                }
                .slide p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                .slide-control {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    border: none;
                    background: rgba(30, 64, 175, 0.08);
                    color: #1e40af;
                    font-size: 1.75rem;
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    cursor: pointer;
                }
                .slide-control.prev { left: 12px; }
                .slide-control.next { right: 12px; }
                .slide-control:hover { background: rgba(30, 64, 175, 0.18); }
                .indicators {
                    position: absolute;
                    bottom: 18px;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    gap: 10px;
                }
                .indicator {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    border: none;
                    padding: 0;
                    background: #cbd5e1;
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .indicator.active {
                    background: #1e40af;
                    transform: scale(1.25);
                }
                @keyframes slideFade {
                    from { opacity: 0.4; }
                    to { opacity: 1; }
                }
                "#}
            </style>
            <h2 class="section-title animate-text">{"Announcements"}</h2>
            <div class="slideshow" ref={container} onmouseenter={pause} onmouseleave={resume}>
                { for props.announcements.iter().map(|announcement| html! {
                    <article class="slide">
                        <span class="slide-date">{announcement.date_label()}</span>
                        <h3>{&announcement.title}</h3>
                        <p>{&announcement.body}</p>
                    </article>
                }) }
                <button class="slide-control prev" aria-label="Previous announcement" onclick={previous}>{"‹"}</button>
                <button class="slide-control next" aria-label="Next announcement" onclick={next}>{"›"}</button>
                <div class="indicators">
                    { for (1..=props.announcements.len() as i64).map(|position| html! {
                        <button
                            class="indicator"
                            aria-label={format!("Show announcement {}", position)}
                            onclick={on_slideshow(&slot, move |s| s.jump_to(position))}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
