use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::toast::{ENTER_DELAY_MS, EXIT_MS, VISIBLE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStage {
    Entering,
    Shown,
    Leaving,
    Gone,
}

impl ToastStage {
    pub fn next(self) -> Option<(u32, ToastStage)> {
        match self {
            ToastStage::Entering => Some((ENTER_DELAY_MS, ToastStage::Shown)),
            ToastStage::Shown => Some((VISIBLE_MS, ToastStage::Leaving)),
            ToastStage::Leaving => Some((EXIT_MS, ToastStage::Gone)),
            ToastStage::Gone => None,
        }
    }

    pub fn transform(self) -> &'static str {
        match self {
            ToastStage::Shown => "translateX(0)",
            _ => "translateX(400px)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
    pub on_done: Callback<()>,
}

/// Success message that slides in from the right and removes itself.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let stage = use_state(|| ToastStage::Entering);

    {
        let stage_setter = stage.setter();
        let on_done = props.on_done.clone();
        use_effect_with_deps(
            move |current: &ToastStage| {
                let timeout = match current.next() {
                    Some((delay, next)) => Some(Timeout::new(delay, move || stage_setter.set(next))),
                    None => {
                        on_done.emit(());
                        None
                    }
                };
                move || drop(timeout)
            },
            *stage,
        );
    }

    if *stage == ToastStage::Gone {
        return html! {};
    }

    html! {
        <div class="success-message" style={format!(
            "position: fixed; top: 100px; right: 20px; background: #10b981; color: white; \
             padding: 15px 20px; border-radius: 10px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2); \
             z-index: 1001; transform: {}; transition: transform 0.3s ease;",
            stage.transform()
        )}>
            {props.message.clone()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_in_holds_then_slides_out() {
        let mut stage = ToastStage::Entering;
        let mut timeline = Vec::new();
        while let Some((delay, next)) = stage.next() {
            timeline.push((delay, next));
            stage = next;
        }
        assert_eq!(
            timeline,
            vec![
                (100, ToastStage::Shown),
                (3_000, ToastStage::Leaving),
                (300, ToastStage::Gone),
            ]
        );
    }

    #[test]
    fn only_the_shown_stage_is_on_screen() {
        assert_eq!(ToastStage::Shown.transform(), "translateX(0)");
        assert_eq!(ToastStage::Entering.transform(), "translateX(400px)");
        assert_eq!(ToastStage::Leaving.transform(), "translateX(400px)");
    }
}
