use yew::prelude::*;

use crate::effects::cards::{CardPointer, PointerEvent};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Card that lifts on hover and dips slightly while pressed.
#[function_component(InteractiveCard)]
pub fn interactive_card(props: &CardProps) -> Html {
    let pointer = use_state_eq(CardPointer::default);

    let on = |event: PointerEvent| {
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| pointer.set(pointer.on(event)))
    };

    html! {
        <div
            class={classes!(props.class.clone(), "animate-text")}
            style={pointer.style()}
            onmouseenter={on(PointerEvent::Enter)}
            onmouseleave={on(PointerEvent::Leave)}
            onmousedown={on(PointerEvent::Down)}
            onmouseup={on(PointerEvent::Up)}
        >
            { for props.children.iter() }
        </div>
    }
}
