use yew::prelude::*;

use crate::booking::modal;

#[derive(Properties, PartialEq)]
pub struct BookingButtonProps {
    #[prop_or_else(|| "Book Online".into())]
    pub label: String,
    /// Stable id so the click-interaction event can name where on the page
    /// the booking started.
    #[prop_or_default]
    pub id: Option<String>,
}

/// Booking call-to-action. The `cta-button` class is what the delegated
/// click tracker matches on, so every instance is counted automatically.
#[function_component(BookingButton)]
pub fn booking_button(props: &BookingButtonProps) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        modal::open_booking_modal();
    });

    html! {
        <button id={props.id.clone()} class="cta-button" onclick={onclick}>
            { &props.label }
        </button>
    }
}
