use chrono::{Datelike, Local, Timelike, Weekday};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const REPLY_DELAY_MS: u32 = 1_000;

#[derive(Clone, PartialEq)]
struct ChatMessage {
    from_visitor: bool,
    text: String,
}

/// Office hours: Mon-Fri 7AM-7PM, Sat 8AM-5PM, closed Sunday.
pub fn is_business_hours(day: Weekday, hour: u32) -> bool {
    match day {
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
            (7..19).contains(&hour)
        }
        Weekday::Sat => (8..17).contains(&hour),
        Weekday::Sun => false,
    }
}

/// Canned reply picker for the scripted chat. Keyword checks mirror the
/// questions visitors actually ask; anything else gets the default nudge.
pub fn bot_response(message: &str) -> &'static str {
    let message = message.to_lowercase();
    if message.contains("price") || message.contains("cost") {
        return "Our pricing varies by service. Book a free assessment and we'll give you an exact quote!";
    }
    if message.contains("emergency") {
        return "We offer 24/7 emergency service! Call (555) 123-4822 for immediate assistance.";
    }
    if message.contains("hour") || message.contains("open") {
        return "We're open Mon-Fri 7AM-7PM, Sat 8AM-5PM. Emergency service available 24/7.";
    }
    if message.contains("service") {
        return "We provide HVAC repair, AC service, heating maintenance, ductwork, and handyman services.";
    }
    if message.contains("book") || message.contains("appointment") {
        return "Great! Click any \"Book Online\" button to schedule through our secure booking system.";
    }
    "Thanks for reaching out! For immediate service, call (555) 123-4822 or book online."
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let open = use_state(|| false);
    let draft = use_state(String::new);
    let messages = use_state(Vec::<ChatMessage>::new);

    // The widget only shows while someone is around to answer follow-ups.
    let now = Local::now();
    if !is_business_hours(now.weekday(), now.hour()) {
        return html! {};
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(!*open);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let messages = messages.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = (*draft).trim().to_owned();
            if text.is_empty() {
                return;
            }
            draft.set(String::new());

            let mut thread = (*messages).clone();
            thread.push(ChatMessage {
                from_visitor: true,
                text: text.clone(),
            });
            messages.set(thread.clone());

            let messages = messages.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                let mut with_reply = thread;
                with_reply.push(ChatMessage {
                    from_visitor: false,
                    text: bot_response(&text).to_owned(),
                });
                messages.set(with_reply);
            })
            .forget();
        })
    };

    html! {
        <div class="chat-widget">
            <button
                class="chat-toggle"
                aria-expanded={if *open { "true" } else { "false" }}
                onclick={toggle}
            >
                { if *open { "Close Chat" } else { "Live Chat" } }
            </button>
            {
                if *open {
                    html! {
                        <div class="chat-panel">
                            <div class="chat-messages">
                                {
                                    for messages.iter().map(|message| {
                                        let class = if message.from_visitor {
                                            "chat-message user"
                                        } else {
                                            "chat-message bot"
                                        };
                                        html! { <div class={class}>{ &message.text }</div> }
                                    })
                                }
                            </div>
                            <form onsubmit={onsubmit}>
                                <input
                                    type="text"
                                    placeholder="Ask us anything..."
                                    value={(*draft).clone()}
                                    onchange={let draft = draft.clone(); move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        draft.set(input.value());
                                    }}
                                />
                                <button type="submit">{"Send"}</button>
                            </form>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_hours() {
        assert!(is_business_hours(Weekday::Mon, 7));
        assert!(is_business_hours(Weekday::Fri, 18));
        assert!(!is_business_hours(Weekday::Mon, 6));
        assert!(!is_business_hours(Weekday::Fri, 19));
    }

    #[test]
    fn saturday_hours() {
        assert!(is_business_hours(Weekday::Sat, 8));
        assert!(is_business_hours(Weekday::Sat, 16));
        assert!(!is_business_hours(Weekday::Sat, 7));
        assert!(!is_business_hours(Weekday::Sat, 17));
    }

    #[test]
    fn closed_on_sunday() {
        for hour in 0..24 {
            assert!(!is_business_hours(Weekday::Sun, hour));
        }
    }

    #[test]
    fn keyword_routing() {
        assert!(bot_response("How much does it COST?").contains("pricing"));
        assert!(bot_response("this is an emergency").contains("24/7"));
        assert!(bot_response("when are you open").contains("Mon-Fri"));
        assert!(bot_response("what services do you do").contains("HVAC"));
        assert!(bot_response("can I book an appointment").contains("Book Online"));
        assert!(bot_response("hello there").contains("Thanks for reaching out"));
    }
}
