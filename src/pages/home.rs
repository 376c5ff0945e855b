use yew::prelude::*;
use yew_hooks::use_interval;

use crate::booking::tracking;
use crate::components::booking_button::BookingButton;
use crate::components::chat::ChatWidget;
use crate::config;

const ROTATE_INTERVAL_MS: u32 = 5_000;

const SERVICES: [(&str, &str); 6] = [
    ("HVAC Repair", "Fast diagnosis and repair for all makes and models."),
    ("AC Service", "Seasonal tune-ups that keep cooling costs down."),
    ("Heating", "Furnace and heat pump maintenance before winter hits."),
    ("Ductwork", "Sealing and replacement for better airflow."),
    ("Indoor Air Quality", "Filtration and humidity control for healthier air."),
    ("Handyman", "Small repairs done right the first time."),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "They had our AC running the same afternoon we called. Honest pricing, no upsell.",
        "Maria G.",
    ),
    (
        "Booked online in two minutes and the tech showed up right on schedule.",
        "Dan W.",
    ),
    (
        "Fixed the furnace and a leaky faucet in one visit. Our go-to from now on.",
        "Priya S.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Wire up scheduler tracking once per page session; re-renders are a
    // no-op inside initialize().
    use_effect_with_deps(
        move |_| {
            tracking::initialize();
            || ()
        },
        (),
    );

    let current_testimonial = use_state(|| 0usize);

    {
        let current_testimonial = current_testimonial.clone();
        use_interval(
            move || {
                current_testimonial.set((*current_testimonial + 1) % TESTIMONIALS.len());
            },
            ROTATE_INTERVAL_MS,
        );
    }

    html! {
        <main>
            <section class="hero" id="home">
                <h1>{"Father's Comfort Heating & Handyman"}</h1>
                <p>{"Trusted HVAC and handyman service, one call away."}</p>
                <BookingButton id="bookNowHero" label="Book Online" />
                <a class="phone-link" href={config::PHONE_HREF}>
                    { format!("Call {}", config::PHONE_DISPLAY) }
                </a>
            </section>

            <section class="services" id="services">
                <h2>{"Our Services"}</h2>
                <div class="service-list">
                    {
                        for SERVICES.iter().map(|(name, blurb)| html! {
                            <div class="service-card">
                                <h3>{ *name }</h3>
                                <p>{ *blurb }</p>
                            </div>
                        })
                    }
                </div>
                <BookingButton id="bookNowServices" label="Schedule Service" />
            </section>

            <section class="testimonials" id="testimonials">
                <h2>{"What Our Customers Say"}</h2>
                {
                    for TESTIMONIALS.iter().enumerate().map(|(index, (quote, name))| {
                        let class = if index == *current_testimonial {
                            "testimonial active"
                        } else {
                            "testimonial"
                        };
                        html! {
                            <blockquote class={class}>
                                <p>{ *quote }</p>
                                <footer>{ *name }</footer>
                            </blockquote>
                        }
                    })
                }
                <div class="testimonial-dots">
                    {
                        for (0..TESTIMONIALS.len()).map(|index| {
                            let current_testimonial = current_testimonial.clone();
                            let class = if index == *current_testimonial {
                                "nav-dot active"
                            } else {
                                "nav-dot"
                            };
                            html! {
                                <button
                                    class={class}
                                    onclick={Callback::from(move |_| current_testimonial.set(index))}
                                />
                            }
                        })
                    }
                </div>
            </section>

            // The HCP embed script binds its own click handler to this
            // trigger; the modal opener falls back to it when the global
            // object isn't ready.
            <button
                id={config::HCP_HIDDEN_TRIGGER_ID}
                style="display: none;"
                data-token={config::HCP_TOKEN}
                data-orgname={config::HCP_ORGANIZATION}
            />

            <ChatWidget />
        </main>
    }
}
