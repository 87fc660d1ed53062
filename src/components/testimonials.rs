use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::{Slider, SliderAction, ADVANCE_INTERVAL_MS};

// card width + gap
const SLIDE_WIDTH_PX: usize = 430;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    portrait: &'static str,
    quote: &'static str,
}

const QUOTE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nulla \
    tincidunt in malesuada tristique arcu non eu lectus orci. Amet non, sed eget \
    ultrices cursus diam orci. Risus sed tristique lectus fusce lacus.";

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Charles Dim",
        role: "Lead Designer, Netflix",
        portrait: "/images/client1.png",
        quote: QUOTE,
    },
    Testimonial {
        name: "Margeret Wills",
        role: "CEO, Ebay",
        portrait: "/images/client2.png",
        quote: QUOTE,
    },
    Testimonial {
        name: "John Carter",
        role: "Marketing Head, Bolt",
        portrait: "/images/client1.png",
        quote: QUOTE,
    },
    Testimonial {
        name: "Lisa Brown",
        role: "CTO, PayPal",
        portrait: "/images/client2.png",
        quote: QUOTE,
    },
];

fn first_touch_x(e: &TouchEvent) -> Option<i32> {
    e.touches().get(0).map(|touch| touch.client_x())
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let slider = use_reducer_eq(|| Slider::new(TESTIMONIALS.len()));

    // Auto-advance runs only while unpaused; toggling pause drops the old
    // interval and starts a fresh full one, and unmount drops it for good.
    {
        let paused = slider.paused();
        let slider = slider.clone();
        use_effect_with_deps(
            move |paused: &bool| {
                let interval = (!paused).then(|| {
                    Interval::new(ADVANCE_INTERVAL_MS, move || {
                        slider.dispatch(SliderAction::Tick)
                    })
                });
                move || drop(interval)
            },
            paused,
        );
    }

    let on_mouse_enter = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::SetPaused(true)))
    };
    let on_mouse_leave = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::SetPaused(false)))
    };
    let on_mouse_down = {
        let slider = slider.clone();
        Callback::from(move |e: MouseEvent| slider.dispatch(SliderAction::DragStart(e.client_x())))
    };
    let on_mouse_move = {
        let slider = slider.clone();
        Callback::from(move |e: MouseEvent| slider.dispatch(SliderAction::DragMove(e.client_x())))
    };
    let on_mouse_up = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::DragEnd))
    };
    let on_touch_start = {
        let slider = slider.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                slider.dispatch(SliderAction::DragStart(x));
            }
        })
    };
    let on_touch_move = {
        let slider = slider.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                slider.dispatch(SliderAction::DragMove(x));
            }
        })
    };
    let on_touch_end = {
        let slider = slider.clone();
        Callback::from(move |_: TouchEvent| slider.dispatch(SliderAction::DragEnd))
    };
    let on_prev = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::Prev))
    };
    let on_next = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::Next))
    };

    let track_style = format!(
        "transform: translateX(-{}px);",
        slider.active() * SLIDE_WIDTH_PX
    );

    let cards = TESTIMONIALS
        .iter()
        .map(|t| {
            html! {
                <div class="testimonial-card">
                    <div class="client-info">
                        <img src={t.portrait} alt={t.name} />
                        <div>
                            <h3>{ t.name }</h3>
                            <p>{ t.role }</p>
                        </div>
                        <span class="quote">{"\u{201d}"}</span>
                    </div>
                    <p class="testimonial-text">{ t.quote }</p>
                </div>
            }
        })
        .collect::<Html>();

    let dots = (0..TESTIMONIALS.len())
        .map(|i| {
            let onclick = {
                let slider = slider.clone();
                Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::GoTo(i)))
            };
            html! {
                <span
                    key={i.to_string()}
                    class={classes!("dot", (slider.active() == i).then(|| "active"))}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section class="testimonials-section" id="testimonials">
            <h2>{"What my clients say"}</h2>

            <div
                class="testimonials-slider"
                onmouseenter={on_mouse_enter}
                onmouseleave={on_mouse_leave}
                onmousedown={on_mouse_down}
                onmousemove={on_mouse_move}
                onmouseup={on_mouse_up}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
            >
                <button class="nav-btn prev" onclick={on_prev}>{"\u{276e}"}</button>

                <div
                    class={classes!("testimonial-track", slider.dragging().then(|| "dragging"))}
                    style={track_style}
                >
                    { cards }
                </div>

                <button class="nav-btn next" onclick={on_next}>{"\u{276f}"}</button>
            </div>

            <div class="slider-dots">
                { dots }
            </div>
        </section>
    }
}
