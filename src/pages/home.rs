use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::testimonials::Testimonials;
use crate::components::toast::{ToastHost, ToastKind, ToastMessage};

struct Work {
    title: &'static str,
    image: &'static str,
    days: &'static str,
}

const WORKS: [Work; 6] = [
    Work {
        title: "Ecommerce Landing page",
        image: "/images/work1.jpg",
        days: "11 days",
    },
    Work {
        title: "Basketball Studio",
        image: "/images/work2.jpg",
        days: "9 days",
    },
    Work {
        title: "Perfume Company site",
        image: "/images/work3.jpg",
        days: "10 days",
    },
    Work {
        title: "Health care site",
        image: "/images/work5.jpg",
        days: "11 days",
    },
    Work {
        title: "Real Estate",
        image: "/images/work6.jpg",
        days: "7 days",
    },
    Work {
        title: "Bank Wallet",
        image: "/images/work6.jpg",
        days: "5 days",
    },
];

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="main-header">
            <div class="container">
                <div class="logo">{"IWMYWIF"}</div>
                <nav class="navbar">
                    <ul>
                        <li><a href="#">{"Home"}</a></li>
                        <li><a href="#about">{"About Me"}</a></li>
                        <li><a href="#works">{"Works"}</a></li>
                        <li><a href="#section4">{"Blog"}</a></li>
                        <li>
                            <a href="#contact">
                                <button class="contact-btn">{"Get in Touch"}</button>
                            </a>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero-section">
            <div class="hero-content">
                <h1>
                    {"Create your website "}<br />
                    {"in "}<span class="highlight">{"less than 12 days"}</span>
                </h1>
                <p>
                    {"Hey, I\u{2019}m Mark Es, a web developer with 7 years of experience \
                      building responsive websites and applications. I can build a \
                      high-converting website for you as quick as possible!"}
                </p>
                <a href="#contact" class="hero-btn">{"Get in Touch"}</a>
            </div>

            <div class="hero-image">
                <img src="/images/Main_banner.png" alt="Hero Image" />
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section class="about-section" id="about">
            <div class="about-container">
                <div class="about-icons">
                    <img src="/images/html-icon.png" alt="HTML" />
                    <img src="/images/css-icon.png" alt="CSS" />
                    <img src="/images/react-icon.png" alt="React" />
                    <img src="/images/vue-icon.png" alt="Vue" />
                    <img src="/images/js-icon.png" alt="JavaScript" />
                </div>

                <div class="about-content">
                    <h2>{"About Me"}</h2>
                    <p>
                        {"My passion for building websites started in 2013, and since then \
                          I have helped companies around the world build amazing websites \
                          and products that create real value for businesses and users."}
                    </p>
                    <p>
                        {"I enjoy solving problems with clean, scalable solutions and have \
                          a genuine passion for inspiring design."}
                    </p>
                    <p>
                        {"I am a full-stack developer focusing on core frontend and backend \
                          technologies which include HTML, CSS, JavaScript, React, and \
                          other core languages."}
                    </p>
                </div>
            </div>

            <div class="companies">
                <h3>{"Companies I have worked for"}</h3>
                <div class="companies-logos">
                    <img src="/images/google.png" alt="Google" />
                    <img src="/images/bolt.png" alt="Bolt" />
                    <img src="/images/amazon.png" alt="Amazon" />
                    <img src="/images/paypal.png" alt="PayPal" />
                    <img src="/images/netflix.png" alt="Netflix" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Works)]
fn works() -> Html {
    let cards = WORKS
        .iter()
        .map(|work| {
            html! {
                <div class="work-card">
                    <img src={work.image} alt={work.title} />
                    <div class="work-info">
                        <h3>{ work.title }</h3>
                        <span class="work-days">{ work.days }</span>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="works-section" id="works">
            <div class="works-container">
                <h2>{"My Recent Works"}</h2>
                <div class="works-grid">
                    { cards }
                </div>
                <a href="#more" class="see-more-btn">{"See More"}</a>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-container">
                <div class="footer-left">
                    <h3>{"IWMYWF"}</h3>
                </div>

                <div class="footer-center">
                    <p>{"\u{a9} Copyright 2021. All rights reserved"}</p>
                </div>

                <div class="footer-right">
                    <span>{"Connect with me:"}</span>
                    <a href="#" class="social-icon">
                        <img src="/images/facebook.png" alt="Facebook" />
                    </a>
                    <a href="#" class="social-icon">
                        <img src="/images/twitter.png" alt="Twitter" />
                    </a>
                    <a href="#" class="social-icon">
                        <img src="/images/github.png" alt="GitHub" />
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let toast = use_state(|| None::<ToastMessage>);
    let toast_seq = use_mut_ref(|| 0u32);

    let notify = {
        let toast = toast.clone();
        let toast_seq = toast_seq.clone();
        Callback::from(move |(kind, text): (ToastKind, String)| {
            let mut seq = toast_seq.borrow_mut();
            *seq += 1;
            toast.set(Some(ToastMessage {
                id: *seq,
                kind,
                text,
            }));
        })
    };
    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <>
            <Header />
            <Hero />
            <About />
            <Works />
            <Testimonials />
            <Contact {notify} />
            <Footer />
            <ToastHost toast={(*toast).clone()} {on_dismiss} />
        </>
    }
}
