use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::fallback_image::{FallbackImage, ImageFallback};
use crate::components::rich_text::RichText;
use crate::config;
use crate::content::{HERO_SUMMARY, PROFILE};
use crate::scroll_spy::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let view_work = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Projects))
    };

    html! {
        <section id={SectionId::Home.as_str()} class="hero-section">
            <div class="hero-grid">
                <div class="hero-text">
                    <div class="hero-badge">{PROFILE.headline_badge}</div>
                    <h1>
                        {"Architecting "}<span class="gradient-text">{"Resilient"}</span>{" Solutions"}
                    </h1>
                    <p class="hero-summary"><RichText spans={HERO_SUMMARY} /></p>

                    <div class="hero-actions">
                        <button class="primary-button" onclick={view_work}>
                            {"View Work ›"}
                        </button>
                        <button class="secondary-button">
                            {"⤓ Resume"}
                        </button>
                    </div>

                    <div class="hero-socials">
                        <a href={PROFILE.linkedin_url}>{"LinkedIn"}</a>
                        <a href={PROFILE.github_url}>{"GitHub"}</a>
                        <a href={config::mailto()}>{"Email"}</a>
                    </div>
                </div>

                <div class="headshot-wrapper">
                    <div class="headshot-frame">
                        <div class="headshot-shape tilt-right"></div>
                        <div class="headshot-shape tilt-left"></div>
                        <div class="headshot-card">
                            <FallbackImage
                                src="/assets/professional_headshot.jpg"
                                alt={PROFILE.name}
                                class={classes!("headshot-image")}
                                fallback={ImageFallback::Placeholder {
                                    icon: "📸",
                                    label: "professional_headshot.jpg",
                                }}
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
