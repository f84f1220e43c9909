use yew::prelude::*;

use crate::components::fallback_image::{FallbackImage, ImageFallback};
use crate::components::rich_text::RichText;
use crate::content::{ABOUT_PARAGRAPHS, ABOUT_STATS};
use crate::scroll_spy::SectionId;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.as_str()} class="about-section">
            <div class="about-grid">
                <div class="action-photo">
                    <div class="action-photo-overlay">
                        <div class="overlay-caption">{"Full Stack Architecture"}</div>
                    </div>
                    <FallbackImage
                        src="/assets/action_photo_placeholder.jpg"
                        alt="Workspace or Action Shot"
                        class={classes!("action-photo-image")}
                        fallback={ImageFallback::Placeholder {
                            icon: "💻",
                            label: "Action / Workspace Photo",
                        }}
                    />
                </div>

                <div class="about-text">
                    <h2>{"About Me"}</h2>
                    { for ABOUT_PARAGRAPHS.iter().map(|spans| html! {
                        <p><RichText spans={*spans} /></p>
                    }) }
                    <div class="stat-grid">
                        { for ABOUT_STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
