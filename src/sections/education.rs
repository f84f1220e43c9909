use yew::prelude::*;

use crate::components::fallback_image::{FallbackImage, ImageFallback};
use crate::content::DEGREES;
use crate::scroll_spy::SectionId;

#[function_component(Education)]
pub fn education() -> Html {
    html! {
        <section id={SectionId::Education.as_str()} class="education-section">
            <div class="section-inner narrow">
                <h2 class="section-title">{"Education"}</h2>

                <div class="degree-grid">
                    { for DEGREES.iter().map(|degree| html! {
                        <div class="degree-card">
                            <div class="degree-logo">
                                <FallbackImage
                                    src={degree.logo}
                                    alt={format!("{} Logo", degree.school)}
                                    fallback={ImageFallback::Hide}
                                />
                            </div>
                            <div>
                                <h3>{degree.title}</h3>
                                <p class="degree-school">{degree.school}</p>
                                <p class="degree-meta">{format!("{} | {}", degree.location, degree.period)}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
