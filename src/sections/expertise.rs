use yew::prelude::*;

use crate::content::{EXPERTISE_INTRO, PILLARS};
use crate::scroll_spy::SectionId;

#[function_component(Expertise)]
pub fn expertise() -> Html {
    html! {
        <section id={SectionId::Expertise.as_str()} class="expertise-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Core Technology Stack"}</h2>
                    <p>{EXPERTISE_INTRO}</p>
                </div>

                <div class="pillar-grid">
                    { for PILLARS.iter().map(|pillar| html! {
                        <div class={classes!("pillar-card", pillar.accent.class())}>
                            <div class="pillar-icon">{pillar.icon}</div>
                            <h3>{pillar.title}</h3>
                            <p>{pillar.body}</p>
                            <div class="tag-row">
                                { for pillar.tags.iter().map(|tag| html! {
                                    <span class="tag">{*tag}</span>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
