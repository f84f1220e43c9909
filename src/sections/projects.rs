use yew::prelude::*;

use crate::components::rich_text::RichText;
use crate::content::{PROFILE, PROJECTS};
use crate::scroll_spy::SectionId;

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id={SectionId::Projects.as_str()} class="projects-section">
            <div class="section-inner">
                <div class="projects-heading">
                    <div>
                        <h2>{"Featured Projects"}</h2>
                        <p>{"Innovation & Personal Development"}</p>
                    </div>
                    <a href={PROFILE.github_url} class="github-link">{"View Github ↗"}</a>
                </div>

                <div class="project-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <div class={classes!("project-card", project.accent.class())}>
                            <div class="project-top">
                                <div class="project-icon">{project.icon}</div>
                                <span class="project-date">{project.date}</span>
                            </div>
                            <h3>{project.title}</h3>
                            <p><RichText spans={project.description} /></p>
                            <div class="tag-row">
                                { for project.tags.iter().map(|tag| html! {
                                    <span class="pill">{*tag}</span>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
