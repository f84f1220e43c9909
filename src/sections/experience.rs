use yew::prelude::*;

use crate::components::fallback_image::{FallbackImage, ImageFallback};
use crate::components::rich_text::RichText;
use crate::content::{Job, JOBS};
use crate::scroll_spy::SectionId;

fn job_header(job: &'static Job) -> Html {
    html! {
        <div class="job-header">
            <div class="job-logo">
                <FallbackImage
                    src={job.logo}
                    alt={format!("{} Logo", job.company)}
                    fallback={ImageFallback::Hide}
                />
            </div>
            <h3>{job.role}</h3>
            <div class="job-company">{job.company}</div>
            <div class="job-meta">{format!("📍 {} | {}", job.location, job.period)}</div>
        </div>
    }
}

fn job_highlights(job: &'static Job) -> Html {
    html! {
        <div class="job-card">
            <ul>
                { for job.highlights.iter().map(|spans| html! {
                    <li><RichText spans={*spans} /></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <section id={SectionId::Experience.as_str()} class="experience-section">
            <div class="section-inner narrow">
                <h2 class="section-title">{"Professional Experience"}</h2>

                <div class="timeline">
                    { for JOBS.iter().enumerate().map(|(index, job)| {
                        // Alternate sides down the timeline.
                        let mirrored = index % 2 == 1;
                        html! {
                            <div class={classes!("timeline-entry", mirrored.then(|| "mirrored"))}>
                                <div class={classes!("timeline-dot", job.current.then(|| "current"))}></div>
                                { job_header(job) }
                                { job_highlights(job) }
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
