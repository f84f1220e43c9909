use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{FOOTER_LINKS, PROFILE};
use crate::scroll_spy::SectionId;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h4>{PROFILE.name}</h4>
                    <p class="footer-blurb">{PROFILE.tagline}</p>
                    <div class="footer-socials">
                        <a href={PROFILE.linkedin_url}>{"LinkedIn"}</a>
                        <a href={PROFILE.github_url}>{"GitHub"}</a>
                    </div>
                </div>

                <div>
                    <h4>{"Contact"}</h4>
                    <div class="footer-contact">
                        <div>{"✉ "}{config::CONTACT_EMAIL}</div>
                        <div>{"☎ "}{PROFILE.phone}</div>
                        <div>{"📍 "}{PROFILE.location}</div>
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <div class="footer-links">
                        { for FOOTER_LINKS.iter().map(|link| {
                            let on_navigate = props.on_navigate.clone();
                            let target = link.target;
                            html! {
                                <button onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(target))}>
                                    {link.label}
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, PROFILE.name)}
            </div>
        </footer>
    }
}
