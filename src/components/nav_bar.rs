use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{NAV_LINKS, PROFILE};
use crate::scroll_spy::SectionId;

/// Hands the contact address to the OS mail client.
pub fn open_mail_client() {
    let Some(window) = web_sys::window() else {
        warn!("No window available, cannot open mail client");
        return;
    };
    if let Err(err) = window.open_with_url(&config::mailto()) {
        warn!("Failed to open mail client: {:?}", err);
    }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    target: SectionId,
    label: &'static str,
    active: bool,
    on_navigate: Callback<SectionId>,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        let target = props.target;
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };

    html! {
        <button class={classes!("nav-link", props.active.then(|| "active"))} {onclick}>
            {props.label}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active_section: SectionId,
    pub is_scrolled: bool,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps { active_section, is_scrolled, on_navigate } = props;

    let go_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Home))
    };

    let contact = Callback::from(|_: MouseEvent| open_mail_client());

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo" onclick={go_home}>
                    {PROFILE.initials}<span class="logo-dot">{"."}</span>
                </div>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <NavLink
                            target={link.target}
                            label={link.label}
                            active={*active_section == link.target}
                            on_navigate={on_navigate.clone()}
                        />
                    }) }
                </div>
                <button class="nav-contact-button" onclick={contact}>
                    {"✉ Contact Me"}
                </button>
            </div>
        </nav>
    }
}
