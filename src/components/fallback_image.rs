use log::warn;
use yew::prelude::*;

/// What an image turns into when it fails to load.
#[derive(Clone, PartialEq)]
pub enum ImageFallback {
    /// Logos: drop the image and let the layout close up.
    Hide,
    /// Photos: keep the frame and show an icon with a label instead.
    Placeholder {
        icon: &'static str,
        label: &'static str,
    },
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub fallback: ImageFallback,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            warn!("Image {} failed to load", src);
            failed.set(true);
        })
    };

    if !*failed {
        return html! {
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={props.class.clone()}
                {onerror}
            />
        };
    }

    match &props.fallback {
        ImageFallback::Hide => html! {},
        ImageFallback::Placeholder { icon, label } => html! {
            <div class="image-placeholder">
                <span class="placeholder-icon">{*icon}</span>
                <span>{*label}</span>
            </div>
        },
    }
}
