use yew::prelude::*;

use crate::content::Span;

#[derive(Properties, PartialEq)]
pub struct RichTextProps {
    pub spans: &'static [Span],
}

#[function_component(RichText)]
pub fn rich_text(props: &RichTextProps) -> Html {
    html! {
        <>
            { for props.spans.iter().map(|span| match span {
                Span::Plain(text) => html! { {*text} },
                Span::Bold(text) => html! { <strong>{*text}</strong> },
            }) }
        </>
    }
}
