use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew::{Children, Properties};

// Element id every call-to-action button scrolls to.
pub const PRICING_ANCHOR: &str = "pricing";

// A page without the anchor logs a warning and leaves the viewport alone.
pub fn scroll_to_pricing() {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(PRICING_ANCHOR));

    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => gloo_console::warn!("no element with id", PRICING_ANCHOR, "- scroll skipped"),
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <button class={classes!("cta-button", props.class.clone())} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    #[prop_or_default]
    pub light: bool,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <h2 class={classes!("section-title", props.light.then_some("light"), props.class.clone())}>
            { for props.children.iter() }
        </h2>
    }
}
