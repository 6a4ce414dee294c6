use yew::prelude::*;

use crate::config;
use crate::hooks::on_screen::use_on_screen;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Stagger offset for grids of cards, in milliseconds.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a block and fades/slides it in the first time it scrolls into
/// view. The animation plays once; scrolling back out does nothing.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, is_visible) = use_on_screen(config::REVEAL_THRESHOLD);

    let style = format!(
        "transition-delay: {}ms; opacity: {}; transform: {};",
        props.delay_ms,
        if is_visible { "1" } else { "0" },
        if is_visible { "translateY(0)" } else { "translateY(20px)" },
    );

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}
