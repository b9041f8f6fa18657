use yew::prelude::*;

use crate::config;
use crate::motion::hooks::{use_counter, use_in_view};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: i64,
    #[prop_or(config::COUNTER_DEFAULT_SECONDS)]
    pub duration: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts from 0 to `end` once it has been scrolled into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());
    let count = use_counter(props.end, props.duration, visible);

    html! {
        <span ref={node} class="animated-counter">
            { format!("{count}{}", props.suffix) }
        </span>
    }
}
