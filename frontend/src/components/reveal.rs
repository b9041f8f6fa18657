use yew::prelude::*;

use crate::motion::hooks::use_in_view;

/// Direction an element travels from while it fades in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Zoom,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Up => "from-up",
            RevealFrom::Down => "from-down",
            RevealFrom::Left => "from-left",
            RevealFrom::Right => "from-right",
            RevealFrom::Zoom => "from-zoom",
        }
    }

    /// Alternating left/right entry for two-column grids.
    pub fn alternate(index: usize) -> Self {
        if index % 2 == 0 {
            RevealFrom::Left
        } else {
            RevealFrom::Right
        }
    }
}

/// Delay for the `index`th item of a staggered group.
pub fn stagger_delay(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Animate as soon as mounted instead of waiting to be scrolled to.
    #[prop_or_default]
    pub on_mount: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let mounted = use_state_eq(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    let shown = if props.on_mount { *mounted } else { in_view };
    let class = classes!(
        "reveal",
        props.from.class(),
        shown.then_some("revealed"),
        props.class.clone()
    );
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <@{props.tag.to_string()} ref={node} class={class} style={style}>
            { for props.children.iter() }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_adds_one_step_per_item() {
        assert_eq!(stagger_delay(0, 100, 0), 0);
        assert_eq!(stagger_delay(3, 100, 0), 300);
        assert_eq!(stagger_delay(2, 50, 400), 500);
    }

    #[test]
    fn stagger_saturates_instead_of_overflowing() {
        assert_eq!(stagger_delay(usize::MAX, 100, 10), u32::MAX);
    }

    #[test]
    fn alternate_starts_on_the_left() {
        assert_eq!(RevealFrom::alternate(0), RevealFrom::Left);
        assert_eq!(RevealFrom::alternate(1), RevealFrom::Right);
        assert_eq!(RevealFrom::alternate(4), RevealFrom::Left);
    }
}
