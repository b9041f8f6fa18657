use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::AnimationFrame;
use web_sys::Element;
use yew::prelude::*;

use super::counter::CounterState;
use super::listener::{scroll_offset, viewport_height, WindowListener};
use super::scroll::{hero_range, HeroElement, SourceBounds, TransformSnapshot};
use super::tick::{BrowserFrames, CounterAnimation, FrameScheduler};
use crate::config;

/// Document-relative bounds of `element`; a missing element has none.
pub fn measure_bounds(element: Option<&Element>, scroll_y: f64) -> SourceBounds {
    match element {
        Some(element) => {
            let rect = element.get_bounding_client_rect();
            SourceBounds::new(rect.top() + scroll_y, rect.height())
        }
        None => SourceBounds::EMPTY,
    }
}

/// Whether a box spanning `top..bottom` (viewport coordinates) is on screen,
/// ignoring `margin` pixels at both edges. An unknown viewport counts as
/// visible so content is never left hidden.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    if viewport_height <= 0.0 {
        return true;
    }
    bottom > margin && top < viewport_height - margin
}

/// Hero transforms for the section behind `section`, re-evaluated at most
/// once per render tick while the page scrolls or resizes.
#[hook]
pub fn use_hero_transforms(section: NodeRef) -> TransformSnapshot<HeroElement> {
    let snapshot = use_state_eq(|| hero_range().at_rest());

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |section: &NodeRef| {
                let section = section.clone();
                let range = Rc::new(RefCell::new(hero_range()));
                let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

                let evaluate: Rc<dyn Fn(f64)> = {
                    let pending = pending.clone();
                    Rc::new(move |_timestamp| {
                        pending.borrow_mut().take();
                        let offset = scroll_offset();
                        let mut range = range.borrow_mut();
                        // Re-measure every time; the section's height changes
                        // with the viewport.
                        range.set_bounds(measure_bounds(section.cast::<Element>().as_ref(), offset));
                        snapshot.set(range.evaluate(offset));
                    })
                };

                let request_frame = {
                    let pending = pending.clone();
                    move || {
                        if pending.borrow().is_some() {
                            return;
                        }
                        let evaluate = evaluate.clone();
                        let handle = BrowserFrames.request(Box::new(move |timestamp| evaluate(timestamp)));
                        *pending.borrow_mut() = Some(handle);
                    }
                };

                request_frame();
                let listener = WindowListener::new(&["scroll", "resize"], request_frame);

                move || {
                    drop(listener);
                    pending.borrow_mut().take();
                }
            },
            section,
        );
    }

    (*snapshot).clone()
}

/// Latches to `true` the first time the referenced element scrolls into
/// view, then stops listening.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let handle = visible.clone();
        use_effect_with_deps(
            move |(node, seen): &(NodeRef, bool)| {
                let listener = if *seen {
                    None
                } else {
                    let node = node.clone();
                    let check = move || {
                        let Some(element) = node.cast::<Element>() else {
                            return;
                        };
                        let rect = element.get_bounding_client_rect();
                        if intersects_viewport(
                            rect.top(),
                            rect.bottom(),
                            viewport_height(),
                            config::REVEAL_VIEWPORT_MARGIN_PX,
                        ) {
                            handle.set(true);
                        }
                    };
                    check();
                    WindowListener::new(&["scroll", "resize"], check)
                };
                move || drop(listener)
            },
            (node, *visible),
        );
    }

    *visible
}

/// Displayed value of a count-up animation that runs while `active`.
///
/// Invalid parameters skip the animation and show the target straight away
/// (negative targets show 0).
#[hook]
pub fn use_counter(target: i64, duration_secs: f64, active: bool) -> u64 {
    let count = use_state_eq(|| 0u64);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |&(target, duration_secs, active): &(i64, f64, bool)| {
                let animation = if !active {
                    None
                } else {
                    match CounterState::new(target, duration_secs) {
                        Ok(state) => {
                            log::debug!("counter to {target} over {duration_secs}s started");
                            Some(CounterAnimation::start(
                                state,
                                BrowserFrames,
                                Callback::from(move |value| count.set(value)),
                            ))
                        }
                        Err(err) => {
                            log::warn!("{err}; showing the value without animation");
                            count.set(target.max(0) as u64);
                            None
                        }
                    }
                };
                move || drop(animation)
            },
            (target, duration_secs, active),
        );
    }

    *count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_inside_viewport_is_visible() {
        assert!(intersects_viewport(100.0, 300.0, 800.0, 40.0));
        assert!(intersects_viewport(-500.0, 1500.0, 800.0, 40.0));
    }

    #[test]
    fn element_below_or_above_viewport_is_not_visible() {
        assert!(!intersects_viewport(900.0, 1200.0, 800.0, 40.0));
        assert!(!intersects_viewport(770.0, 900.0, 800.0, 40.0));
        assert!(!intersects_viewport(-300.0, 20.0, 800.0, 40.0));
    }

    #[test]
    fn unknown_viewport_reveals_everything() {
        assert!(intersects_viewport(5000.0, 5200.0, 0.0, 40.0));
    }

    #[test]
    fn missing_element_has_empty_bounds() {
        let bounds = measure_bounds(None, 1200.0);
        assert_eq!(bounds, SourceBounds::EMPTY);
        assert_eq!(bounds.progress(1200.0), 0.0);
    }
}
