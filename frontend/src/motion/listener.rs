use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Event listener on `window` that is removed when dropped.
///
/// Hooks keep one of these inside their effect and drop it in the cleanup, so
/// the subscription ends on every unmount path.
pub struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(events: &'static [&'static str], callback: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);

        for event in events {
            if let Err(err) = window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("could not listen for {event}: {err:?}");
            }
        }

        Some(Self {
            window,
            events,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Current vertical scroll offset of the page, 0 when unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch(name: &str) {
        let event = web_sys::Event::new(name).expect("create event");
        web_sys::window()
            .expect("window")
            .dispatch_event(&event)
            .expect("dispatch");
    }

    #[wasm_bindgen_test]
    fn listener_stops_after_drop() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let listener = WindowListener::new(&["scroll", "resize"], move || {
            counter.set(counter.get() + 1)
        })
        .expect("window available");

        dispatch("scroll");
        dispatch("resize");
        assert_eq!(hits.get(), 2);

        drop(listener);
        dispatch("scroll");
        dispatch("resize");
        assert_eq!(hits.get(), 2);
    }
}
