use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

/// Strictly greater-than: sitting exactly on the threshold still counts as
/// "at the top".
pub fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD_PX
}

/// Samples the vertical scroll position and reports whether it is past the
/// nav threshold. Scroll events are coalesced through
/// `requestAnimationFrame` so at most one sample lands per frame.
#[hook]
pub fn use_scroll_watch(on_sample: Callback<bool>) {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                // Initial sample so a page restored mid-scroll paints right.
                if let Ok(scroll_y) = window.scroll_y() {
                    on_sample.emit(past_threshold(scroll_y));
                }

                let pending = Rc::new(Cell::new(false));
                let callback = Closure::wrap(Box::new(move || {
                    if pending.get() {
                        return;
                    }
                    pending.set(true);
                    let pending = pending.clone();
                    let on_sample = on_sample.clone();
                    let frame = Closure::once_into_js(move || {
                        pending.set(false);
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                on_sample.emit(past_threshold(scroll_y));
                            }
                        }
                    });
                    if let Some(win) = web_sys::window() {
                        let _ = win.request_animation_frame(frame.unchecked_ref());
                    }
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        win.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    }
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_reads_as_top() {
        assert!(!past_threshold(19.0));
    }

    #[test]
    fn exactly_on_threshold_reads_as_top() {
        assert!(!past_threshold(20.0));
    }

    #[test]
    fn past_threshold_reads_as_scrolled() {
        assert!(past_threshold(21.0));
    }
}
