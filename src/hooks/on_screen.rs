use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot visibility gate for entrance animations. A region starts out
/// watching, flips to triggered the first time enough of it is inside the
/// viewport, and stays triggered no matter what the viewport does next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Watching,
    Triggered,
}

impl RevealPhase {
    pub fn observe(self, intersecting: bool, ratio: f64, threshold: f64) -> Self {
        match self {
            RevealPhase::Triggered => RevealPhase::Triggered,
            RevealPhase::Watching if intersecting && ratio >= threshold => RevealPhase::Triggered,
            RevealPhase::Watching => RevealPhase::Watching,
        }
    }

    pub fn is_triggered(self) -> bool {
        matches!(self, RevealPhase::Triggered)
    }
}

/// Watches the returned node and reports whether it has entered the
/// viewport at least once. `threshold` is the fraction of the region that
/// has to be visible before that counts.
///
/// The observer is released on the first qualifying intersection or when
/// the region unmounts, whichever comes first.
#[hook]
pub fn use_on_screen(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let is_visible = use_state(|| false);

    {
        let node = node.clone();
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(element) = node.cast::<Element>()
                {
                    let phase = Rc::new(Cell::new(RevealPhase::default()));
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                                else {
                                    continue;
                                };
                                let next = phase.get().observe(
                                    entry.is_intersecting(),
                                    entry.intersection_ratio(),
                                    threshold,
                                );
                                if next.is_triggered() && !phase.get().is_triggered() {
                                    phase.set(next);
                                    is_visible.set(true);
                                    // Entrance animations play once; stop
                                    // observing as soon as we have fired.
                                    observer.disconnect();
                                    break;
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Box::new(move || {
                                // Idempotent; a no-op when the callback
                                // already disconnected on first trigger.
                                observer.disconnect();
                                drop(callback);
                            })
                        }
                        Err(_) => Box::new(move || drop(callback)),
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    (node, *is_visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_at_exact_threshold() {
        let phase = RevealPhase::default().observe(true, 0.1, 0.1);
        assert!(phase.is_triggered());
    }

    #[test]
    fn stays_watching_just_below_threshold() {
        let phase = RevealPhase::default().observe(true, 0.099, 0.1);
        assert_eq!(phase, RevealPhase::Watching);
    }

    #[test]
    fn ignores_non_intersecting_reports() {
        let phase = RevealPhase::default().observe(false, 0.5, 0.1);
        assert_eq!(phase, RevealPhase::Watching);
    }

    #[test]
    fn never_reverts_once_triggered() {
        let mut phase = RevealPhase::default().observe(true, 0.8, 0.1);
        assert!(phase.is_triggered());

        // Scrolled back out of view: the flag must hold.
        phase = phase.observe(false, 0.0, 0.1);
        assert!(phase.is_triggered());

        phase = phase.observe(true, 0.05, 0.1);
        assert!(phase.is_triggered());
    }
}
