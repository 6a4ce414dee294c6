use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Pointer-driven 2D offset shared by the decorative hero elements.
/// Each axis is zero at the viewport centre and bounded by
/// +-sensitivity/2 at the edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

impl ParallaxOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn from_pointer(px: f64, py: f64, width: f64, height: f64, sensitivity: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::ZERO;
        }
        Self {
            x: (px / width - 0.5) * sensitivity,
            y: (py / height - 0.5) * sensitivity,
        }
    }
}

/// Tracks the pointer for the lifetime of the calling component. One window
/// subscription per tracker; consumers read the same offset and apply their
/// own per-element scale and sign.
#[hook]
pub fn use_parallax(sensitivity: f64) -> ParallaxOffset {
    let offset = use_state(ParallaxOffset::default);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |sensitivity| {
                let sensitivity = *sensitivity;
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                        if let Some(win) = web_sys::window() {
                            let width =
                                win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                            let height =
                                win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                            offset.set(ParallaxOffset::from_pointer(
                                event.client_x() as f64,
                                event.client_y() as f64,
                                width,
                                height,
                                sensitivity,
                            ));
                        }
                    })
                        as Box<dyn FnMut(MouseEvent)>);
                    window
                        .add_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "mousemove",
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
            sensitivity,
        );
    }

    *offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    const W: f64 = 1920.0;
    const H: f64 = 1080.0;

    #[test]
    fn centre_of_viewport_is_zero() {
        let offset = ParallaxOffset::from_pointer(W / 2.0, H / 2.0, W, H, 30.0);
        assert_eq!(offset, ParallaxOffset::ZERO);
    }

    #[test]
    fn bounded_by_half_sensitivity_inside_viewport() {
        let sensitivity = 30.0;
        for &(px, py) in &[
            (0.0, 0.0),
            (W, 0.0),
            (0.0, H),
            (W, H),
            (W / 4.0, H * 0.9),
            (W * 0.66, H / 3.0),
        ] {
            let offset = ParallaxOffset::from_pointer(px, py, W, H, sensitivity);
            assert!(offset.x.abs() <= sensitivity / 2.0);
            assert!(offset.y.abs() <= sensitivity / 2.0);
        }
    }

    #[test]
    fn edges_reach_half_sensitivity() {
        let sensitivity = config::PARALLAX_SENSITIVITY;
        let offset = ParallaxOffset::from_pointer(W, H, W, H, sensitivity);
        assert_eq!(offset.x, sensitivity / 2.0);
        assert_eq!(offset.y, sensitivity / 2.0);

        let offset = ParallaxOffset::from_pointer(0.0, 0.0, W, H, sensitivity);
        assert_eq!(offset.x, -sensitivity / 2.0);
        assert_eq!(offset.y, -sensitivity / 2.0);
    }

    #[test]
    fn doubling_distance_from_centre_doubles_offset() {
        let near = ParallaxOffset::from_pointer(W / 2.0 + 100.0, H / 2.0, W, H, 30.0);
        let far = ParallaxOffset::from_pointer(W / 2.0 + 200.0, H / 2.0, W, H, 30.0);
        assert!((far.x - near.x * 2.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_viewport_yields_zero() {
        let offset = ParallaxOffset::from_pointer(10.0, 10.0, 0.0, 0.0, 20.0);
        assert_eq!(offset, ParallaxOffset::ZERO);
    }
}
