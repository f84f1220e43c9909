use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::scroll_spy::{NavigationAction, ScrollSample, SectionId, Viewport};

/// The browser window, read through `web_sys`.
#[derive(Clone)]
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_top(&self, id: SectionId) -> Option<f64> {
        self.document
            .get_element_by_id(id.as_str())
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn smooth_scroll_to(&self, id: SectionId) -> bool {
        let Some(element) = self.document.get_element_by_id(id.as_str()) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// A `scroll` listener on the window that hands a measured sample to `sink`
/// on every event. Removed from the window when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn register<F>(sink: F) -> Option<Self>
    where
        F: Fn(NavigationAction) + 'static,
    {
        let Some(viewport) = DomViewport::current() else {
            warn!("No window available, scroll-spy disabled");
            return None;
        };
        let window = viewport.window().clone();

        let callback = Closure::wrap(Box::new(move || {
            sink(NavigationAction::Scrolled(ScrollSample::measure(&viewport)));
        }) as Box<dyn FnMut()>);

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to register scroll listener: {:?}", err);
            return None;
        }

        info!("Scroll-spy listener registered");
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_scroll(window: &Window) {
        let event = Event::new("scroll").expect("scroll event");
        window.dispatch_event(&event).expect("dispatch scroll");
    }

    #[wasm_bindgen_test]
    fn listener_stops_receiving_events_once_dropped() {
        let window = web_sys::window().expect("window");
        let received = Rc::new(Cell::new(0));

        let listener = {
            let received = received.clone();
            ScrollListener::register(move |action| {
                if let NavigationAction::Scrolled(_) = action {
                    received.set(received.get() + 1);
                }
            })
        };
        assert!(listener.is_some());

        fire_scroll(&window);
        assert_eq!(received.get(), 1);

        drop(listener);
        fire_scroll(&window);
        assert_eq!(received.get(), 1);
    }

    #[wasm_bindgen_test]
    fn each_event_carries_a_sample_of_every_section() {
        let window = web_sys::window().expect("window");
        let samples = Rc::new(Cell::new(0));

        let _listener = {
            let samples = samples.clone();
            ScrollListener::register(move |action| {
                if let NavigationAction::Scrolled(sample) = action {
                    samples.set(sample.tops.len());
                }
            })
        };

        fire_scroll(&window);
        assert_eq!(samples.get(), crate::scroll_spy::SECTIONS.len());
    }
}
