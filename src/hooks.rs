use log::warn;
use yew::prelude::*;

use crate::scroll_spy::{request_jump, NavigationState, SectionId};
use crate::viewport::{DomViewport, ScrollListener};

/// Navigation state plus the jump action handed down to nav controls.
#[derive(Clone, PartialEq)]
pub struct ScrollSpy {
    pub state: NavigationState,
    pub scroll_to: Callback<SectionId>,
}

/// Tracks the scroll position for the lifetime of the calling component.
#[hook]
pub fn use_scroll_spy() -> ScrollSpy {
    let nav = use_reducer(NavigationState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener =
                    ScrollListener::register(move |action| dispatcher.dispatch(action));
                // Unregisters on unmount.
                move || drop(listener)
            },
            (),
        );
    }

    let scroll_to = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |id: SectionId| {
            let Some(viewport) = DomViewport::current() else {
                warn!("No window available, cannot scroll to {}", id);
                return;
            };
            if let Some(action) = request_jump(&viewport, id) {
                dispatcher.dispatch(action);
            }
        })
    };

    ScrollSpy {
        state: *nav,
        scroll_to,
    }
}
