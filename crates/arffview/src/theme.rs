//! System theme tracking for the component tree.
//!
//! - **Web**: `window.matchMedia("(prefers-color-scheme: dark)")` and its
//!   `change` event
//! - **Desktop**: no preference API is reachable from Rust, so the view stays
//!   light

use arffview_core::theme::{ColorScheme, ColorSchemeSource, ThemeTracker};
use dioxus::prelude::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
fn platform_source() -> browser::MediaQueryColorScheme {
    browser::MediaQueryColorScheme::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_source() -> arffview_core::theme::StaticColorScheme {
    arffview_core::theme::StaticColorScheme::default()
}

/// Current system color scheme, kept up to date while the calling component
/// is mounted.
///
/// One platform source is created on first render: it seeds the signal and
/// feeds the tracker. The tracker keeps the listener for as long as its hook
/// slot lives; unmounting drops it, which unsubscribes.
pub fn use_color_scheme() -> Signal<ColorScheme> {
    let source = use_hook(|| Rc::new(platform_source()));
    let mut scheme = use_signal(|| ColorScheme::from_dark(source.prefers_dark()));

    use_hook(move || {
        Rc::new(ThemeTracker::attach(source.as_ref(), move |next| {
            scheme.set(next)
        }))
    });

    scheme
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use arffview_core::theme::{ColorSchemeSource, Subscription, DARK_SCHEME_QUERY};
    use dioxus::logger::tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{MediaQueryList, MediaQueryListEvent};

    /// `prefers-color-scheme` media query of the current window.
    pub struct MediaQueryColorScheme {
        query: Option<MediaQueryList>,
    }

    impl MediaQueryColorScheme {
        pub fn new() -> Self {
            let query = web_sys::window()
                .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten());
            if query.is_none() {
                warn!("matchMedia unavailable, defaulting to light theme");
            }
            Self { query }
        }
    }

    impl ColorSchemeSource for MediaQueryColorScheme {
        fn prefers_dark(&self) -> bool {
            self.query.as_ref().is_some_and(MediaQueryList::matches)
        }

        fn subscribe(&self, mut on_change: Box<dyn FnMut(bool)>) -> Subscription {
            let Some(query) = self.query.clone() else {
                return Subscription::noop();
            };

            let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
                move |event: MediaQueryListEvent| on_change(event.matches()),
            );

            if let Err(e) =
                query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            {
                warn!("Failed to listen for color scheme changes: {:?}", e);
                return Subscription::noop();
            }

            Subscription::new(move || {
                let _ = query
                    .remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
            })
        }
    }
}
