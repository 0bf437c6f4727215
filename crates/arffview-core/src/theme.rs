//! System color-scheme tracking.
//!
//! A [`ColorSchemeSource`] reports the current preference and delivers change
//! notifications. [`ThemeTracker`] reads the preference once, subscribes for
//! its own lifetime and unsubscribes when dropped, so holding the tracker in a
//! component's hook slot ties the listener to the component's mount.

use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Media query matched by a dark system preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// Modifier suffix used by the stylesheet (`av-app--dark`).
    pub fn css_modifier(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Listener registration. Dropping it removes the listener exactly once.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Registration that holds nothing (source without change events).
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Where the system preference comes from.
pub trait ColorSchemeSource {
    /// Current preference.
    fn prefers_dark(&self) -> bool;

    /// Register `on_change`, called with the new preference on every change.
    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription;
}

/// Source with a fixed answer and no change events.
///
/// Used where no preference API exists (desktop webview builds).
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticColorScheme {
    pub dark: bool,
}

impl ColorSchemeSource for StaticColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }

    fn subscribe(&self, _on_change: Box<dyn FnMut(bool)>) -> Subscription {
        Subscription::noop()
    }
}

/// Tracks the preference of a source for as long as it is alive.
#[derive(Debug)]
pub struct ThemeTracker {
    scheme: Rc<Cell<ColorScheme>>,
    _subscription: Subscription,
}

impl ThemeTracker {
    /// Read the initial preference and subscribe to changes.
    ///
    /// `on_change` runs after the tracked value is updated.
    pub fn attach<S>(source: &S, mut on_change: impl FnMut(ColorScheme) + 'static) -> Self
    where
        S: ColorSchemeSource + ?Sized,
    {
        let scheme = Rc::new(Cell::new(ColorScheme::from_dark(source.prefers_dark())));
        debug!("Initial color scheme: {:?}", scheme.get());

        let tracked = Rc::clone(&scheme);
        let subscription = source.subscribe(Box::new(move |dark| {
            let next = ColorScheme::from_dark(dark);
            debug!("Color scheme changed to {:?}", next);
            tracked.set(next);
            on_change(next);
        }));

        Self {
            scheme,
            _subscription: subscription,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }
}
