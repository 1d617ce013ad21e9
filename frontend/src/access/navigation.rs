use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Shared handle to whichever navigator the app provided.
#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    pub fn navigate(&self, path: &str) {
        self.0.navigate(path);
    }
}

/// Full page navigation through `window.location`. Used when no router is mounted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        let Some(win) = web_sys::window() else {
            log::warn!("no window available; dropping navigation to {}", path);
            return;
        };
        if let Err(err) = win.location().assign(path) {
            log::warn!("navigation to {} failed: {:?}", path, err);
        }
    }
}

/// Client-side push navigation through the mounted `<Router/>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Must be called beneath a `<Router/>`.
    pub fn from_router() -> Self {
        Self {
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

pub fn provide_navigator(navigator: impl Navigator + 'static) {
    provide_context(NavigatorHandle::new(navigator));
}

pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>().unwrap_or_else(|| NavigatorHandle::new(LocationNavigator))
}

/// Installs a [`RouterNavigator`] for its subtree.
#[component]
pub fn RouterNavigation(children: Children) -> impl IntoView {
    provide_navigator(RouterNavigator::from_router());
    children()
}

/// Issues a redirect when the target changes into a denied route and stays
/// quiet while it is unchanged.
pub struct RedirectObserver {
    navigator: NavigatorHandle,
    last: Option<String>,
}

impl RedirectObserver {
    pub fn new(navigator: NavigatorHandle) -> Self {
        Self {
            navigator,
            last: None,
        }
    }

    /// Returns true when a navigation was issued.
    pub fn observe(&mut self, target: Option<String>) -> bool {
        if target == self.last {
            return false;
        }
        self.last = target;
        match self.last.as_deref() {
            Some(path) => {
                log::debug!("access denied; redirecting to {}", path);
                self.navigator.navigate(path);
                true
            }
            None => false,
        }
    }
}
