use leptos_router::NavigateOptions;
use std::{cell::RefCell, rc::Rc};

use super::timer;

pub trait Navigator {
    fn navigate(&self, path: &str);

    /// Navigates once `delay_ms` has passed.
    fn navigate_after(&self, path: &str, delay_ms: u32);
}

/// Full page navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn navigate(&self, path: &str) {
        log::info!("navigating to {}", path);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn navigate(&self, path: &str) {
        log::info!("navigation to {} skipped outside the browser", path);
    }

    fn navigate_after(&self, path: &str, delay_ms: u32) {
        let path = path.to_string();
        timer::after(delay_ms, move || BrowserNavigator.navigate(&path));
    }
}

type NavigateFn = Rc<dyn Fn(&str, NavigateOptions)>;

/// Client-side navigation through the router, keeping in-memory state alive.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: NavigateFn,
}

impl RouterNavigator {
    /// Must be called below `<Router>`.
    pub fn from_router() -> Self {
        let navigate = leptos_router::use_navigate();
        Self {
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::info!("navigating to {}", path);
        (self.navigate)(path, NavigateOptions::default());
    }

    fn navigate_after(&self, path: &str, delay_ms: u32) {
        let path = path.to_string();
        let this = self.clone();
        timer::after(delay_ms, move || this.navigate(&path));
    }
}

/// Keeps the visited paths instead of leaving the page.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
    scheduled: Rc<RefCell<Vec<(String, u32)>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn scheduled(&self) -> Vec<(String, u32)> {
        self.scheduled.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }

    fn navigate_after(&self, path: &str, delay_ms: u32) {
        self.scheduled.borrow_mut().push((path.to_string(), delay_ms));
    }
}
