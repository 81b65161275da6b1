//! Hard redirects out of the current view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Expired sessions (401) and logout must land on `/login` no matter which
//! page issued the call. Those callers sit below the router, so they go
//! through this seam instead of `use_navigate`.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

#[cfg(test)]
use parking_lot::Mutex;

pub trait Redirect: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Full-page `window.location` redirect.
///
/// A redirect to the page already displayed is skipped, so a rejected login
/// does not reload the login form and drop its error toast.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRedirect;

impl Redirect for BrowserRedirect {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            if location.pathname().is_ok_and(|current| current == path) {
                return;
            }
            if location.set_href(path).is_err() {
                log::error!("redirect to {path} failed");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}

/// Records redirect targets instead of following them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRedirect {
    targets: Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingRedirect {
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().clone()
    }
}

#[cfg(test)]
impl Redirect for RecordingRedirect {
    fn redirect(&self, path: &str) {
        self.targets.lock().push(path.to_owned());
    }
}
