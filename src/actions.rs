use panorama_core::{ActionError, ActionSink};
use web_sys as web;

/// Sends hotspot actions to the browser. Called synchronously from the
/// pointer handler so `window.open` still counts as a user gesture.
pub struct WebActionSink {
    window: web::Window,
}

impl WebActionSink {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl ActionSink for WebActionSink {
    fn open_url(&mut self, url: &str, new_tab: bool) -> Result<(), ActionError> {
        if !new_tab {
            return self
                .window
                .location()
                .set_href(url)
                .map_err(|e| ActionError::Unavailable(format!("{:?}", e)));
        }
        match self.window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {
                log::info!("[action] opened {}", url);
                Ok(())
            }
            Ok(None) => Err(ActionError::Blocked {
                url: url.to_string(),
            }),
            Err(e) => Err(ActionError::Unavailable(format!("{:?}", e))),
        }
    }

    fn navigate(&mut self, path: &str) -> Result<(), ActionError> {
        log::info!("[action] navigate {}", path);
        self.window
            .location()
            .set_href(path)
            .map_err(|e| ActionError::Unavailable(format!("{:?}", e)))
    }
}
