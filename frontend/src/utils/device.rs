//! Device capability checks used to decide how much animation to render.

const MOBILE_MAX_WIDTH: f64 = 768.0;
const LOW_END_MAX_CORES: u32 = 4;

const MOBILE_AGENT_MARKERS: [&str; 6] = ["Android", "iPhone", "iPad", "iPod", "Mobile", "Opera Mini"];

/// Snapshot of the browser environment. Only `detect` reads globals.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfile {
    pub cores: u32,
    pub user_agent: String,
    pub viewport_width: f64,
    pub reduced_motion: bool,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            cores: 8,
            user_agent: String::new(),
            viewport_width: 1280.0,
            reduced_motion: false,
        }
    }
}

impl DeviceProfile {
    pub fn detect() -> Self {
        let fallback = Self::default();
        let Some(window) = web_sys::window() else {
            return fallback;
        };
        let navigator = window.navigator();

        let cores = navigator.hardware_concurrency() as u32;
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);

        Self {
            // Some browsers report 0 when the value is hidden
            cores: if cores == 0 { fallback.cores } else { cores },
            user_agent: navigator.user_agent().unwrap_or_default(),
            viewport_width: window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(fallback.viewport_width),
            reduced_motion,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= MOBILE_MAX_WIDTH
            || MOBILE_AGENT_MARKERS
                .iter()
                .any(|marker| self.user_agent.contains(marker))
    }

    pub fn is_low_end(&self) -> bool {
        self.cores <= LOW_END_MAX_CORES
    }

    pub fn allows_rich_animation(&self) -> bool {
        !self.reduced_motion && !self.is_low_end() && !self.is_mobile()
    }
}
