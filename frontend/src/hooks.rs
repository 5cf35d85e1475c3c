use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::utils::device::DeviceProfile;
use crate::utils::timing::Debouncer;

const RESIZE_DEBOUNCE_MS: u32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MousePosition {
    pub x: i32,
    pub y: i32,
}

/// Pointer coordinates for as long as the calling component is mounted.
#[hook]
pub fn use_mouse_position() -> MousePosition {
    let position = use_state(MousePosition::default);
    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set(MousePosition {
                x: e.client_x(),
                y: e.client_y(),
            });
        });
    }
    *position
}

/// Device profile, re-read once the window stops resizing.
#[hook]
pub fn use_device_profile() -> DeviceProfile {
    let profile = use_state(DeviceProfile::detect);
    let debouncer = use_mut_ref(|| Debouncer::new(RESIZE_DEBOUNCE_MS));
    {
        let profile = profile.clone();
        use_event_with_window("resize", move |_: Event| {
            let profile = profile.clone();
            debouncer
                .borrow_mut()
                .call(move || profile.set(DeviceProfile::detect()));
        });
    }
    (*profile).clone()
}

/// Scrolls to the top of the page on initial mount only.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
