use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

const FRAME_MS: u32 = 16;

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Scroll position `elapsed_ms` into an eased scroll from `start` to `target`.
pub fn scroll_offset(start: f64, target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return target;
    }
    start + (target - start) * ease_in_out_cubic(elapsed_ms / duration_ms)
}

/// Smoothly scrolls the window so the element with `id` sits at the top.
/// Missing elements are ignored.
pub fn smooth_scroll_to(id: &str, duration_ms: u32) {
    let Some(window) = web_sys::window() else { return };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("No element #{} to scroll to", id);
        return;
    };

    let start = window.scroll_y().unwrap_or(0.0);
    let target = start + element.get_bounding_client_rect().top();
    let duration = f64::from(duration_ms);
    if duration_ms == 0 {
        window.scroll_to_with_x_and_y(0.0, target);
        return;
    }

    spawn_local(async move {
        let mut elapsed = 0.0;
        while elapsed < duration {
            TimeoutFuture::new(FRAME_MS).await;
            elapsed += f64::from(FRAME_MS);
            window.scroll_to_with_x_and_y(0.0, scroll_offset(start, target, elapsed, duration));
        }
    });
}
