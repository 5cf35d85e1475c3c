use gloo_timers::callback::Timeout;

/// Lets a call through at most once per `interval_ms`.
///
/// Time is passed in by the caller (usually `Date.now()` or an event
/// timestamp) so the gate itself stays pure.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_run: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }
}

/// Runs only the last call made within `delay_ms`.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn call(&mut self, f: impl FnOnce() + 'static) {
        // Replacing the handle drops, and so cancels, the previous timeout
        self.pending = Some(Timeout::new(self.delay_ms, f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_always_passes() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(5_000.0));
    }

    #[test]
    fn calls_inside_the_interval_are_dropped() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(50.0));
        assert!(!throttle.ready(99.9));
        assert!(throttle.ready(100.0));
        assert!(!throttle.ready(150.0));
        assert!(throttle.ready(250.0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::Debouncer;

    wasm_bindgen_test_configure!(run_in_browser);

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce()>) {
        let runs = Rc::new(RefCell::new(Vec::new()));
        let sink = runs.clone();
        let record = move |value: u32| {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(value)) as Box<dyn FnOnce()>
        };
        (runs, record)
    }

    #[wasm_bindgen_test]
    async fn only_the_last_call_in_a_burst_runs() {
        let (runs, record) = recorder();
        let mut debouncer = Debouncer::new(30);

        for value in 1..=3 {
            debouncer.call(record(value));
        }
        assert!(runs.borrow().is_empty());

        TimeoutFuture::new(80).await;
        assert_eq!(*runs.borrow(), vec![3]);
    }

    #[wasm_bindgen_test]
    async fn calls_further_apart_than_the_delay_all_run() {
        let (runs, record) = recorder();
        let mut debouncer = Debouncer::new(20);

        debouncer.call(record(1));
        TimeoutFuture::new(60).await;
        debouncer.call(record(2));
        TimeoutFuture::new(60).await;

        assert_eq!(*runs.borrow(), vec![1, 2]);
    }
}
