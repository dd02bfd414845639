use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve after `ms` milliseconds on the browser timer queue.
///
/// Without a window the future resolves immediately.
pub async fn sleep_ms(ms: u32) {
    if ms == 0 {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                .is_ok()
        });
        if scheduled != Some(true) {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = JsFuture::from(promise).await;
}

#[inline]
pub fn sleep_sec(seconds: f64) -> impl std::future::Future<Output = ()> {
    sleep_ms((seconds.max(0.0) * 1000.0) as u32)
}
