//! Console logging
//!
//! In the browser, messages go straight to `console.log` / `console.warn`.
//! Native builds (tests, desktop hosts) route through the `log` facade instead,
//! since the JS console import is unavailable off `wasm32`.

pub fn info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::info!("{msg}");
    }
}

pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::warn!("{msg}");
    }
}
