use wasm_bindgen::prelude::*;
use js_sys::Array;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// Reads a JS array of at least `D` numbers into a point.
pub fn parse_js_point<const D: usize>(val: &JsValue) -> Option<[f64; D]> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() < D as u32 {
        return None;
    }
    let mut point = [0.0; D];
    for i in 0..D {
        point[i] = arr.get(i as u32).as_f64()?;
    }
    Some(point)
}

/// Maps a JS neighbor count onto the Rust one, negative counts ask for nothing.
pub fn js_count(k: i32) -> usize {
    usize::try_from(k).unwrap_or(0)
}
