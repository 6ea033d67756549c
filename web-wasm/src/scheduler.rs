//! フレームクロックのブラウザ実装
//!
//! requestAnimationFrame を Promise 化して await 可能にする。
//! ライブ検出ループはサイクル末尾でここを待機し、表示更新の
//! サイクルへ協調的に譲る。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use checkcam_common::FrameClock;

/// requestAnimationFrame ベースのフレームクロック
#[derive(Clone, Copy, Default)]
pub struct RafClock;

impl FrameClock for RafClock {
    async fn next_frame(&self) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let cb = Closure::once_into_js(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            web_sys::window()
                .expect("no window")
                .request_animation_frame(cb.unchecked_ref())
                .expect("requestAnimationFrame failed");
        });
        let _ = JsFuture::from(promise).await;
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn wasm_next_frame_resolves() {
        // 次フレームで再開できること
        RafClock.next_frame().await;
    }
}
