//! タブ可視状態の監視
//!
//! タブが非表示になったらライブ検出を止め、カメラ描画も抑止する。

use wasm_bindgen::prelude::*;

/// 現在タブが非表示かどうか
pub fn is_hidden() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}

/// visibilitychange を監視し、変化のたびに hidden 状態を通知する
pub fn watch_visibility<F>(on_change: F)
where
    F: Fn(bool) + 'static,
{
    let document = web_sys::window().unwrap().document().unwrap();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_change(doc.hidden());
    }) as Box<dyn FnMut(_)>);

    document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())
        .unwrap();
    closure.forget();
}
