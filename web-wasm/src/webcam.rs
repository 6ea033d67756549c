//! カメラストリーム管理
//!
//! getUserMedia によるストリーム取得と停止。facingMode 制約で
//! 前面/背面カメラを選択する。

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use checkcam_common::FacingMode;

/// getUserMedia のビデオ制約
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoConstraints {
    facing_mode: &'static str,
}

/// カメラストリームを開き、ビデオ要素に接続して再生を開始する
pub async fn open_stream(
    video: &HtmlVideoElement,
    facing: FacingMode,
) -> Result<MediaStream, JsValue> {
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::FALSE);
    let video_constraints = serde_wasm_bindgen::to_value(&VideoConstraints {
        facing_mode: facing.constraint_value(),
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    constraints.set_video(&video_constraints);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream: MediaStream = JsFuture::from(promise).await?.dyn_into()?;

    video.set_src_object(Some(&stream));
    JsFuture::from(video.play()?).await?;

    Ok(stream)
}

/// ストリームの全トラックを停止する(カメラ切替・タブ非表示時)
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}
