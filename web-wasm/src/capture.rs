//! フレームキャプチャ
//!
//! 現在のビデオフレームをオーバーレイ用キャンバスへ描画する。
//! 前面カメラではプレビューの鏡像と一致するよう水平反転を掛け、
//! 描画後に単位行列へ戻す。

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};

use checkcam_common::{CaptureTransform, FacingMode};

/// 2Dコンテキスト取得オプション
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Context2dOptions {
    will_read_frequently: bool,
}

/// キャンバスの2D描画コンテキストを取得する(willReadFrequently指定)
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let options = serde_wasm_bindgen::to_value(&Context2dOptions {
        will_read_frequently: true,
    })
    .ok()?;
    canvas
        .get_context_with_context_options("2d", &options)
        .ok()??
        .dyn_into()
        .ok()
}

/// 現在のビデオフレームをキャンバスへ描画し、コンテキストを返す
///
/// ビデオまたはキャンバスが未マウントの場合は何もせず None
/// (次のユーザー操作での再試行に任せる)。
pub fn capture_frame(
    video: Option<HtmlVideoElement>,
    canvas: Option<HtmlCanvasElement>,
    facing: FacingMode,
) -> Option<CanvasRenderingContext2d> {
    let video = video?;
    let canvas = canvas?;
    let ctx = context_2d(&canvas)?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let t = facing.capture_transform(width);
    ctx.set_transform(t.a, t.b, t.c, t.d, t.e, t.f).ok()?;
    ctx.draw_image_with_html_video_element_and_dw_and_dh(&video, 0.0, 0.0, width, height)
        .ok()?;

    let id = CaptureTransform::IDENTITY;
    ctx.set_transform(id.a, id.b, id.c, id.d, id.e, id.f).ok()?;

    Some(ctx)
}

/// キャンバス内容を同サイズのオフスクリーンコピーへ複製する
///
/// 単発キャプチャでは、コピー側に推論・枠描画を済ませてから可視
/// キャンバスへ一括で書き戻すことで、描きかけのオーバーレイが
/// 見えないようにする。
pub fn copy_canvas(ctx: &CanvasRenderingContext2d) -> Option<CanvasRenderingContext2d> {
    let source = ctx.canvas()?;
    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
    canvas.set_width(source.width());
    canvas.set_height(source.height());

    let copy_ctx = context_2d(&canvas)?;
    copy_ctx
        .draw_image_with_html_canvas_element(&source, 0.0, 0.0)
        .ok()?;
    Some(copy_ctx)
}

/// オフスクリーンコピーを可視キャンバスへサイズ合わせで書き戻す
pub fn blit_back(ctx: &CanvasRenderingContext2d, copy: &CanvasRenderingContext2d) {
    let (Some(target), Some(source)) = (ctx.canvas(), copy.canvas()) else {
        return;
    };
    let _ = ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
        &source,
        0.0,
        0.0,
        target.width() as f64,
        target.height() as f64,
    );
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_capture_without_elements_is_noop() {
        // 未マウント時は副作用なしで None
        assert!(capture_frame(None, None, FacingMode::Environment).is_none());
    }

    #[wasm_bindgen_test]
    fn wasm_context_2d_on_fresh_canvas() {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(context_2d(&canvas).is_some());
    }

    #[wasm_bindgen_test]
    fn wasm_copy_canvas_matches_source_size() {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(320);
        canvas.set_height(240);
        let ctx = context_2d(&canvas).unwrap();

        let copy = copy_canvas(&ctx).unwrap();
        let copy_canvas = copy.canvas().unwrap();
        assert_eq!(copy_canvas.width(), 320);
        assert_eq!(copy_canvas.height(), 240);
    }
}
