//! カメラコンポーネント
//!
//! プレビュー映像・オーバーレイキャンバス・操作ボタン群を持ち、
//! 「キャプチャ -> 推論 -> チェックリスト反映」の流れを統括する。
//! ライブ検出は requestAnimationFrame に同期した協調的ループで、
//! 停止要求はサイクル先頭のフラグ確認でのみ反映される。

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, MediaStream};

use checkcam_common::{
    record_detection, run_live_loop, ChecklistStore, DetectionSession, Error, FacingMode,
    LiveToggle, ModelCatalog,
};

use crate::capture::{blit_back, capture_frame, context_2d, copy_canvas};
use crate::detector::{run_detection, Detector};
use crate::scheduler::RafClock;
use crate::visibility;
use crate::webcam;

/// 1フレーム分の推論実行とチェックリスト反映
///
/// 後処理がラベルを返した場合はチェックリストへ追加(未登録時のみ)し、
/// セッションの検出済み集合にも記録する。推論失敗はコンソールに出して
/// 継続する。
async fn run_model<D: Detector>(
    detector: &D,
    checklist: RwSignal<ChecklistStore>,
    session: RwSignal<DetectionSession>,
    ctx: &CanvasRenderingContext2d,
) {
    match run_detection(detector, ctx).await {
        Ok(outcome) => {
            if let Some(label) = &outcome.label {
                checklist.update(|store| {
                    session.update(|s| record_detection(store, s, label));
                });
            }
            session.update(|s| s.set_inference_ms(outcome.inference_ms));
        }
        Err(e) => {
            gloo::console::error!(format!("{}", Error::Backend(format!("{:?}", e))));
        }
    }
}

#[component]
pub fn CameraView<D>(
    detector: D,
    checklist: RwSignal<ChecklistStore>,
    session: RwSignal<DetectionSession>,
    catalog: RwSignal<ModelCatalog>,
) -> impl IntoView
where
    D: Detector + Clone + 'static,
{
    let video_ref: NodeRef<html::Video> = NodeRef::new();
    let canvas_ref: NodeRef<html::Canvas> = NodeRef::new();
    let (facing, set_facing) = signal(FacingMode::default());
    let (hidden, set_hidden) = signal(visibility::is_hidden());
    let stream: Rc<RefCell<Option<MediaStream>>> = Rc::new(RefCell::new(None));

    // タブ非表示でライブ検出を強制停止し、カメラ描画も抑止する
    visibility::watch_visibility(move |is_hidden| {
        if is_hidden {
            session.update(|s| s.suspend());
        }
        set_hidden.set(is_hidden);
    });

    // カメラストリームの開閉(向き変更・再表示で再取得)
    {
        let stream = stream.clone();
        Effect::new(move |_| {
            let facing = facing.get();
            if hidden.get() {
                if let Some(old) = stream.borrow_mut().take() {
                    webcam::stop_stream(&old);
                }
                return;
            }
            let Some(video) = video_ref.get() else {
                return;
            };
            let stream = stream.clone();
            spawn_local(async move {
                match webcam::open_stream(&video, facing).await {
                    Ok(new_stream) => {
                        if let Some(old) = stream.borrow_mut().replace(new_stream) {
                            webcam::stop_stream(&old);
                        }
                    }
                    Err(e) => {
                        gloo::console::error!(format!(
                            "{}",
                            Error::Backend(format!("カメラ取得失敗: {:?}", e))
                        ));
                    }
                }
            });
        });
    }

    // オーバーレイキャンバスをビデオの表示サイズに合わせる
    let on_loaded_metadata = move |_| {
        let (Some(video), Some(canvas)) = (video_ref.get_untracked(), canvas_ref.get_untracked())
        else {
            return;
        };
        canvas.set_width(video.offset_width().max(0) as u32);
        canvas.set_height(video.offset_height().max(0) as u32);
    };

    // 現在のフレームをオーバーレイキャンバスへ描画する。未マウント時は None
    let capture = move || {
        capture_frame(
            video_ref.get_untracked(),
            canvas_ref.get_untracked(),
            facing.get_untracked(),
        )
    };

    // セッション状態のリセットとオーバーレイ消去
    let reset = move || {
        session.update(|s| s.reset());
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Some(ctx) = context_2d(&canvas) {
                ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
            }
        }
    };

    // 単発キャプチャ: オフスクリーンコピー上で推論し、一括で書き戻す
    let on_capture = {
        let detector = detector.clone();
        move |_| {
            let detector = detector.clone();
            spawn_local(async move {
                let started = js_sys::Date::now();
                reset();
                let Some(ctx) = capture() else {
                    return;
                };
                let Some(copy) = copy_canvas(&ctx) else {
                    return;
                };
                run_model(&detector, checklist, session, &copy).await;
                blit_back(&ctx, &copy);
                session.update(|s| s.set_total_ms(js_sys::Date::now() - started));
            });
        }
    };

    // ライブ検出のトグル。Running中の再押下は停止要求
    let on_live = {
        let detector = detector.clone();
        move |_| {
            if session.try_update(|s| s.toggle_live()) != Some(LiveToggle::Started) {
                return;
            }
            let detector = detector.clone();
            spawn_local(async move {
                run_live_loop(
                    &RafClock,
                    move || session.with_untracked(|s| s.is_live()),
                    move || {
                        let detector = detector.clone();
                        async move {
                            let started = js_sys::Date::now();
                            let Some(ctx) = capture() else {
                                return false;
                            };
                            run_model(&detector, checklist, session, &ctx).await;
                            session.update(|s| s.set_total_ms(js_sys::Date::now() - started));
                            true
                        }
                    },
                )
                .await;
            });
        }
    };

    let on_switch_camera = move |_| {
        reset();
        set_facing.update(|f| *f = f.toggled());
    };

    // モデル切替: 解像度を循環させ、バックエンドを再設定する
    let on_change_model = {
        let detector = detector.clone();
        move |_| {
            reset();
            catalog.update(|c| c.change_resolution());
            let profile = catalog.with_untracked(|c| c.current().clone());
            let detector = detector.clone();
            spawn_local(async move {
                if let Err(e) = detector.configure(&profile).await {
                    gloo::console::error!(format!(
                        "{}",
                        Error::Backend(format!("モデル切替失敗: {:?}", e))
                    ));
                }
            });
        }
    };

    view! {
        <div class="camera-view">
            <Show
                when=move || !hidden.get()
                fallback=|| view! { <div class="camera-placeholder">"カメラ待機中..."</div> }
            >
                <div class="webcam-container">
                    <video
                        node_ref=video_ref
                        class:mirrored=move || facing.get().is_mirrored()
                        autoplay=true
                        prop:playsInline=true
                        prop:muted=true
                        on:loadedmetadata=on_loaded_metadata
                    ></video>
                    <canvas node_ref=canvas_ref class="overlay-canvas"></canvas>
                </div>
            </Show>
            <div class="camera-controls">
                <button class="btn btn-primary" on:click=on_capture>
                    "撮影"
                </button>
                <button
                    class="btn btn-primary"
                    class:active=move || session.with(|s| s.is_live())
                    on:click=on_live
                >
                    "ライブ検出"
                </button>
                <button class="btn btn-secondary" on:click=on_switch_camera>
                    "カメラ切替"
                </button>
                <button class="btn btn-secondary" on:click=on_change_model>
                    "モデル切替"
                </button>
                <button class="btn btn-tertiary" on:click=move |_| reset()>
                    "リセット"
                </button>
            </div>
        </div>
    }
}
