//! 計測値表示コンポーネント
//!
//! 直近サイクルの推論時間・合計時間と、そこから導出したFPSを表示する。

use leptos::prelude::*;

use checkcam_common::{format_fps, format_ms, TimingSample};

#[component]
pub fn StatsPanel(
    timing: Signal<TimingSample>,
    model_label: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stats-panel">
            <div class="model-name">{move || format!("使用モデル: {}", model_label.get())}</div>
            <div class="stats-grid">
                <div class="stats-times">
                    <div>{move || format!("推論時間: {}", format_ms(timing.get().inference_ms))}</div>
                    <div>{move || format!("合計時間: {}", format_ms(timing.get().total_ms))}</div>
                    <div>{move || format!("オーバーヘッド: +{}", format_ms(timing.get().overhead_ms()))}</div>
                </div>
                <div class="stats-fps">
                    <div>{move || format!("モデルFPS: {}", format_fps(timing.get().model_fps()))}</div>
                    <div>{move || format!("合計FPS: {}", format_fps(timing.get().total_fps()))}</div>
                    <div>{move || format!("オーバーヘッドFPS: {}", format_fps(timing.get().overhead_fps()))}</div>
                </div>
            </div>
        </div>
    }
}
