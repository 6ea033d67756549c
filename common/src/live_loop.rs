//! ライブ検出ループ
//!
//! 「1サイクル実行 -> 次の描画タイミングまで待機 -> フラグ再確認」を
//! 繰り返す協調的ループ。サイクルは厳密に逐次実行され、重複実行は
//! 起こらない。停止はフラグによる要求ベースで、実行中のサイクルは
//! 必ず完走する(停止要求後に最大1サイクル余分に走り得る)。

use std::future::Future;

/// フレーム待機プリミティブ
///
/// ブラウザ実装では requestAnimationFrame を待つ。
/// 表示サーフェスなしでループを検証できるよう抽象化している。
#[allow(async_fn_in_trait)]
pub trait FrameClock {
    /// 次の表示更新タイミングまで待機する
    async fn next_frame(&self);
}

/// ライブ検出ループ本体
///
/// `running` が true を返す間、`cycle` を実行して次フレームを待つ。
/// `cycle` が false を返した場合(キャプチャの前提条件が満たせない等)は
/// 即座に終了する。
pub async fn run_live_loop<C, R, F, Fut>(clock: &C, mut running: R, mut cycle: F)
where
    C: FrameClock,
    R: FnMut() -> bool,
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    while running() {
        if !cycle().await {
            return;
        }
        clock.next_frame().await;
    }
}
