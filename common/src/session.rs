//! 検出セッションの状態機械
//!
//! ライブ検出のOn/Off(Idle/Running)、今セッションで見つかったアイテム、
//! 直近の計測値を1つのオブジェクトで管理する。リセット・カメラ切替・
//! タブ非表示の各アクションがここに集約される。

use crate::checklist::ChecklistStore;
use crate::timing::TimingSample;

/// ライブ検出トグルの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveToggle {
    /// Idle -> Running に遷移した(ループを起動する)
    Started,
    /// Running -> Idle に遷移した(実行中ループへの停止要求)
    Stopped,
}

/// キャプチャセッションの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionSession {
    live: bool,
    detected: Vec<String>,
    timing: TimingSample,
}

impl DetectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// ライブ検出が実行中かどうか
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// ライブ検出のトグル
    ///
    /// Idle中なら Running に遷移して Started を返す。
    /// Running中の再呼び出しは停止要求として扱い Stopped を返す
    /// (二重ループは起動しない)。
    pub fn toggle_live(&mut self) -> LiveToggle {
        if self.live {
            self.live = false;
            LiveToggle::Stopped
        } else {
            self.live = true;
            LiveToggle::Started
        }
    }

    /// 停止要求。ループは次のサイクル先頭のフラグ確認で終了する
    pub fn stop(&mut self) {
        self.live = false;
    }

    /// タブ非表示による強制停止
    pub fn suspend(&mut self) {
        self.live = false;
    }

    /// セッション状態のリセット
    ///
    /// 検出済みアイテムを空にし、計測値を0に戻し、
    /// 実行中のループがあれば停止要求を出す。
    pub fn reset(&mut self) {
        self.live = false;
        self.detected.clear();
        self.timing = TimingSample::default();
    }

    /// 今セッションで検出済みのアイテム(最初に見つかった順)
    pub fn detected(&self) -> &[String] {
        &self.detected
    }

    pub fn is_detected(&self, item: &str) -> bool {
        self.detected.iter().any(|i| i == item)
    }

    /// 検出済みとして記録する。初回のみ true
    pub fn mark_detected(&mut self, label: &str) -> bool {
        if label.is_empty() || self.is_detected(label) {
            return false;
        }
        self.detected.push(label.to_string());
        true
    }

    /// 直近の計測値
    pub fn timing(&self) -> TimingSample {
        self.timing
    }

    pub fn set_inference_ms(&mut self, ms: f64) {
        self.timing.inference_ms = ms;
    }

    pub fn set_total_ms(&mut self, ms: f64) {
        self.timing.total_ms = ms;
    }
}

/// 検出ラベルの反映ルール
///
/// チェックリストに未登録なら末尾へ追加し、セッションの検出済み集合にも
/// 記録する。どちらも冪等で、「検出済み ⊆ チェックリスト」が常に保たれる。
pub fn record_detection(store: &mut ChecklistStore, session: &mut DetectionSession, label: &str) {
    store.add_if_absent(label);
    session.mark_detected(label);
}
