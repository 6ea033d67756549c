//! 検出バックエンド
//!
//! 前処理・推論・後処理は外部コラボレータ(JavaScript側の
//! onnxruntime-web連携)が所有する。ここでは3操作+設定切替の
//! 能力インターフェースと、呼び出し順序・計時のみを担う。

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use checkcam_common::{ModelCatalog, ModelProfile};
use leptos::prelude::*;

/// 検出バックエンドの能力インターフェース
///
/// ループコントローラを変更せずにバックエンドを差し替えられるよう、
/// 「入力作成・実行・出力解釈」の3操作として表現する。
#[allow(async_fn_in_trait)]
pub trait Detector {
    /// キャプチャ済みコンテキストからモデル入力を作る
    fn prepare(&self, ctx: &CanvasRenderingContext2d) -> Result<JsValue, JsValue>;

    /// 推論を実行し、出力テンソルと所要時間(ms)を返す
    async fn execute(&self, input: &JsValue) -> Result<(JsValue, f64), JsValue>;

    /// 出力を解釈して検出ラベルを返す(該当なしは None)。
    /// 枠等のオーバーレイ描画もこの中でコンテキストに対して行われる。
    fn interpret(
        &self,
        output: &JsValue,
        inference_ms: f64,
        ctx: &CanvasRenderingContext2d,
    ) -> Option<String>;

    /// モデル設定(解像度等)を切り替える
    async fn configure(&self, profile: &ModelProfile) -> Result<(), JsValue>;
}

/// 1回分の検出結果
#[derive(Debug, Clone, Default)]
pub struct DetectionOutcome {
    /// 後処理が返した検出ラベル
    pub label: Option<String>,
    /// モデル推論の所要時間(ms)
    pub inference_ms: f64,
}

/// 前処理 -> 推論(計時) -> 後処理 の逐次実行
///
/// 後処理には直前ではなく「いま計測した」推論時間を渡す。
pub async fn run_detection<D: Detector>(
    detector: &D,
    ctx: &CanvasRenderingContext2d,
) -> Result<DetectionOutcome, JsValue> {
    let input = detector.prepare(ctx)?;
    let (output, inference_ms) = detector.execute(&input).await?;
    let label = detector.interpret(&output, inference_ms, ctx);
    Ok(DetectionOutcome {
        label,
        inference_ms,
    })
}

// ============================================
// JavaScript関数のextern宣言
// ============================================

#[wasm_bindgen(module = "/js/detector-bridge.js")]
extern "C" {
    /// モデルセッションを(再)初期化する
    ///
    /// # Arguments
    /// * `profile_json` - ModelProfileのJSON文字列
    #[wasm_bindgen(js_name = "initSession", catch)]
    async fn init_session_js(profile_json: &str) -> Result<JsValue, JsValue>;

    /// キャンバスの現フレームからモデル入力テンソルを作る
    #[wasm_bindgen(js_name = "preprocessFrame", catch)]
    fn preprocess_frame_js(
        ctx: &CanvasRenderingContext2d,
        size: u32,
    ) -> Result<JsValue, JsValue>;

    /// ロード済みセッションで推論を実行する
    #[wasm_bindgen(js_name = "runSession", catch)]
    async fn run_session_js(input: &JsValue) -> Result<JsValue, JsValue>;

    /// 出力テンソルを解釈し、オーバーレイを描画してラベルを返す
    ///
    /// # Returns
    /// 検出アイテムのラベル文字列、該当なしは null
    #[wasm_bindgen(js_name = "postprocessOutput", catch)]
    fn postprocess_output_js(
        output: &JsValue,
        inference_ms: f64,
        ctx: &CanvasRenderingContext2d,
    ) -> Result<JsValue, JsValue>;
}

// ============================================
// onnxruntime-webバックエンド
// ============================================

/// onnxruntime-web(JS側)に委譲する検出バックエンド
#[derive(Clone, Copy)]
pub struct OnnxDetector {
    catalog: RwSignal<ModelCatalog>,
}

impl OnnxDetector {
    pub fn new(catalog: RwSignal<ModelCatalog>) -> Self {
        Self { catalog }
    }

    /// 現在のモデル設定でセッションをロードする
    pub async fn load(&self) -> Result<(), JsValue> {
        let profile = self.catalog.with_untracked(|c| c.current().clone());
        self.configure(&profile).await
    }

    fn current_resolution(&self) -> u32 {
        self.catalog
            .with_untracked(|c| c.current().current_resolution())
    }
}

impl Detector for OnnxDetector {
    fn prepare(&self, ctx: &CanvasRenderingContext2d) -> Result<JsValue, JsValue> {
        preprocess_frame_js(ctx, self.current_resolution())
    }

    async fn execute(&self, input: &JsValue) -> Result<(JsValue, f64), JsValue> {
        let start = js_sys::Date::now();
        let output = run_session_js(input).await?;
        Ok((output, js_sys::Date::now() - start))
    }

    fn interpret(
        &self,
        output: &JsValue,
        inference_ms: f64,
        ctx: &CanvasRenderingContext2d,
    ) -> Option<String> {
        let label = postprocess_output_js(output, inference_ms, ctx).ok()?;
        label.as_string().filter(|l| !l.is_empty())
    }

    async fn configure(&self, profile: &ModelProfile) -> Result<(), JsValue> {
        let json = serde_json::to_string(profile)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        init_session_js(&json).await.map(|_| ())
    }
}
