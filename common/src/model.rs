//! モデルカタログ
//!
//! 利用可能な検出モデルと入力解像度の定義。JSONマニフェストから読み込み、
//! 「モデル切替」操作で解像度を循環させる。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 検出モデル1件の定義
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelProfile {
    /// 表示名(例: "yolov7-tiny")
    pub name: String,
    /// モデルファイルのURLテンプレート。"{size}" が解像度に置換される
    pub url_template: String,
    /// 入力解像度の候補(px)。切替操作でこの順に循環する
    pub resolutions: Vec<u32>,
    /// 現在の解像度インデックス
    #[serde(default)]
    pub active_resolution: usize,
}

impl ModelProfile {
    /// 現在の入力解像度
    pub fn current_resolution(&self) -> u32 {
        self.resolutions
            .get(self.active_resolution)
            .copied()
            .unwrap_or(0)
    }

    /// 次の解像度へ循環切替する
    pub fn change_resolution(&mut self) {
        if self.resolutions.is_empty() {
            return;
        }
        self.active_resolution = (self.active_resolution + 1) % self.resolutions.len();
    }

    /// 現在の解像度で解決したモデルURL
    pub fn model_url(&self) -> String {
        self.url_template
            .replace("{size}", &self.current_resolution().to_string())
    }

    /// 表示用ラベル(例: "yolov7-tiny (320px)")
    pub fn display_label(&self) -> String {
        format!("{} ({}px)", self.name, self.current_resolution())
    }
}

/// モデルカタログ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelCatalog {
    pub models: Vec<ModelProfile>,
    /// 現在のモデルインデックス
    #[serde(default)]
    pub active: usize,
}

impl ModelCatalog {
    /// JSONマニフェストからカタログを読み込む
    ///
    /// モデル0件、または解像度候補が空のモデルは設定エラー。
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: ModelCatalog = serde_json::from_str(json)?;
        if catalog.models.is_empty() {
            return Err(Error::Config("モデル定義が空です".to_string()));
        }
        for model in &catalog.models {
            if model.resolutions.is_empty() {
                return Err(Error::Config(format!(
                    "モデル {} に解像度候補がありません",
                    model.name
                )));
            }
        }
        Ok(catalog)
    }

    /// 現在選択中のモデル
    pub fn current(&self) -> &ModelProfile {
        &self.models[self.active.min(self.models.len() - 1)]
    }

    /// 現在のモデルの解像度を循環切替する
    pub fn change_resolution(&mut self) {
        let index = self.active.min(self.models.len() - 1);
        self.models[index].change_resolution();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "models": [
            {
                "name": "yolov7-tiny",
                "urlTemplate": "/model/yolov7-tiny_{size}x{size}.onnx",
                "resolutions": [256, 320, 640]
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = ModelCatalog::from_json(MANIFEST).expect("マニフェスト読込失敗");
        assert_eq!(catalog.models.len(), 1);
        assert_eq!(catalog.current().name, "yolov7-tiny");
        assert_eq!(catalog.current().current_resolution(), 256);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = ModelCatalog::from_json("not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_empty_models() {
        let result = ModelCatalog::from_json(r#"{"models": []}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_empty_resolutions() {
        let json = r#"{
            "models": [
                {"name": "m", "urlTemplate": "/m.onnx", "resolutions": []}
            ]
        }"#;
        let result = ModelCatalog::from_json(json);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_change_resolution_cycles() {
        let mut catalog = ModelCatalog::from_json(MANIFEST).unwrap();
        assert_eq!(catalog.current().current_resolution(), 256);
        catalog.change_resolution();
        assert_eq!(catalog.current().current_resolution(), 320);
        catalog.change_resolution();
        assert_eq!(catalog.current().current_resolution(), 640);
        catalog.change_resolution();
        // 一巡して先頭へ戻る
        assert_eq!(catalog.current().current_resolution(), 256);
    }

    #[test]
    fn test_model_url_template() {
        let mut catalog = ModelCatalog::from_json(MANIFEST).unwrap();
        assert_eq!(
            catalog.current().model_url(),
            "/model/yolov7-tiny_256x256.onnx"
        );
        catalog.change_resolution();
        assert_eq!(
            catalog.current().model_url(),
            "/model/yolov7-tiny_320x320.onnx"
        );
    }

    #[test]
    fn test_display_label() {
        let catalog = ModelCatalog::from_json(MANIFEST).unwrap();
        assert_eq!(catalog.current().display_label(), "yolov7-tiny (256px)");
    }

    #[test]
    fn test_serialize_camel_case() {
        let catalog = ModelCatalog::from_json(MANIFEST).unwrap();
        let json = serde_json::to_string(&catalog).expect("シリアライズ失敗");
        assert!(json.contains("\"urlTemplate\":"));
        assert!(json.contains("\"activeResolution\":"));
    }
}
