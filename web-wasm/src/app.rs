//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use checkcam_common::{ChecklistStore, DetectionSession, Error, ModelCatalog};

use crate::components::{
    camera::CameraView, checklist_panel::ChecklistPanel, header::Header, stats_panel::StatsPanel,
};
use crate::detector::OnnxDetector;

/// 同梱のモデルマニフェスト
const MODEL_MANIFEST: &str = r#"{
    "models": [
        {
            "name": "yolov7-tiny",
            "urlTemplate": "/model/yolov7-tiny_{size}x{size}.onnx",
            "resolutions": [256, 320, 640]
        }
    ]
}"#;

/// 既定のチェックリスト(モデルのラベル名に合わせる)
const DEFAULT_CHECKLIST: [&str; 6] = [
    "cup",
    "bottle",
    "cell phone",
    "book",
    "scissors",
    "keyboard",
];

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = RwSignal::new(
        ModelCatalog::from_json(MODEL_MANIFEST).expect("モデルマニフェストの読み込みに失敗"),
    );
    let checklist = RwSignal::new(ChecklistStore::with_items(DEFAULT_CHECKLIST));
    let session = RwSignal::new(DetectionSession::new());
    let detector = OnnxDetector::new(catalog);

    // 初期モデルのロード
    spawn_local(async move {
        if let Err(e) = detector.load().await {
            gloo::console::error!(format!(
                "{}",
                Error::Backend(format!("モデルロード失敗: {:?}", e))
            ));
        }
    });

    // チェックリスト変更の確認ログ
    Effect::new(move |_| {
        let items = checklist.with(|c| c.items().to_vec());
        gloo::console::log!(format!("現在のチェックリスト: {:?}", items));
    });

    let on_add_item = move |item: String| {
        checklist.update(|c| {
            c.add_if_absent(&item);
        });
    };

    let timing = Signal::derive(move || session.with(|s| s.timing()));
    let model_label = Signal::derive(move || catalog.with(|c| c.current().display_label()));

    view! {
        <div class="container">
            <Header />

            <CameraView
                detector=detector
                checklist=checklist
                session=session
                catalog=catalog
            />

            <StatsPanel timing=timing model_label=model_label />

            <ChecklistPanel
                checklist=checklist
                session=session
                on_add_item=on_add_item
            />
        </div>
    }
}
