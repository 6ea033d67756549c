//! Checkcam Common Library
//!
//! Web(WASM)のカメラUIから利用される、ブラウザ非依存の型とロジック

pub mod checklist;
pub mod error;
pub mod facing;
pub mod live_loop;
pub mod model;
pub mod session;
pub mod timing;

pub use checklist::ChecklistStore;
pub use error::{Error, Result};
pub use facing::{CaptureTransform, FacingMode};
pub use live_loop::{run_live_loop, FrameClock};
pub use model::{ModelCatalog, ModelProfile};
pub use session::{record_detection, DetectionSession, LiveToggle};
pub use timing::{format_fps, format_ms, TimingSample};
