//! 計測値と表示用の導出値
//!
//! 直近1サイクル分の推論時間・合計時間のみ保持し、毎サイクル上書きする。
//! FPS等の導出値は表示専用の単純な算術。

/// 直近キャプチャの計測値(ミリ秒)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingSample {
    /// モデル推論の所要時間
    pub inference_ms: f64,
    /// キャプチャ込みの往復時間
    pub total_ms: f64,
}

impl TimingSample {
    /// 推論以外のオーバーヘッド時間
    pub fn overhead_ms(&self) -> f64 {
        self.total_ms - self.inference_ms
    }

    /// モデル単体のFPS。計測値が無い(0以下)場合は None
    pub fn model_fps(&self) -> Option<f64> {
        fps(self.inference_ms)
    }

    /// 合計時間ベースのFPS
    pub fn total_fps(&self) -> Option<f64> {
        fps(self.total_ms)
    }

    /// オーバーヘッドによるFPS低下分: 1000 * (1/total - 1/inference)
    pub fn overhead_fps(&self) -> Option<f64> {
        if self.inference_ms <= 0.0 || self.total_ms <= 0.0 {
            return None;
        }
        Some(1000.0 * (1.0 / self.total_ms - 1.0 / self.inference_ms))
    }
}

fn fps(duration_ms: f64) -> Option<f64> {
    if duration_ms <= 0.0 {
        None
    } else {
        Some(1000.0 / duration_ms)
    }
}

/// ミリ秒の表示文字列(整数丸め)
pub fn format_ms(value: f64) -> String {
    format!("{:.0}ms", value)
}

/// FPSの表示文字列。計測値が無い場合は "-"
pub fn format_fps(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}fps", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let sample = TimingSample::default();
        assert_eq!(sample.inference_ms, 0.0);
        assert_eq!(sample.total_ms, 0.0);
    }

    #[test]
    fn test_overhead_ms() {
        let sample = TimingSample {
            inference_ms: 40.0,
            total_ms: 50.0,
        };
        assert_eq!(sample.overhead_ms(), 10.0);
    }

    #[test]
    fn test_model_fps() {
        let sample = TimingSample {
            inference_ms: 40.0,
            total_ms: 50.0,
        };
        assert_eq!(sample.model_fps(), Some(25.0));
        assert_eq!(sample.total_fps(), Some(20.0));
    }

    #[test]
    fn test_fps_none_on_zero() {
        // 計測前(0ms)はFPSを出さない
        let sample = TimingSample::default();
        assert_eq!(sample.model_fps(), None);
        assert_eq!(sample.total_fps(), None);
        assert_eq!(sample.overhead_fps(), None);
    }

    #[test]
    fn test_overhead_fps() {
        let sample = TimingSample {
            inference_ms: 40.0,
            total_ms: 50.0,
        };
        // 1000 * (1/50 - 1/40) = -5.0
        let overhead = sample.overhead_fps().unwrap();
        assert!((overhead - (-5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(41.7), "42ms");
        assert_eq!(format_ms(0.0), "0ms");
    }

    #[test]
    fn test_format_fps() {
        assert_eq!(format_fps(Some(25.0)), "25.00fps");
        assert_eq!(format_fps(None), "-");
    }
}
