//! カメラ向きとキャプチャ変換
//!
//! 前面カメラ(user)ではプレビューが鏡像表示されるため、
//! キャプチャ時にも水平反転を掛けてオーバーレイと見た目を一致させる。

/// カメラの向き
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// 前面カメラ
    User,
    /// 背面カメラ
    #[default]
    Environment,
}

impl FacingMode {
    /// 切り替え後の向きを返す
    pub fn toggled(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }

    /// getUserMedia の facingMode 制約値
    pub fn constraint_value(self) -> &'static str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
        }
    }

    /// 前面カメラかどうか(プレビューの鏡像表示判定)
    pub fn is_mirrored(self) -> bool {
        matches!(self, FacingMode::User)
    }

    /// キャプチャ描画時に適用する変換行列
    ///
    /// 前面カメラでは幅 W のキャンバスに対して水平反転
    /// (-1, 0, 0, 1, W, 0)、背面カメラでは単位行列。
    pub fn capture_transform(self, canvas_width: f64) -> CaptureTransform {
        match self {
            FacingMode::User => CaptureTransform::mirror_x(canvas_width),
            FacingMode::Environment => CaptureTransform::IDENTITY,
        }
    }
}

/// 2Dキャンバス変換行列 (a, b, c, d, e, f)
///
/// CanvasRenderingContext2d::set_transform と同じ並び。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl CaptureTransform {
    /// 単位行列
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// 幅 width のキャンバスを水平反転する変換
    pub fn mirror_x(width: f64) -> Self {
        Self {
            a: -1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: width,
            f: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(FacingMode::User.toggled(), FacingMode::Environment);
        assert_eq!(FacingMode::Environment.toggled(), FacingMode::User);
    }

    #[test]
    fn test_constraint_value() {
        assert_eq!(FacingMode::User.constraint_value(), "user");
        assert_eq!(FacingMode::Environment.constraint_value(), "environment");
    }

    #[test]
    fn test_default_is_environment() {
        assert_eq!(FacingMode::default(), FacingMode::Environment);
    }

    #[test]
    fn test_mirror_transform_for_user() {
        // 前面カメラ: 任意の幅 W に対して (-1, 0, 0, 1, W, 0)
        for width in [1.0, 320.0, 640.0, 1280.0] {
            let t = FacingMode::User.capture_transform(width);
            assert_eq!(t.a, -1.0);
            assert_eq!(t.b, 0.0);
            assert_eq!(t.c, 0.0);
            assert_eq!(t.d, 1.0);
            assert_eq!(t.e, width);
            assert_eq!(t.f, 0.0);
        }
    }

    #[test]
    fn test_identity_transform_for_environment() {
        let t = FacingMode::Environment.capture_transform(640.0);
        assert_eq!(t, CaptureTransform::IDENTITY);
    }

    #[test]
    fn test_identity_values() {
        // 描画後に戻す単位行列 (1, 0, 0, 1, 0, 0)
        let id = CaptureTransform::IDENTITY;
        assert_eq!((id.a, id.b, id.c, id.d, id.e, id.f), (1.0, 0.0, 0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_is_mirrored() {
        assert!(FacingMode::User.is_mirrored());
        assert!(!FacingMode::Environment.is_mirrored());
    }
}
