//! タイピングスコア計算
//!
//! Base = 解答数 × 基礎点
//! Acc  = clamp(accuracy, 0, 1) ^ acc_exponent
//! Speed = 0.8 + 0.4 × sigmoid(speed_sharpness × (speed - speed_midpoint))
//! Combo = 1 + combo_weight × min(1, sqrt(max_combo / combo_cap))
//! Score = round(Base × Acc × Speed × Combo)
//!
//! 正確度を指数で最優先し、速度はシグモイドで飽和させ (0.8 ~ 1.2)、
//! コンボは平方根で逓減させます (1.0 ~ 1.3)。

use serde::{Deserialize, Serialize};

/// スコア計算の入力
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput {
    /// 解答数 (完了カード数)
    pub attempt_count: u32,
    /// 正確度 (0.0 ~ 1.0)
    pub accuracy: f64,
    /// 速度 (1分あたりの入力文字数)
    pub speed: f64,
    /// 最大コンボ数
    pub max_combo: u32,
}

/// スコア計算のパラメータ
/// 構造体更新構文で一部だけ上書きできる
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreParams {
    /// 1問あたりの基礎点
    #[serde(default = "default_base_per_attempt")]
    pub base_per_attempt: f64,
    /// 速度シグモイドの中心 (この速度付近で増分が効きやすい)
    #[serde(default = "default_speed_midpoint")]
    pub speed_midpoint: f64,
    /// 速度感度 (勾配の鋭さ)
    #[serde(default = "default_speed_sharpness")]
    pub speed_sharpness: f64,
    /// コンボ正規化の上限目安
    #[serde(default = "default_combo_cap")]
    pub combo_cap: u32,
    /// コンボ補正の寄与 (最大で +0.3)
    #[serde(default = "default_combo_weight")]
    pub combo_weight: f64,
    /// 正確度の重み指数 (>1 でミスに厳しく)
    #[serde(default = "default_acc_exponent")]
    pub acc_exponent: f64,
}

fn default_base_per_attempt() -> f64 {
    100.0
}

fn default_speed_midpoint() -> f64 {
    60.0
}

fn default_speed_sharpness() -> f64 {
    0.1
}

fn default_combo_cap() -> u32 {
    50
}

fn default_combo_weight() -> f64 {
    0.3
}

fn default_acc_exponent() -> f64 {
    2.0
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            base_per_attempt: default_base_per_attempt(),
            speed_midpoint: default_speed_midpoint(),
            speed_sharpness: default_speed_sharpness(),
            combo_cap: default_combo_cap(),
            combo_weight: default_combo_weight(),
            acc_exponent: default_acc_exponent(),
        }
    }
}

impl ScoreParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 基礎点設定
    pub fn with_base_per_attempt(mut self, base: f64) -> Self {
        self.base_per_attempt = base;
        self
    }

    /// 速度シグモイド中心設定
    pub fn with_speed_midpoint(mut self, midpoint: f64) -> Self {
        self.speed_midpoint = midpoint;
        self
    }

    /// コンボ上限設定
    pub fn with_combo_cap(mut self, cap: u32) -> Self {
        self.combo_cap = cap;
        self
    }

    /// 正確度指数設定
    pub fn with_acc_exponent(mut self, exponent: f64) -> Self {
        self.acc_exponent = exponent;
        self
    }
}

/// デフォルトパラメータでスコアを計算
pub fn calc_score(input: &ScoreInput) -> u32 {
    calc_score_with(input, &ScoreParams::default())
}

/// パラメータを指定してスコアを計算
/// 入力は防御的にクランプされ、エラーにはならない
pub fn calc_score_with(input: &ScoreInput, params: &ScoreParams) -> u32 {
    // 正確度を 0~1 に収めて指数で強調
    let acc = input.accuracy.clamp(0.0, 1.0).powf(params.acc_exponent);

    // シグモイドで速度を 0~1 に圧縮し、0.8~1.2 へ射影
    let speed_raw =
        1.0 / (1.0 + (-params.speed_sharpness * (input.speed - params.speed_midpoint)).exp());
    let speed = 0.8 + 0.4 * speed_raw;

    // 平方根で逓減するコンボ補正 (1.0 ~ 1.0 + combo_weight)
    let combo_cap = params.combo_cap.max(1) as f64;
    let combo_raw = (f64::from(input.max_combo) / combo_cap).sqrt().min(1.0);
    let combo = 1.0 + params.combo_weight * combo_raw;

    let base = f64::from(input.attempt_count) * params.base_per_attempt;

    (base * acc * speed * combo).round() as u32
}
