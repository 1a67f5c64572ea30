//! 部分入力モード
//!
//! 読み全体ではなく先頭 n 文字などの一部範囲だけを打たせる練習モード。
//! 範囲の計算と進捗換算を受け持ち、検証自体は InputValidator に任せます。

use serde::{Deserialize, Serialize};

use crate::rng::XorShift;

/// 部分入力の範囲決定モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartialInputMode {
    /// 先頭から指定文字数
    Start,
    /// ランダムな開始位置
    Random,
    /// 重要部分の自動検出 (未実装、現状は Start と同じ)
    Important,
}

/// 部分入力の設定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialInputConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_character_count")]
    pub character_count: usize,
    #[serde(default = "default_mode")]
    pub mode: PartialInputMode,
    #[serde(default = "default_highlight_range")]
    pub highlight_range: bool,
}

fn default_character_count() -> usize {
    5
}

fn default_mode() -> PartialInputMode {
    PartialInputMode::Start
}

fn default_highlight_range() -> bool {
    true
}

impl Default for PartialInputConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            character_count: default_character_count(),
            mode: default_mode(),
            highlight_range: default_highlight_range(),
        }
    }
}

/// 設定プリセット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialInputPreset {
    Beginner,
    Intermediate,
    Advanced,
    Custom,
}

impl PartialInputPreset {
    /// プリセットを設定へ展開
    pub fn to_config(self) -> PartialInputConfig {
        match self {
            PartialInputPreset::Beginner => PartialInputConfig {
                enabled: true,
                character_count: 5,
                ..PartialInputConfig::default()
            },
            PartialInputPreset::Intermediate => PartialInputConfig {
                enabled: true,
                character_count: 10,
                ..PartialInputConfig::default()
            },
            PartialInputPreset::Advanced => PartialInputConfig {
                enabled: false,
                character_count: 10,
                ..PartialInputConfig::default()
            },
            PartialInputPreset::Custom => PartialInputConfig::default(),
        }
    }
}

/// 計算済みの部分入力範囲 (文字単位)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialInputRange {
    pub start: usize,
    pub end: usize,
    /// 範囲内の読み
    pub text: String,
    /// 元の読み全体
    pub full_text: String,
}

/// 部分入力モードの処理
#[derive(Debug)]
pub struct PartialInputProcessor {
    current_range: Option<PartialInputRange>,
    rng: XorShift,
}

impl Default for PartialInputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialInputProcessor {
    pub fn new() -> Self {
        Self {
            current_range: None,
            rng: XorShift::from_entropy(),
        }
    }

    /// シード固定で生成 (ランダムモードの再現用)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            current_range: None,
            rng: XorShift::new(seed),
        }
    }

    /// 設定に応じて部分入力範囲を計算
    /// 無効設定や空文字列では全文が範囲になる
    pub fn calculate_range(&mut self, text: &str, config: &PartialInputConfig) -> PartialInputRange {
        let chars: Vec<char> = text.chars().collect();
        let text_len = chars.len();

        if !config.enabled || text.is_empty() {
            return PartialInputRange {
                start: 0,
                end: text_len,
                text: text.to_string(),
                full_text: text.to_string(),
            };
        }

        let target_count = config.character_count.min(text_len);
        let start = match config.mode {
            PartialInputMode::Random if target_count < text_len => {
                self.rng.gen_range(text_len - target_count + 1)
            }
            // Important は重要部分の自動検出が入るまで先頭扱い
            _ => 0,
        };
        let end = start + target_count;

        PartialInputRange {
            start,
            end,
            text: chars[start..end].iter().collect(),
            full_text: text.to_string(),
        }
    }

    /// 現在の範囲を設定
    pub fn set_range(&mut self, range: PartialInputRange) {
        self.current_range = Some(range);
    }

    /// 現在の範囲を取得
    pub fn current_range(&self) -> Option<&PartialInputRange> {
        self.current_range.as_ref()
    }

    /// 指定位置が範囲内か
    pub fn is_within_range(&self, position: usize) -> bool {
        match &self.current_range {
            Some(range) => position >= range.start && position < range.end,
            None => true,
        }
    }

    /// 部分入力が完了したか
    pub fn is_complete(&self, position: usize) -> bool {
        match &self.current_range {
            Some(range) => position >= range.end,
            None => false,
        }
    }

    /// 進捗率を計算 (0 ~ 100、小数第2位まで)
    pub fn calculate_progress(&self, position: usize) -> f64 {
        let Some(range) = &self.current_range else {
            return 0.0;
        };

        let range_len = range.end - range.start;
        if range_len == 0 {
            return 100.0;
        }

        let relative = position.saturating_sub(range.start);
        let progress = (relative as f64 / range_len as f64) * 100.0;
        (progress * 100.0).round() / 100.0
    }

    /// 相対位置 -> 絶対位置
    pub fn to_absolute_position(&self, relative: usize) -> usize {
        match &self.current_range {
            Some(range) => range.start + relative,
            None => relative,
        }
    }

    /// 絶対位置 -> 相対位置
    pub fn to_relative_position(&self, absolute: usize) -> usize {
        match &self.current_range {
            Some(range) => absolute.saturating_sub(range.start),
            None => absolute,
        }
    }

    /// 範囲をリセット
    pub fn reset(&mut self) {
        self.current_range = None;
    }
}
