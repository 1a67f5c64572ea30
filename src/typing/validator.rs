//! ローマ字入力の逐次判定
//!
//! 1枚のカード挑戦につき1インスタンス。ターゲット設定時に候補集合を
//! 展開し、キー入力ごとに生存候補を前方一致で絞り込みます。
//! 複数の正解表記 (tsu / tu 等) は入力が確定するまで同時に生かします。

use crate::core::expand;

/// 入力検証結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationResult {
    /// 入力が有効かどうか
    pub is_valid: bool,
    /// 進捗率 (0.0 ~ 1.0)
    pub progress: f64,
    /// 入力が完了したか
    pub is_complete: bool,
}

impl ValidationResult {
    fn invalid() -> Self {
        Self {
            is_valid: false,
            progress: 0.0,
            is_complete: false,
        }
    }

    fn complete() -> Self {
        Self {
            is_valid: true,
            progress: 1.0,
            is_complete: true,
        }
    }
}

/// ローマ字入力検証器
#[derive(Debug, Default)]
pub struct InputValidator {
    /// 現在のターゲット読み
    target_text: String,
    /// 生存候補 (ターゲット全体の受理可能ローマ字)
    valid_patterns: Vec<String>,
    /// 受理済みキー数
    current_position: usize,
    /// 判定中の入力バッファ
    current_input: String,
    /// 誤入力回数
    mistake_count: u32,
}

impl InputValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// ターゲットの読みを設定し、入力状態をリセット
    pub fn set_target(&mut self, text: &str) {
        self.target_text = text.to_string();
        self.valid_patterns = expand(text);
        self.reset();
    }

    /// 現在のターゲット読み
    pub fn target(&self) -> &str {
        &self.target_text
    }

    /// ターゲットに対する受理可能パターン一覧
    pub fn patterns(&self) -> &[String] {
        &self.valid_patterns
    }

    /// 入力文字列全体を検証 (内部状態は変更しない)
    ///
    /// 末尾が「ん」の読みは二段階判定: 手前までの一致 + n 1文字は
    /// 未完了扱い (進捗 0.95)、nn で完了になります。
    pub fn validate_input(&self, hiragana: &str, input: &str) -> ValidationResult {
        // 末尾「ん」の二段階判定
        if let Some(before) = hiragana.strip_suffix('ん') {
            let remaining = expand(before)
                .into_iter()
                .find_map(|p| input.strip_prefix(p.as_str()).map(str::to_string));
            if let Some(remaining) = remaining {
                if remaining == "n" {
                    return ValidationResult {
                        is_valid: true,
                        progress: 0.95,
                        is_complete: false,
                    };
                }
                if remaining == "nn" {
                    return ValidationResult::complete();
                }
            }
        }

        let patterns = expand(hiragana);

        // 完全一致
        if patterns.iter().any(|p| p == input) {
            return ValidationResult::complete();
        }

        // 前方一致
        for pattern in &patterns {
            if pattern.starts_with(input) {
                return ValidationResult {
                    is_valid: true,
                    progress: input.chars().count() as f64 / pattern.chars().count() as f64,
                    is_complete: false,
                };
            }
        }

        ValidationResult::invalid()
    }

    /// 1文字ずつ入力を検証
    ///
    /// 受理なら true を返してカーソルを進める。バッファが候補と完全一致
    /// したらバッファをクリアする。拒否なら誤入力回数を増やし、その文字は
    /// バッファに積まない。
    pub fn validate_char(&mut self, ch: char) -> bool {
        let mut new_input = self.current_input.clone();
        new_input.push(ch);

        let alive = self
            .valid_patterns
            .iter()
            .any(|p| p.starts_with(new_input.as_str()));

        if !alive {
            self.mistake_count += 1;
            return false;
        }

        if self.valid_patterns.iter().any(|p| *p == new_input) {
            // 候補を打ち切った。次の入力単位はバッファ先頭から
            self.current_input.clear();
        } else {
            self.current_input = new_input;
        }
        self.current_position += 1;
        true
    }

    /// ターゲット全体の入力が完了したか
    pub fn is_complete(&self) -> bool {
        self.current_position > 0 && self.current_input.is_empty()
    }

    /// 現在の入力位置 (受理済みキー数)
    pub fn current_position(&self) -> usize {
        self.current_position
    }

    /// 誤入力回数
    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    /// 入力状態をリセット (ターゲットと候補は保持)
    pub fn reset(&mut self) {
        self.current_position = 0;
        self.current_input.clear();
        self.mistake_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_complete() {
        let validator = InputValidator::new();
        let result = validator.validate_input("つる", "tsuru");
        assert!(result.is_valid);
        assert_eq!(result.progress, 1.0);
        assert!(result.is_complete);

        // 別表記も同じく完了
        let result = validator.validate_input("つる", "turu");
        assert!(result.is_valid);
        assert!(result.is_complete);
    }

    #[test]
    fn test_validate_input_partial() {
        let validator = InputValidator::new();
        let result = validator.validate_input("つる", "tsu");
        assert!(result.is_valid);
        assert!(!result.is_complete);
        assert_eq!(result.progress, 3.0 / 5.0);
    }

    #[test]
    fn test_validate_input_invalid() {
        let validator = InputValidator::new();
        let result = validator.validate_input("つる", "tzuru");
        assert!(!result.is_valid);
        assert_eq!(result.progress, 0.0);
    }

    #[test]
    fn test_validate_input_trailing_nasal() {
        let validator = InputValidator::new();

        // n 1文字はほぼ完了だが未完了
        let result = validator.validate_input("ぐんまけん", "gunmaken");
        assert!(result.is_valid);
        assert!(!result.is_complete);
        assert_eq!(result.progress, 0.95);

        // nn で完了
        let result = validator.validate_input("ぐんまけん", "gunmakenn");
        assert!(result.is_valid);
        assert!(result.is_complete);
        assert_eq!(result.progress, 1.0);
    }

    #[test]
    fn test_validate_input_nasal_only() {
        let validator = InputValidator::new();
        let result = validator.validate_input("ん", "n");
        assert!(result.is_valid);
        assert!(!result.is_complete);

        let result = validator.validate_input("ん", "nn");
        assert!(result.is_complete);
    }

    #[test]
    fn test_validate_input_empty() {
        let validator = InputValidator::new();
        let result = validator.validate_input("", "");
        assert!(result.is_valid);
        assert!(result.is_complete);
    }

    #[test]
    fn test_validate_char_accepts_both_branches() {
        let mut validator = InputValidator::new();
        validator.set_target("し");
        assert!(validator.validate_char('s'));
        assert!(validator.validate_char('h')); // shi 側
        assert!(validator.validate_char('i'));
        assert!(validator.is_complete());

        validator.set_target("し");
        assert!(validator.validate_char('s'));
        assert!(validator.validate_char('i')); // si 側
        assert!(validator.is_complete());
    }

    #[test]
    fn test_validate_char_rejects_and_counts() {
        let mut validator = InputValidator::new();
        validator.set_target("つる");
        assert!(validator.validate_char('t'));
        assert!(!validator.validate_char('z')); // tz はどの候補にもない
        assert_eq!(validator.mistake_count(), 1);
        // 拒否された文字はバッファに残らないので続行できる
        assert!(validator.validate_char('s'));
        assert!(validator.validate_char('u'));
        assert!(validator.validate_char('r'));
        assert!(validator.validate_char('u'));
        assert!(validator.is_complete());
        assert_eq!(validator.mistake_count(), 1);
    }

    #[test]
    fn test_position_tracking() {
        let mut validator = InputValidator::new();
        validator.set_target("かるた");
        assert_eq!(validator.current_position(), 0);

        validator.validate_char('k');
        assert_eq!(validator.current_position(), 1);
        validator.validate_char('a');
        assert_eq!(validator.current_position(), 2);
        validator.validate_char('r');
        assert_eq!(validator.current_position(), 3);

        // 誤入力では進まない
        validator.validate_char('x');
        assert_eq!(validator.current_position(), 3);
    }

    #[test]
    fn test_reset() {
        let mut validator = InputValidator::new();
        validator.set_target("かるた");
        validator.validate_char('k');
        validator.validate_char('a');
        validator.validate_char('x');
        assert_eq!(validator.current_position(), 2);
        assert_eq!(validator.mistake_count(), 1);

        validator.reset();
        assert_eq!(validator.current_position(), 0);
        assert_eq!(validator.mistake_count(), 0);
        assert_eq!(validator.target(), "かるた");
    }

    #[test]
    fn test_empty_target_trivially_complete() {
        let mut validator = InputValidator::new();
        validator.set_target("");
        assert_eq!(validator.patterns(), &[String::new()][..]);
        // 何を打っても受理されない
        assert!(!validator.validate_char('a'));
        assert_eq!(validator.mistake_count(), 1);
    }

    #[test]
    fn test_round_trip_all_candidates() {
        let validator = InputValidator::new();
        for source in ["つる", "がっこう", "こう", "しゃしん", "おんせんに"] {
            for candidate in expand(source) {
                let result = validator.validate_input(source, &candidate);
                assert!(result.is_valid, "{} の候補 {} が不正扱い", source, candidate);
            }
        }
    }

    #[test]
    fn test_prefix_monotonicity() {
        let validator = InputValidator::new();
        let candidate = "tsuru";
        for k in 0..=candidate.len() {
            let result = validator.validate_input("つる", &candidate[..k]);
            assert!(result.is_valid, "prefix {} が不正扱い", &candidate[..k]);
            assert_eq!(result.progress, k as f64 / candidate.len() as f64);
        }
    }

    #[test]
    fn test_validate_char_over_full_reading() {
        let mut validator = InputValidator::new();
        validator.set_target("ぐんまけん");
        // 候補に gunmaken があるので単独 n で打ち切れる
        for ch in "gunmaken".chars() {
            assert!(validator.validate_char(ch), "{} が拒否された", ch);
        }
        assert!(validator.is_complete());
        assert_eq!(validator.mistake_count(), 0);
    }
}
