//! 読み -> ローマ字候補展開
//!
//! ひらがなの読みを、正解として受理できる全ローマ字表記へ展開します。
//! 単位ごとの基本スペルに加えて位置依存の3規則を適用します:
//! 1. 促音「っ」: 次の単位の先頭子音を重ねる
//! 2. 長音「う」: お段の直後では u / o の両方を許容
//! 3. 撥音「ん」: 次の音が母音・や行・な行なら nn のみ許容

use crate::core::kana;
use crate::core::tokenizer::tokenize;

/// 読みを受理可能なローマ字候補の一覧へ展開
/// 戻り値は必ず1件以上。ひらがなを含まない文字列はそのまま1件で返す
pub fn expand(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    // 非ひらがな文字列は素通し (数字、ASCII、カタカナ等)
    if !kana::has_kana_content(text) {
        return vec![text.to_string()];
    }

    let units = tokenize(text);
    let mut lists: Vec<Vec<String>> = Vec::with_capacity(units.len());

    for (i, unit) in units.iter().enumerate() {
        let list = if *unit == "っ" {
            sokuon_spellings(units.get(i + 1).copied())
        } else if *unit == "う" && i > 0 && kana::is_o_column_unit(units[i - 1]) {
            vec!["u".to_string(), "o".to_string()]
        } else if *unit == "ん" {
            nasal_spellings(units.get(i + 1).copied())
        } else if let Some(spellings) = kana::base_spellings(unit) {
            spellings.iter().map(|s| s.to_string()).collect()
        } else {
            // 表にない文字はそのまま受理対象にする
            log::debug!("未対応の文字を素通し: {}", unit);
            vec![unit.to_string()]
        };
        lists.push(list);
    }

    combine(&lists)
}

/// 促音の候補: 次の単位のスペル先頭子音を重複なしで集める
/// 子音始まりのスペルがない、または促音が末尾なら t にフォールバック
fn sokuon_spellings(next: Option<&str>) -> Vec<String> {
    if let Some(next) = next {
        if let Some(spellings) = kana::base_spellings(next) {
            let mut consonants: Vec<String> = Vec::new();
            for spelling in spellings {
                if let Some(head) = spelling.chars().next() {
                    if kana::is_geminable_consonant(head) {
                        let head = head.to_string();
                        if !consonants.contains(&head) {
                            consonants.push(head);
                        }
                    }
                }
            }
            if !consonants.is_empty() {
                return consonants;
            }
        }
    }
    vec!["t".to_string()]
}

/// 撥音の候補: 次の単位を1つ先読みして単独 n の可否を決める
/// 末尾、または次の音の先頭が曖昧を生まない子音なら n / nn の両方
fn nasal_spellings(next: Option<&str>) -> Vec<String> {
    if let Some(next) = next {
        let ambiguous = match kana::base_spellings(next) {
            Some(spellings) => spellings
                .iter()
                .any(|s| s.chars().next().is_some_and(kana::blocks_single_n)),
            None => next.chars().next().is_some_and(kana::blocks_single_n),
        };
        if ambiguous {
            return vec!["nn".to_string()];
        }
    }
    vec!["n".to_string(), "nn".to_string()]
}

/// 単位ごとの候補リストを直積で結合 (先頭スペル優先の深さ優先順)
fn combine(lists: &[Vec<String>]) -> Vec<String> {
    let Some((first, rest)) = lists.split_first() else {
        return vec![String::new()];
    };
    if rest.is_empty() {
        return first.clone();
    }

    let tails = combine(rest);
    let mut result = Vec::with_capacity(first.len() * tails.len());
    for head in first {
        for tail in &tails {
            let mut candidate = String::with_capacity(head.len() + tail.len());
            candidate.push_str(head);
            candidate.push_str(tail);
            result.push(candidate);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_unit() {
        assert_eq!(expand("あ"), vec!["a"]);
        assert_eq!(expand("か"), vec!["ka"]);
    }

    #[test]
    fn test_multi_spelling_combination() {
        let patterns = expand("つる");
        assert_eq!(patterns, vec!["tsuru", "turu"]);
    }

    #[test]
    fn test_sokuon() {
        assert!(expand("がっこう").contains(&"gakkou".to_string()));
        assert!(expand("にっぽん").contains(&"nippon".to_string()));
        assert!(expand("ぶっか").contains(&"bukka".to_string()));
        assert!(expand("せっかく").contains(&"sekkaku".to_string()));
    }

    #[test]
    fn test_sokuon_before_multi_spelling() {
        // っし -> s のみ重ねる (shi / si とも s 始まり)
        let patterns = expand("っし");
        assert_eq!(patterns, vec!["sshi", "ssi"]);
        // っち -> chi の c は対象外なので t のみ
        let patterns = expand("っち");
        assert_eq!(patterns, vec!["tchi", "tti"]);
    }

    #[test]
    fn test_sokuon_fallback() {
        // 末尾の促音は t
        assert_eq!(expand("あっ"), vec!["at"]);
        // 次が母音でも t
        assert_eq!(expand("っあ"), vec!["ta"]);
    }

    #[test]
    fn test_long_vowel() {
        let patterns = expand("こう");
        assert!(patterns.contains(&"kou".to_string()));
        assert!(patterns.contains(&"koo".to_string()));
    }

    #[test]
    fn test_long_vowel_only_after_o_column() {
        // か はお段ではないので通常の u のみ
        assert_eq!(expand("かう"), vec!["kau"]);
        // 先頭の う も通常
        assert_eq!(expand("う"), vec!["u"]);
    }

    #[test]
    fn test_nasal_context() {
        // 次が せ (s始まり) -> n/nn 両方、次が に (n始まり) -> nn のみ
        let patterns = expand("おんせんに");
        assert_eq!(patterns, vec!["onsennni", "onnsennni"]);
        assert!(!patterns.contains(&"onsenni".to_string()));
        assert!(!patterns.contains(&"onnsenni".to_string()));
    }

    #[test]
    fn test_nasal_before_vowel_and_glide() {
        // んい -> nn のみ
        assert_eq!(expand("かんい"), vec!["kanni"]);
        // んや -> nn のみ
        assert_eq!(expand("ほんや"), vec!["honnya"]);
    }

    #[test]
    fn test_nasal_at_end() {
        let patterns = expand("けん");
        assert_eq!(patterns, vec!["ken", "kenn"]);
    }

    #[test]
    fn test_nasal_before_safe_consonant() {
        // ま (m始まり) は単独 n を妨げない
        let patterns = expand("ぐんま");
        assert_eq!(patterns, vec!["gunma", "gunnma"]);
    }

    #[test]
    fn test_digraph_expansion() {
        assert_eq!(expand("きょ"), vec!["kyo"]);
        let patterns = expand("しゃ");
        assert_eq!(patterns, vec!["sha", "sya"]);
    }

    #[test]
    fn test_space_passthrough_in_kana() {
        let patterns = expand("つる まう");
        assert!(patterns.contains(&"tsuru mau".to_string()));
        assert!(patterns.contains(&"turu mau".to_string()));
    }

    #[test]
    fn test_fullwidth_space_normalized() {
        assert_eq!(expand("あ　い"), vec!["a i"]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(expand(""), vec![""]);
    }

    #[test]
    fn test_non_kana_passthrough() {
        assert_eq!(expand("ABC"), vec!["ABC"]);
        assert_eq!(expand("123"), vec!["123"]);
        assert_eq!(expand("カタカナ"), vec!["カタカナ"]);
    }

    #[test]
    fn test_mixed_unknown_chars() {
        // ひらがなを含む場合、未対応文字は単位として素通し
        assert_eq!(expand("あA"), vec!["aA"]);
    }

    #[test]
    fn test_never_empty() {
        for text in ["", "あ", "っ", "ん", "ー", "A", "がっこう"] {
            assert!(!expand(text).is_empty(), "{} の候補が空", text);
        }
    }

    #[test]
    fn test_real_card_readings() {
        let patterns = expand("つる まう かたち の ぐんまけん");
        assert!(patterns.contains(&"tsuru mau katachi no gunmaken".to_string()));

        let patterns = expand("ねぎ と こんにゃく しもにた めいぶつ");
        assert!(patterns.contains(&"negi to konnyaku shimonita meibutsu".to_string()));

        let patterns = expand("ちから あわせる にひゃくまんにん");
        assert!(patterns.contains(&"chikara awaseru nihyakumannin".to_string()));
    }
}
