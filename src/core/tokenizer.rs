//! ひらがな文字列の音単位分割

use crate::core::kana::base_spellings;

/// 文字列を音単位 (1文字、拗音は2文字) に分割
/// 最長一致優先: 各位置でまず拗音2文字を試し、なければ1文字
/// 表にない文字もそのまま1文字単位として返す
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let mut indices = rest.char_indices();
        indices.next();
        let first_end = indices.next().map_or(rest.len(), |(i, _)| i);
        let second_end = indices.next().map_or(rest.len(), |(i, _)| i);

        // 拗音チェック (2文字)
        if second_end > first_end && base_spellings(&rest[..second_end]).is_some() {
            units.push(&rest[..second_end]);
            rest = &rest[second_end..];
        } else {
            units.push(&rest[..first_end]);
            rest = &rest[first_end..];
        }
    }

    units
}
