//! ひらがな -> ローマ字スペル表

/// ひらがな1文字（または拗音2文字）に対する基本スペル一覧を返す
/// 表にない文字（促音、記号、他スクリプト等）は None
pub fn base_spellings(unit: &str) -> Option<&'static [&'static str]> {
    let spellings: &'static [&'static str] = match unit {
        // あ行
        "あ" => &["a"],
        "い" => &["i"],
        "う" => &["u"],
        "え" => &["e"],
        "お" => &["o"],
        // か行
        "か" => &["ka"],
        "き" => &["ki"],
        "く" => &["ku"],
        "け" => &["ke"],
        "こ" => &["ko"],
        // さ行
        "さ" => &["sa"],
        "し" => &["shi", "si"],
        "す" => &["su"],
        "せ" => &["se"],
        "そ" => &["so"],
        // た行
        "た" => &["ta"],
        "ち" => &["chi", "ti"],
        "つ" => &["tsu", "tu"],
        "て" => &["te"],
        "と" => &["to"],
        // な行
        "な" => &["na"],
        "に" => &["ni"],
        "ぬ" => &["nu"],
        "ね" => &["ne"],
        "の" => &["no"],
        // は行
        "は" => &["ha"],
        "ひ" => &["hi"],
        "ふ" => &["fu", "hu"],
        "へ" => &["he"],
        "ほ" => &["ho"],
        // ま行
        "ま" => &["ma"],
        "み" => &["mi"],
        "む" => &["mu"],
        "め" => &["me"],
        "も" => &["mo"],
        // や行
        "や" => &["ya"],
        "ゆ" => &["yu"],
        "よ" => &["yo"],
        // ら行
        "ら" => &["ra"],
        "り" => &["ri"],
        "る" => &["ru"],
        "れ" => &["re"],
        "ろ" => &["ro"],
        // わ行
        "わ" => &["wa"],
        "を" => &["wo", "o"],
        // 撥音。末尾では n/nn 両方、文脈次第で nn のみ (expander 側で判定)
        "ん" => &["n", "nn"],

        // が行
        "が" => &["ga"],
        "ぎ" => &["gi"],
        "ぐ" => &["gu"],
        "げ" => &["ge"],
        "ご" => &["go"],
        // ざ行
        "ざ" => &["za"],
        "じ" => &["ji", "zi"],
        "ず" => &["zu"],
        "ぜ" => &["ze"],
        "ぞ" => &["zo"],
        // だ行
        "だ" => &["da"],
        "ぢ" => &["di", "ji"],
        "づ" => &["du", "zu"],
        "で" => &["de"],
        "ど" => &["do"],
        // ば行
        "ば" => &["ba"],
        "び" => &["bi"],
        "ぶ" => &["bu"],
        "べ" => &["be"],
        "ぼ" => &["bo"],
        // ぱ行
        "ぱ" => &["pa"],
        "ぴ" => &["pi"],
        "ぷ" => &["pu"],
        "ぺ" => &["pe"],
        "ぽ" => &["po"],

        // 拗音
        "きゃ" => &["kya"],
        "きゅ" => &["kyu"],
        "きょ" => &["kyo"],
        "しゃ" => &["sha", "sya"],
        "しゅ" => &["shu", "syu"],
        "しょ" => &["sho", "syo"],
        "ちゃ" => &["cha", "tya"],
        "ちゅ" => &["chu", "tyu"],
        "ちょ" => &["cho", "tyo"],
        "にゃ" => &["nya"],
        "にゅ" => &["nyu"],
        "にょ" => &["nyo"],
        "ひゃ" => &["hya"],
        "ひゅ" => &["hyu"],
        "ひょ" => &["hyo"],
        "みゃ" => &["mya"],
        "みゅ" => &["myu"],
        "みょ" => &["myo"],
        "りゃ" => &["rya"],
        "りゅ" => &["ryu"],
        "りょ" => &["ryo"],
        "ぎゃ" => &["gya"],
        "ぎゅ" => &["gyu"],
        "ぎょ" => &["gyo"],
        "じゃ" => &["ja", "zya"],
        "じゅ" => &["ju", "zyu"],
        "じょ" => &["jo", "zyo"],
        "びゃ" => &["bya"],
        "びゅ" => &["byu"],
        "びょ" => &["byo"],
        "ぴゃ" => &["pya"],
        "ぴゅ" => &["pyu"],
        "ぴょ" => &["pyo"],

        // スペース (全角は半角に正規化)
        " " => &[" "],
        "　" => &[" "],

        _ => return None,
    };
    Some(spellings)
}

/// ひらがな文字かどうか (U+3040 ~ U+309F)
pub fn is_hiragana(ch: char) -> bool {
    let cp = ch as u32;
    (0x3040..=0x309F).contains(&cp)
}

/// 変換対象の文字を含むか (ひらがな、空白、全角スペース)
/// 1文字も含まなければ expand はそのまま素通しする
pub fn has_kana_content(text: &str) -> bool {
    text.chars()
        .any(|ch| is_hiragana(ch) || ch.is_whitespace() || ch == '　')
}

/// 促音で重ねられる子音字かどうか
pub fn is_geminable_consonant(ch: char) -> bool {
    matches!(
        ch,
        'k' | 'g' | 's' | 'z' | 't' | 'd' | 'h' | 'b' | 'p' | 'm' | 'y' | 'r' | 'w' | 'n' | 'f'
    )
}

/// 次の音がこの文字で始まると、撥音の単独 n 表記が曖昧になるか
/// (母音・や行・な行が該当)
pub fn blocks_single_n(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o' | 'y' | 'n')
}

/// 長音化の対象となる直前文字か (お段: こう -> kou / koo)
pub fn is_o_column_unit(unit: &str) -> bool {
    matches!(
        unit,
        "こ" | "そ" | "と" | "の" | "ほ" | "も" | "よ" | "ろ" | "ご" | "ぞ" | "ど" | "ぼ" | "ぽ"
    )
}
