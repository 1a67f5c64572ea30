//! 上毛かるた 札データ
//!
//! 全44枚の読み札。読みは InputValidator のターゲットにそのまま使える
//! ひらがな表記 (語の区切りに半角スペース)。

use serde::Serialize;

use crate::rng::XorShift;

/// 札のカテゴリー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    History,
    Geography,
    Culture,
    Nature,
    Industry,
}

/// 難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 読み札1枚
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KarutaCard {
    /// 一意識別子 (取り札のかな)
    pub id: &'static str,
    /// 札の文句
    pub kanji: &'static str,
    /// ひらがな読み
    pub hiragana: &'static str,
    pub category: CardCategory,
    pub difficulty: Difficulty,
}

/// 全44枚の札
pub const KARUTA_CARDS: &[KarutaCard] = &[
    KarutaCard {
        id: "a",
        kanji: "浅間のいたずら鬼の押出し",
        hiragana: "あさまの いたずら おにの おしだし",
        category: CardCategory::Nature,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "i",
        kanji: "伊香保温泉日本の名湯",
        hiragana: "いかほおんせん にほんの めいとう",
        category: CardCategory::Geography,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "u",
        kanji: "碓氷峠の関所跡",
        hiragana: "うすいとうげの せきしょあと",
        category: CardCategory::History,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "e",
        kanji: "縁起だるまの少林山",
        hiragana: "えんぎだるまの しょうりんざん",
        category: CardCategory::Culture,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "o",
        kanji: "太田金山子育呑龍",
        hiragana: "おおた かなやま こそだて どんりゅう",
        category: CardCategory::History,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "ka",
        kanji: "関東と信越つなぐ高崎市",
        hiragana: "かんとうと しんえつ つなぐ たかさきし",
        category: CardCategory::Geography,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "ki",
        kanji: "桐生は日本の機どころ",
        hiragana: "きりゅうは にほんの はたどころ",
        category: CardCategory::Industry,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "ku",
        kanji: "草津よいとこ薬の温泉",
        hiragana: "くさつ よいとこ くすりの いでゆ",
        category: CardCategory::Geography,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "ke",
        kanji: "県都前橋生糸の市",
        hiragana: "けんと まえばし いとのまち",
        category: CardCategory::Industry,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "ko",
        kanji: "心の灯台内村鑑三",
        hiragana: "こころの とうだい うちむらかんぞう",
        category: CardCategory::History,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "sa",
        kanji: "三波石と共に名高い冬桜",
        hiragana: "さんばせきと ともに なだかい ふゆざくら",
        category: CardCategory::Nature,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "shi",
        kanji: "しのぶ毛の国二子塚",
        hiragana: "しのぶ けのくに ふたごづか",
        category: CardCategory::History,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "su",
        kanji: "裾野は長し赤城山",
        hiragana: "すそのは ながし あかぎやま",
        category: CardCategory::Nature,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "se",
        kanji: "仙境尾瀬沼花の原",
        hiragana: "せんきょう おぜぬま はなのはら",
        category: CardCategory::Nature,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "so",
        kanji: "そろいの支度で八木節音頭",
        hiragana: "そろいの したくで やぎぶしおんど",
        category: CardCategory::Culture,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "ta",
        kanji: "滝は吹割片品渓谷",
        hiragana: "たきは ふきわれ かたしなけいこく",
        category: CardCategory::Nature,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "chi",
        kanji: "力あわせる二百万",
        hiragana: "ちから あわせる にひゃくまん",
        category: CardCategory::Culture,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "tsu",
        kanji: "つる舞う形の群馬県",
        hiragana: "つる まう かたち の ぐんまけん",
        category: CardCategory::Geography,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "te",
        kanji: "天下の義人茂左衛門",
        hiragana: "てんかの ぎじん もざえもん",
        category: CardCategory::History,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "to",
        kanji: "利根は坂東一の川",
        hiragana: "とねは ばんどういちの かわ",
        category: CardCategory::Geography,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "na",
        kanji: "中山道しのぶ安中杉並木",
        hiragana: "なかせんどう しのぶ あんなか すぎなみき",
        category: CardCategory::History,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "ni",
        kanji: "日本で最初の富岡製糸",
        hiragana: "にほんで さいしょの とみおかせいし",
        category: CardCategory::Industry,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "nu",
        kanji: "沼田城下の塩原太助",
        hiragana: "ぬまたじょうかの しおばらたすけ",
        category: CardCategory::History,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "ne",
        kanji: "ねぎとこんにゃく下仁田名物",
        hiragana: "ねぎ と こんにゃく しもにた めいぶつ",
        category: CardCategory::Industry,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "no",
        kanji: "登る榛名のキャンプ村",
        hiragana: "のぼる はるなの きゃんぷむら",
        category: CardCategory::Geography,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "ha",
        kanji: "花山公園つつじの名所",
        hiragana: "はなやまこうえん つつじの めいしょ",
        category: CardCategory::Nature,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "hi",
        kanji: "白衣観音慈悲の御手",
        hiragana: "びゃくえかんのん じひのみて",
        category: CardCategory::Culture,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "fu",
        kanji: "分福茶釜の茂林寺",
        hiragana: "ぶんぶくちゃがまの もりんじ",
        category: CardCategory::Culture,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "he",
        kanji: "平和の使徒新島襄",
        hiragana: "へいわの つかい にいじまじょう",
        category: CardCategory::History,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "ho",
        kanji: "誇る文豪田山花袋",
        hiragana: "ほこる ぶんごう たやまかたい",
        category: CardCategory::Culture,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "ma",
        kanji: "繭と生糸は日本一",
        hiragana: "まゆと きいとは にほんいち",
        category: CardCategory::Industry,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "mi",
        kanji: "水上谷川スキーと登山",
        hiragana: "みなかみ たにがわ すきいと とざん",
        category: CardCategory::Geography,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "mu",
        kanji: "昔を語る多胡の古碑",
        hiragana: "むかしを かたる たごのこひ",
        category: CardCategory::History,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "me",
        kanji: "銘仙織出す伊勢崎市",
        hiragana: "めいせん おりだす いせさきし",
        category: CardCategory::Industry,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "mo",
        kanji: "紅葉に映える妙義山",
        hiragana: "もみじに はえる みょうぎさん",
        category: CardCategory::Nature,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "ya",
        kanji: "耶馬渓しのぐ吾妻峡",
        hiragana: "やばけい しのぐ あがつまきょう",
        category: CardCategory::Nature,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "yu",
        kanji: "ゆかりは古し貫前神社",
        hiragana: "ゆかりは ふるし ぬきさきじんじゃ",
        category: CardCategory::Culture,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "yo",
        kanji: "世のちり洗う四万温泉",
        hiragana: "よのちり あらう しまおんせん",
        category: CardCategory::Geography,
        difficulty: Difficulty::Easy,
    },
    KarutaCard {
        id: "ra",
        kanji: "雷と空風義理人情",
        hiragana: "らいと からっかぜ ぎりにんじょう",
        category: CardCategory::Culture,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "ri",
        kanji: "理想の電化に電源群馬",
        hiragana: "りそうの でんかに でんげんぐんま",
        category: CardCategory::Industry,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "ru",
        kanji: "ループで名高い清水トンネル",
        hiragana: "るうぷで なだかい しみずとんねる",
        category: CardCategory::Industry,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "re",
        kanji: "歴史に名高い新田義貞",
        hiragana: "れきしに なだかい にったよしさだ",
        category: CardCategory::History,
        difficulty: Difficulty::Medium,
    },
    KarutaCard {
        id: "ro",
        kanji: "老農船津伝次平",
        hiragana: "ろうのう ふなつ でんじべい",
        category: CardCategory::History,
        difficulty: Difficulty::Hard,
    },
    KarutaCard {
        id: "wa",
        kanji: "和算の大家関孝和",
        hiragana: "わさんの たいか せきたかかず",
        category: CardCategory::History,
        difficulty: Difficulty::Medium,
    },
];

/// ID で札を検索
pub fn card_by_id(id: &str) -> Option<&'static KarutaCard> {
    KARUTA_CARDS.iter().find(|card| card.id == id)
}

/// カテゴリー別の札一覧
pub fn cards_by_category(category: CardCategory) -> Vec<&'static KarutaCard> {
    KARUTA_CARDS
        .iter()
        .filter(|card| card.category == category)
        .collect()
}

/// 難易度別の札一覧
pub fn cards_by_difficulty(difficulty: Difficulty) -> Vec<&'static KarutaCard> {
    KARUTA_CARDS
        .iter()
        .filter(|card| card.difficulty == difficulty)
        .collect()
}

/// ランダムに count 枚選ぶ (重複なし)
pub fn random_cards(count: usize, rng: &mut XorShift) -> Vec<&'static KarutaCard> {
    let mut deck: Vec<&'static KarutaCard> = KARUTA_CARDS.iter().collect();
    // Fisher-Yates
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(i + 1);
        deck.swap(i, j);
    }
    deck.truncate(count.min(KARUTA_CARDS.len()));
    deck
}

/// 札データの整合性チェック
/// 44枚、ID 重複なし、読みはすべて展開可能なひらがな
pub fn validate_deck() -> bool {
    if KARUTA_CARDS.len() != 44 {
        return false;
    }

    let mut seen = std::collections::HashSet::new();
    for card in KARUTA_CARDS {
        if !seen.insert(card.id) {
            return false;
        }
        if card.hiragana.is_empty() {
            return false;
        }
        if !card
            .hiragana
            .chars()
            .all(|ch| crate::core::kana::is_hiragana(ch) || ch == ' ')
        {
            return false;
        }
    }
    true
}
