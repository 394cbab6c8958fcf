//! Kana conversion tables
//!
//! Every kana grapheme has exactly one canonical entry keyed by its
//! full-width katakana form. Voiced and semi-voiced half-width forms are
//! stored as explicit two-character sequences; they have no arithmetic
//! relation to the full-width code points.

use std::collections::HashMap;
use std::sync::LazyLock;

/// One row of the kana table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanaEntry {
    /// Full-width katakana form
    pub katakana: &'static str,
    /// Full-width hiragana form (identical to `katakana` for shared marks)
    pub hiragana: &'static str,
    /// Half-width katakana form, if one exists
    pub half: Option<&'static str>,
    /// The half-width form is an approximation and is not used for the
    /// reverse direction (ヮ → ﾜ, but ﾜ → ワ)
    pub lossy: bool,
}

const fn kana(katakana: &'static str, hiragana: &'static str, half: &'static str) -> KanaEntry {
    KanaEntry {
        katakana,
        hiragana,
        half: Some(half),
        lossy: false,
    }
}

const fn approx(katakana: &'static str, hiragana: &'static str, half: &'static str) -> KanaEntry {
    KanaEntry {
        katakana,
        hiragana,
        half: Some(half),
        lossy: true,
    }
}

const fn wide_only(katakana: &'static str, hiragana: &'static str) -> KanaEntry {
    KanaEntry {
        katakana,
        hiragana,
        half: None,
        lossy: false,
    }
}

/// Marks written the same way in both scripts
const fn mark(full: &'static str, half: &'static str) -> KanaEntry {
    kana(full, full, half)
}

/// The kana table, in katakana code point order followed by shared marks
pub static KANA_TABLE: &[KanaEntry] = &[
    kana("ァ", "ぁ", "ｧ"),
    kana("ア", "あ", "ｱ"),
    kana("ィ", "ぃ", "ｨ"),
    kana("イ", "い", "ｲ"),
    kana("ゥ", "ぅ", "ｩ"),
    kana("ウ", "う", "ｳ"),
    kana("ェ", "ぇ", "ｪ"),
    kana("エ", "え", "ｴ"),
    kana("ォ", "ぉ", "ｫ"),
    kana("オ", "お", "ｵ"),
    kana("カ", "か", "ｶ"),
    kana("ガ", "が", "ｶﾞ"),
    kana("キ", "き", "ｷ"),
    kana("ギ", "ぎ", "ｷﾞ"),
    kana("ク", "く", "ｸ"),
    kana("グ", "ぐ", "ｸﾞ"),
    kana("ケ", "け", "ｹ"),
    kana("ゲ", "げ", "ｹﾞ"),
    kana("コ", "こ", "ｺ"),
    kana("ゴ", "ご", "ｺﾞ"),
    kana("サ", "さ", "ｻ"),
    kana("ザ", "ざ", "ｻﾞ"),
    kana("シ", "し", "ｼ"),
    kana("ジ", "じ", "ｼﾞ"),
    kana("ス", "す", "ｽ"),
    kana("ズ", "ず", "ｽﾞ"),
    kana("セ", "せ", "ｾ"),
    kana("ゼ", "ぜ", "ｾﾞ"),
    kana("ソ", "そ", "ｿ"),
    kana("ゾ", "ぞ", "ｿﾞ"),
    kana("タ", "た", "ﾀ"),
    kana("ダ", "だ", "ﾀﾞ"),
    kana("チ", "ち", "ﾁ"),
    kana("ヂ", "ぢ", "ﾁﾞ"),
    kana("ッ", "っ", "ｯ"),
    kana("ツ", "つ", "ﾂ"),
    kana("ヅ", "づ", "ﾂﾞ"),
    kana("テ", "て", "ﾃ"),
    kana("デ", "で", "ﾃﾞ"),
    kana("ト", "と", "ﾄ"),
    kana("ド", "ど", "ﾄﾞ"),
    kana("ナ", "な", "ﾅ"),
    kana("ニ", "に", "ﾆ"),
    kana("ヌ", "ぬ", "ﾇ"),
    kana("ネ", "ね", "ﾈ"),
    kana("ノ", "の", "ﾉ"),
    kana("ハ", "は", "ﾊ"),
    kana("バ", "ば", "ﾊﾞ"),
    kana("パ", "ぱ", "ﾊﾟ"),
    kana("ヒ", "ひ", "ﾋ"),
    kana("ビ", "び", "ﾋﾞ"),
    kana("ピ", "ぴ", "ﾋﾟ"),
    kana("フ", "ふ", "ﾌ"),
    kana("ブ", "ぶ", "ﾌﾞ"),
    kana("プ", "ぷ", "ﾌﾟ"),
    kana("ヘ", "へ", "ﾍ"),
    kana("ベ", "べ", "ﾍﾞ"),
    kana("ペ", "ぺ", "ﾍﾟ"),
    kana("ホ", "ほ", "ﾎ"),
    kana("ボ", "ぼ", "ﾎﾞ"),
    kana("ポ", "ぽ", "ﾎﾟ"),
    kana("マ", "ま", "ﾏ"),
    kana("ミ", "み", "ﾐ"),
    kana("ム", "む", "ﾑ"),
    kana("メ", "め", "ﾒ"),
    kana("モ", "も", "ﾓ"),
    kana("ャ", "ゃ", "ｬ"),
    kana("ヤ", "や", "ﾔ"),
    kana("ュ", "ゅ", "ｭ"),
    kana("ユ", "ゆ", "ﾕ"),
    kana("ョ", "ょ", "ｮ"),
    kana("ヨ", "よ", "ﾖ"),
    kana("ラ", "ら", "ﾗ"),
    kana("リ", "り", "ﾘ"),
    kana("ル", "る", "ﾙ"),
    kana("レ", "れ", "ﾚ"),
    kana("ロ", "ろ", "ﾛ"),
    approx("ヮ", "ゎ", "ﾜ"),
    kana("ワ", "わ", "ﾜ"),
    approx("ヰ", "ゐ", "ｲ"),
    approx("ヱ", "ゑ", "ｴ"),
    kana("ヲ", "を", "ｦ"),
    kana("ン", "ん", "ﾝ"),
    kana("ヴ", "ゔ", "ｳﾞ"),
    wide_only("ヵ", "ゕ"),
    wide_only("ヶ", "ゖ"),
    wide_only("ヽ", "ゝ"),
    wide_only("ヾ", "ゞ"),
    mark("、", "､"),
    mark("。", "｡"),
    mark("「", "｢"),
    mark("」", "｣"),
    mark("・", "･"),
    mark("ー", "ｰ"),
    mark("゛", "ﾞ"),
    mark("゜", "ﾟ"),
];

struct KanaIndex {
    by_katakana: HashMap<&'static [u8], &'static KanaEntry>,
    by_hiragana: HashMap<&'static [u8], &'static KanaEntry>,
    by_half: HashMap<&'static [u8], &'static KanaEntry>,
}

impl KanaIndex {
    fn build(table: &'static [KanaEntry]) -> Self {
        let mut by_katakana = HashMap::with_capacity(table.len());
        let mut by_hiragana = HashMap::with_capacity(table.len());
        let mut by_half = HashMap::with_capacity(table.len());

        for entry in table {
            by_katakana.insert(entry.katakana.as_bytes(), entry);
            by_hiragana.insert(entry.hiragana.as_bytes(), entry);
            if let (Some(half), false) = (entry.half, entry.lossy) {
                by_half.insert(half.as_bytes(), entry);
            }
        }

        Self {
            by_katakana,
            by_hiragana,
            by_half,
        }
    }

    /// Entry for a full-width grapheme in either script
    fn full(&self, grapheme: &[u8]) -> Option<&'static KanaEntry> {
        self.by_katakana
            .get(grapheme)
            .or_else(|| self.by_hiragana.get(grapheme))
            .copied()
    }
}

static INDEX: LazyLock<KanaIndex> = LazyLock::new(|| KanaIndex::build(KANA_TABLE));

/// Half-width katakana for a full-width katakana or hiragana grapheme
pub fn lookup_half_width(grapheme: &[u8]) -> Option<&'static [u8]> {
    INDEX.full(grapheme)?.half.map(str::as_bytes)
}

/// Full-width katakana for a half-width unit (plain or composite)
pub fn lookup_full_width_katakana(half: &[u8]) -> Option<&'static [u8]> {
    INDEX.by_half.get(half).map(|e| e.katakana.as_bytes())
}

/// Full-width hiragana for a half-width unit (plain or composite)
pub fn lookup_full_width_hiragana(half: &[u8]) -> Option<&'static [u8]> {
    INDEX.by_half.get(half).map(|e| e.hiragana.as_bytes())
}

/// Hiragana counterpart of a full-width katakana grapheme
pub fn lookup_hiragana(katakana: &[u8]) -> Option<&'static [u8]> {
    INDEX.by_katakana.get(katakana).map(|e| e.hiragana.as_bytes())
}

/// Katakana counterpart of a full-width hiragana grapheme
pub fn lookup_katakana(hiragana: &[u8]) -> Option<&'static [u8]> {
    INDEX.by_hiragana.get(hiragana).map(|e| e.katakana.as_bytes())
}

/// Half-width katakana for `grapheme`, or `grapheme` itself if unmapped
pub fn to_half_width_katakana(grapheme: &[u8]) -> &[u8] {
    lookup_half_width(grapheme).unwrap_or(grapheme)
}

/// Full-width katakana for `half`, or `half` itself if unmapped
pub fn to_full_width_katakana(half: &[u8]) -> &[u8] {
    lookup_full_width_katakana(half).unwrap_or(half)
}

/// Hiragana for `katakana`, or `katakana` itself if unmapped
pub fn hiragana_of(katakana: &[u8]) -> &[u8] {
    lookup_hiragana(katakana).unwrap_or(katakana)
}

/// Katakana for `hiragana`, or `hiragana` itself if unmapped
pub fn katakana_of(hiragana: &[u8]) -> &[u8] {
    lookup_katakana(hiragana).unwrap_or(hiragana)
}
