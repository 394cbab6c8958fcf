//! Kana conversions in every direction over the whole table

use kanaco_core::transform_string;

/// (half-width, full-width katakana, full-width hiragana)
const KANA: &[(&str, &str, &str)] = &[
    ("ｧ", "ァ", "ぁ"), ("ｨ", "ィ", "ぃ"), ("ｩ", "ゥ", "ぅ"), ("ｪ", "ェ", "ぇ"), ("ｫ", "ォ", "ぉ"),
    ("ｱ", "ア", "あ"), ("ｲ", "イ", "い"), ("ｳ", "ウ", "う"), ("ｴ", "エ", "え"), ("ｵ", "オ", "お"),
    ("ｶ", "カ", "か"), ("ｷ", "キ", "き"), ("ｸ", "ク", "く"), ("ｹ", "ケ", "け"), ("ｺ", "コ", "こ"),
    ("ｶﾞ", "ガ", "が"), ("ｷﾞ", "ギ", "ぎ"), ("ｸﾞ", "グ", "ぐ"), ("ｹﾞ", "ゲ", "げ"), ("ｺﾞ", "ゴ", "ご"),
    ("ｻ", "サ", "さ"), ("ｼ", "シ", "し"), ("ｽ", "ス", "す"), ("ｾ", "セ", "せ"), ("ｿ", "ソ", "そ"),
    ("ｻﾞ", "ザ", "ざ"), ("ｼﾞ", "ジ", "じ"), ("ｽﾞ", "ズ", "ず"), ("ｾﾞ", "ゼ", "ぜ"), ("ｿﾞ", "ゾ", "ぞ"),
    ("ﾀ", "タ", "た"), ("ﾁ", "チ", "ち"), ("ﾂ", "ツ", "つ"), ("ﾃ", "テ", "て"), ("ﾄ", "ト", "と"),
    ("ﾀﾞ", "ダ", "だ"), ("ﾁﾞ", "ヂ", "ぢ"), ("ﾂﾞ", "ヅ", "づ"), ("ﾃﾞ", "デ", "で"), ("ﾄﾞ", "ド", "ど"),
    ("ｯ", "ッ", "っ"),
    ("ﾅ", "ナ", "な"), ("ﾆ", "ニ", "に"), ("ﾇ", "ヌ", "ぬ"), ("ﾈ", "ネ", "ね"), ("ﾉ", "ノ", "の"),
    ("ﾊ", "ハ", "は"), ("ﾋ", "ヒ", "ひ"), ("ﾌ", "フ", "ふ"), ("ﾍ", "ヘ", "へ"), ("ﾎ", "ホ", "ほ"),
    ("ﾊﾞ", "バ", "ば"), ("ﾋﾞ", "ビ", "び"), ("ﾌﾞ", "ブ", "ぶ"), ("ﾍﾞ", "ベ", "べ"), ("ﾎﾞ", "ボ", "ぼ"),
    ("ﾊﾟ", "パ", "ぱ"), ("ﾋﾟ", "ピ", "ぴ"), ("ﾌﾟ", "プ", "ぷ"), ("ﾍﾟ", "ペ", "ぺ"), ("ﾎﾟ", "ポ", "ぽ"),
    ("ﾏ", "マ", "ま"), ("ﾐ", "ミ", "み"), ("ﾑ", "ム", "む"), ("ﾒ", "メ", "め"), ("ﾓ", "モ", "も"),
    ("ｬ", "ャ", "ゃ"), ("ﾔ", "ヤ", "や"), ("ｭ", "ュ", "ゅ"), ("ﾕ", "ユ", "ゆ"), ("ｮ", "ョ", "ょ"), ("ﾖ", "ヨ", "よ"),
    ("ﾗ", "ラ", "ら"), ("ﾘ", "リ", "り"), ("ﾙ", "ル", "る"), ("ﾚ", "レ", "れ"), ("ﾛ", "ロ", "ろ"),
    ("ﾜ", "ワ", "わ"), ("ｦ", "ヲ", "を"), ("ﾝ", "ン", "ん"), ("ｳﾞ", "ヴ", "ゔ"),
];

/// Marks shared by both scripts: (half-width, full-width)
const MARKS: &[(&str, &str)] = &[
    ("､", "、"), ("｡", "。"), ("｢", "「"), ("｣", "」"), ("･", "・"), ("ｰ", "ー"), ("ﾞ", "゛"), ("ﾟ", "゜"),
];

#[test]
fn test_katakana_to_half_width() {
    for &(half, katakana, _) in KANA {
        assert_eq!(transform_string(katakana, "k"), half, "{katakana}");
    }
}

#[test]
fn test_half_width_to_katakana() {
    for &(half, katakana, _) in KANA {
        assert_eq!(transform_string(half, "K"), katakana, "{half}");
    }
}

#[test]
fn test_hiragana_to_half_width() {
    for &(half, _, hiragana) in KANA {
        assert_eq!(transform_string(hiragana, "h"), half, "{hiragana}");
    }
}

#[test]
fn test_half_width_to_hiragana() {
    for &(half, _, hiragana) in KANA {
        assert_eq!(transform_string(half, "H"), hiragana, "{half}");
    }
}

#[test]
fn test_script_swap() {
    for &(_, katakana, hiragana) in KANA {
        assert_eq!(transform_string(katakana, "c"), hiragana, "{katakana}");
        assert_eq!(transform_string(hiragana, "C"), katakana, "{hiragana}");
    }
}

#[test]
fn test_round_trips() {
    for &(half, katakana, hiragana) in KANA {
        let narrowed = transform_string(katakana, "k");
        assert_eq!(transform_string(&narrowed, "K"), katakana);
        let narrowed = transform_string(hiragana, "h");
        assert_eq!(transform_string(&narrowed, "H"), hiragana);
        let swapped = transform_string(half, "K");
        assert_eq!(transform_string(&transform_string(&swapped, "c"), "C"), katakana);
    }
}

#[test]
fn test_shared_marks() {
    for &(half, full) in MARKS {
        assert_eq!(transform_string(full, "k"), half, "{full}");
        assert_eq!(transform_string(full, "h"), half, "{full}");
        assert_eq!(transform_string(half, "K"), full, "{half}");
        assert_eq!(transform_string(half, "H"), full, "{half}");
        // Not part of either script, so the swap leaves them alone
        assert_eq!(transform_string(full, "cC"), full, "{full}");
    }
}

#[test]
fn test_whole_words() {
    assert_eq!(transform_string("ﾃﾞｰﾀﾍﾞｰｽ", "K"), "データベース");
    assert_eq!(transform_string("ﾊﾟｿｺﾝ", "H"), "ぱそこん");
    assert_eq!(transform_string("ヴァイオリン", "k"), "ｳﾞｧｲｵﾘﾝ");
    assert_eq!(transform_string("「こんにちは。」", "h"), "｢ｺﾝﾆﾁﾊ｡｣");
    assert_eq!(transform_string("ひらがなとカタカナ", "C"), "ヒラガナトカタカナ");
    assert_eq!(transform_string("ひらがなとカタカナ", "c"), "ひらがなとかたかな");
}

#[test]
fn test_lossy_kana_narrow_one_way() {
    assert_eq!(transform_string("ヮヰヱ", "k"), "ﾜｲｴ");
    assert_eq!(transform_string("ゎゐゑ", "h"), "ﾜｲｴ");
    assert_eq!(transform_string("ﾜｲｴ", "K"), "ワイエ");
    assert_eq!(transform_string("ヮヰヱ", "c"), "ゎゐゑ");
}

#[test]
fn test_kana_without_half_width_form() {
    assert_eq!(transform_string("ヵヶヽヾ", "k"), "ヵヶヽヾ");
    assert_eq!(transform_string("ゕゖゝゞ", "h"), "ゕゖゝゞ");
    assert_eq!(transform_string("ヵヶヽヾ", "c"), "ゕゖゝゞ");
    assert_eq!(transform_string("ゕゖゝゞ", "C"), "ヵヶヽヾ");
}

#[test]
fn test_stray_sound_marks() {
    // A mark that cannot attach stays its own unit
    assert_eq!(transform_string("ﾅﾞ", "K"), "ナ゛");
    assert_eq!(transform_string("ｶﾟ", "H"), "か゜");
    assert_eq!(transform_string("ﾞｶ", "K"), "゛カ");
}
