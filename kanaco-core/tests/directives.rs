//! End-to-end behaviour of each directive and of directive combinations

use kanaco_core::{transform_bytes, transform_string, Converter, Mode};

const HALF_PUNCT: &str = "!#$%&()*+,-./:;<=>?@[]^_`{|}";
const FULL_PUNCT: &str = "！＃＄％＆（）＊＋，－．／：；＜＝＞？＠［］＾＿｀｛｜｝";
const HALF_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const FULL_LETTERS: &str = "ａｂｃｄｅｆｇｈｉｊｋｌｍｎｏｐｑｒｓｔｕｖｗｘｙｚＡＢＣＤＥＦＧＨＩＪＫＬＭＮＯＰＱＲＳＴＵＶＷＸＹＺ";

#[test]
fn test_scenarios() {
    assert_eq!(transform_string("aＡ1１ｶﾞガ", "rnK"), "aA11ガガ");
    assert_eq!(transform_string("　", "s"), " ");
    assert_eq!(transform_string("ｶﾞ", "H"), "が");
    assert_eq!(transform_string("aＡ1１ｶﾞガ", ""), "aＡ1１ｶﾞガ");
}

#[test]
fn test_latin_directives() {
    assert_eq!(transform_string(FULL_LETTERS, "r"), HALF_LETTERS);
    assert_eq!(transform_string(HALF_LETTERS, "R"), FULL_LETTERS);
    // r and R leave digits and punctuation alone
    assert_eq!(transform_string("１＃", "r"), "１＃");
    assert_eq!(transform_string("1#", "R"), "1#");
}

#[test]
fn test_digit_directives() {
    assert_eq!(transform_string("０１２３４５６７８９", "n"), "0123456789");
    assert_eq!(transform_string("0123456789", "N"), "０１２３４５６７８９");
    assert_eq!(transform_string("Ａ＃", "n"), "Ａ＃");
}

#[test]
fn test_alphanumeric_directives() {
    assert_eq!(transform_string(FULL_PUNCT, "a"), HALF_PUNCT);
    assert_eq!(transform_string(HALF_PUNCT, "A"), FULL_PUNCT);
    assert_eq!(transform_string("Ｒｕｓｔ１．８１", "a"), "Rust1.81");
    assert_eq!(transform_string("Rust1.81", "A"), "Ｒｕｓｔ１．８１");
}

#[test]
fn test_alphanumeric_exclusions() {
    // Quotes, backslash and tilde are never converted
    assert_eq!(transform_string("\"'\\~", "A"), "\"'\\~");
    assert_eq!(transform_string("＂＇＼～", "a"), "＂＇＼～");
    // Space belongs to s/S only
    assert_eq!(transform_string(" 　", "aA"), " 　");
}

#[test]
fn test_space_directives() {
    assert_eq!(transform_string("a b　c", "s"), "a b c");
    assert_eq!(transform_string("a b　c", "S"), "a　b　c");
    assert_eq!(transform_string("\t\n", "S"), "\t\n");
}

#[test]
fn test_kana_directives_ignore_other_script() {
    assert_eq!(transform_string("かカ", "k"), "かｶ");
    assert_eq!(transform_string("かカ", "h"), "ｶカ");
    assert_eq!(transform_string("かカｶ", "c"), "かかｶ");
    assert_eq!(transform_string("かカｶ", "C"), "カカｶ");
}

#[test]
fn test_half_width_kana_widening_choice() {
    assert_eq!(transform_string("ｶﾀｶﾅ", "K"), "カタカナ");
    assert_eq!(transform_string("ｶﾀｶﾅ", "H"), "かたかな");
    // First matching directive wins
    assert_eq!(transform_string("ｶﾀｶﾅ", "HK"), "かたかな");
    assert_eq!(transform_string("ｶﾀｶﾅ", "KH"), "カタカナ");
}

#[test]
fn test_combined_mode() {
    let input = "ﾃﾞｰﾀ　ＩＤ：１２３、ﾊﾟｽﾜｰﾄﾞ";
    assert_eq!(transform_string(input, "asK"), "データ ID:123、パスワード");
    assert_eq!(transform_string(input, "KV"), "データ　ＩＤ：１２３、パスワード");
}

#[test]
fn test_overlapping_directives_never_undo_a_conversion() {
    assert_eq!(transform_string("Ａ", "aR"), "A");
    assert_eq!(transform_string("a", "Ra"), "ａ");
    assert_eq!(transform_string("１", "nN"), "1");
    assert_eq!(transform_string("１", "nA"), "1");
    assert_eq!(transform_string("１", "Nn"), "1");
    assert_eq!(transform_string("Ａ１＃", "rna"), "A1#");
}

#[test]
fn test_punctuation_with_both_printable_directions() {
    assert_eq!(transform_string("!", "Aa"), "！");
    assert_eq!(transform_string("＃", "aA"), "#");
    assert_eq!(transform_string("a!１＃", "Aa"), "ａ！1#");
    assert_eq!(transform_string("a!１＃", "aA"), "ａ！1#");
}

#[test]
fn test_duplicate_letters_are_ignored() {
    for (dup, single) in [("rr", "r"), ("KkK", "Kk"), ("aAa", "aA"), ("sSsS", "sS")] {
        assert_eq!(Mode::parse(dup), Mode::parse(single));
        let input = "Ａa１ ｶﾞガ　";
        assert_eq!(transform_string(input, dup), transform_string(input, single));
    }
}

#[test]
fn test_unknown_letters_are_ignored() {
    assert_eq!(transform_string("Ａ１", "xyz?r"), "A１");
    assert!("xyz?r".parse::<Mode>().is_err());
}

#[test]
fn test_non_convertible_units_pass_through() {
    let input = "漢字©😀\n\r\0";
    assert_eq!(transform_string(input, "rnaskhcRNASKHC"), input);
}

#[test]
fn test_malformed_input_is_preserved() {
    let mut input = b"\xFF".to_vec();
    input.extend_from_slice("Ａ".as_bytes());
    input.extend_from_slice(b"\xE3\x81");

    let mut expected = b"\xFF".to_vec();
    expected.push(b'A');
    expected.extend_from_slice(b"\xE3\x81");

    assert_eq!(transform_bytes(&input, "r"), expected);
}

#[test]
fn test_converter_reuse() {
    let converter = Converter::new("KC");
    assert_eq!(converter.mode().to_string(), "KC");
    assert_eq!(converter.convert_str("ｶﾞ"), "ガ");
    assert_eq!(converter.convert_str("ひらがな"), "ヒラガナ");
    assert_eq!(converter.convert_bytes("ﾎﾟ".as_bytes()), "ポ".as_bytes());
}
