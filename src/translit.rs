use pinyin::ToPinyin;

/// Remove every occurrence of the administrative suffix `市`, wherever it
/// appears in the string.
pub fn strip_city_suffix(input: &str) -> String {
    input.chars().filter(|&c| c != '市').collect()
}

/// Per-character romanization: each character becomes its plain (toneless,
/// lowercase) pinyin syllable, concatenated without separators. Characters
/// with no reading pass through unchanged. Readings are context-free, so
/// polyphonic characters always get their default syllable.
pub fn transliterate(input: &str) -> String {
    let mut out = String::new();
    for ch in input.chars() {
        match ch.to_pinyin() {
            Some(syllable) => out.push_str(syllable.plain()),
            None => out.push(ch),
        }
    }
    out
}

/// Romanize a place name: strip the `市` suffix, then transliterate.
pub fn place_to_pinyin(input: &str) -> String {
    transliterate(&strip_city_suffix(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_suffix() {
        assert_eq!(strip_city_suffix("深圳市"), "深圳");
    }

    #[test]
    fn strips_every_occurrence() {
        assert_eq!(strip_city_suffix("市深市圳市"), "深圳");
        assert_eq!(strip_city_suffix("市"), "");
    }

    #[test]
    fn romanizes_place_names() {
        assert_eq!(place_to_pinyin("深圳市"), "shenzhen");
        assert_eq!(place_to_pinyin("北京"), "beijing");
    }

    #[test]
    fn passes_through_non_chinese_characters() {
        assert_eq!(transliterate("abc 123"), "abc 123");
        assert_eq!(place_to_pinyin("深圳2024"), "shenzhen2024");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(place_to_pinyin(""), "");
    }
}
