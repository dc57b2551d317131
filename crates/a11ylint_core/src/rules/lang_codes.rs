//! Language code table for `lang` attributes.

/// ISO 639-1 codes (including withdrawn ones still seen in the wild, such as
/// `iw` and `in`) plus common ISO 639-2/3 codes. Sorted.
pub const LANGUAGE_CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "ast", "av", "ay",
    "az", "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca",
    "ce", "ceb", "ch", "chr", "ckb", "cmn", "co", "cr", "cs", "cu", "cv", "cy",
    "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa",
    "ff", "fi", "fil", "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gsw",
    "gu", "gv", "ha", "haw", "he", "hi", "hmn", "ho", "hr", "ht", "hu", "hy",
    "hz", "ia", "id", "ie", "ig", "ii", "ik", "in", "io", "is", "it", "iu",
    "iw", "ja", "ji", "jv", "jw", "ka", "kg", "ki", "kj", "kk", "kl", "km",
    "kn", "ko", "kok", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg",
    "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn",
    "mo", "mr", "ms", "mt", "my", "na", "nb", "nd", "nds", "ne", "ng", "nl",
    "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sah", "sc",
    "scn", "sd", "se", "sg", "sh", "si", "sk", "sl", "sm", "sn", "so", "sq",
    "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk",
    "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz",
    "ve", "vi", "vo", "wa", "wo", "xh", "yi", "yo", "yue", "za", "zgh", "zh",
    "zu",
];

/// Checks the primary subtag of a BCP 47 tag such as `en-US` or `zh_Hant`.
pub fn is_valid_language_tag(tag: &str) -> bool {
    let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
    if primary.is_empty() {
        return false;
    }
    let primary = primary.to_ascii_lowercase();
    LANGUAGE_CODES.binary_search(&primary.as_str()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_table_is_sorted() {
        assert!(LANGUAGE_CODES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    #[case("en", true)]
    #[case("EN", true)]
    #[case("en-GB", true)]
    #[case("zh_Hant", true)]
    #[case(" ja ", true)]
    #[case("fil", true)]
    #[case("xx", false)]
    #[case("qqq", false)]
    #[case("-US", false)]
    #[case("", false)]
    fn test_is_valid_language_tag(#[case] tag: &str, #[case] expected: bool) {
        assert_eq!(is_valid_language_tag(tag), expected);
    }
}
