pub const LONG_VOWEL_MARK: char = 'ー';

pub trait StripLongVowel {
    fn strip_long_vowel(&self) -> String;
}

//コーヒー -> コヒ
impl StripLongVowel for str {
    fn strip_long_vowel(&self) -> String {
        self.chars().filter(|&c| c != LONG_VOWEL_MARK).collect()
    }
}

/// Implement the trait for `String` by forwarding the method to `str`
impl StripLongVowel for String {
    fn strip_long_vowel(&self) -> String {
        self.as_str().strip_long_vowel()
    }
}
