//! Secret theme word selection

use rand::seq::SliceRandom;
use thiserror::Error;

/// Words the game draws its secret from when no override is configured
pub const DEFAULT_WORDS: &[&str] = &[
    "りんご",
    "バナナ",
    "みかん",
    "いちご",
    "すいか",
    "ねこ",
    "いぬ",
    "うさぎ",
    "ぞう",
    "ペンギン",
    "自転車",
    "電車",
    "飛行機",
    "船",
    "傘",
    "時計",
    "眼鏡",
    "鉛筆",
    "冷蔵庫",
    "テレビ",
    "富士山",
    "海",
    "雪",
    "太陽",
    "月",
    "桜",
    "寿司",
    "ラーメン",
    "カレー",
    "ピアノ",
    "ギター",
    "サッカー",
    "野球",
    "図書館",
    "病院",
    "学校",
    "スマートフォン",
    "コーヒー",
    "チョコレート",
    "ロボット",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme word list is empty")]
    EmptyWordList,
}

/// Picks a theme word uniformly at random from a fixed list
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    words: Vec<String>,
}

impl ThemeProvider {
    /// Blank entries are dropped; a list with nothing left is a configuration
    /// fault.
    pub fn new<I, S>(words: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.into().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(ThemeError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Built-in list, or the comma-separated `ROKINATOR_THEME_WORDS` override
    pub fn from_env() -> Result<Self, ThemeError> {
        match std::env::var("ROKINATOR_THEME_WORDS") {
            Ok(list) => Self::new(list.split(',')),
            Err(_) => Self::new(DEFAULT_WORDS.iter().copied()),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn pick(&self) -> String {
        let mut rng = rand::thread_rng();
        // Non-empty by construction
        self.words
            .choose(&mut rng)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            ThemeProvider::new(Vec::<String>::new()).unwrap_err(),
            ThemeError::EmptyWordList
        );
        assert_eq!(
            ThemeProvider::new([" ", ""]).unwrap_err(),
            ThemeError::EmptyWordList
        );
    }

    #[test]
    fn entries_are_trimmed() {
        let provider = ThemeProvider::new(" りんご, ねこ ,".split(',')).unwrap();
        assert_eq!(provider.words(), &["りんご".to_string(), "ねこ".to_string()]);
    }

    #[test]
    fn pick_stays_in_list() {
        let provider = ThemeProvider::new(DEFAULT_WORDS.iter().copied()).unwrap();
        for _ in 0..200 {
            let word = provider.pick();
            assert!(DEFAULT_WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn pick_covers_list_eventually() {
        let provider = ThemeProvider::new(["a", "b", "c"]).unwrap();
        let seen: HashSet<String> = (0..500).map(|_| provider.pick()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_word_list() {
        let provider = ThemeProvider::new(["りんご"]).unwrap();
        assert_eq!(provider.pick(), "りんご");
    }
}
