//! Fixed game text and limits

/// Turn budget of a game
pub const MAX_GAME_TURN: u32 = 10;

/// Static configuration injected into the state machine and chat controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameScript {
    pub max_turns: u32,
    /// Shown in order before the theme is requested
    pub onboarding: Vec<String>,
    /// Shown once the theme is set
    pub ready: String,
    correct_template: String,
    game_over_template: String,
}

impl Default for GameScript {
    fn default() -> Self {
        Self::with_max_turns(MAX_GAME_TURN)
    }
}

impl GameScript {
    pub fn with_max_turns(max_turns: u32) -> Self {
        Self {
            max_turns,
            onboarding: vec![
                "Welcome to Rokinator!".to_string(),
                format!(
                    "これからゲームを始めます。{max_turns}個までの質問で、お題の単語を当ててみてください！"
                ),
                "お題を生成中...".to_string(),
            ],
            ready: "準備完了！それではゲームスタート！".to_string(),
            correct_template: "正解！おめでとう！答えは{theme}でした！".to_string(),
            game_over_template: "残念！ゲームオーバー！答えは{theme}でした！".to_string(),
        }
    }

    pub fn correct_message(&self, theme: &str) -> String {
        self.correct_template.replace("{theme}", theme)
    }

    pub fn game_over_message(&self, theme: &str) -> String {
        self.game_over_template.replace("{theme}", theme)
    }
}
