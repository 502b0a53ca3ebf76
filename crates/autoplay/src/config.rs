use crate::ConfrontPolicy;

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub games: u32,
    /// Turn cap per game; games still running at the cap are recorded as unfinished.
    pub max_turns: u32,
    pub confront: ConfrontPolicy,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            games: 1,
            max_turns: 500,
            confront: ConfrontPolicy::WhenAhead,
        }
    }
}
