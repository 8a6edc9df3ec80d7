use crate::config::typing::{CHAR_DELAY_MS, CURSOR_HOLD_MS, START_DELAY_MS};

/// Progress of the hero title being retyped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingStage {
    /// Full title shown, typing not started yet.
    Waiting,
    /// This many characters typed so far.
    Typed(usize),
    Finished,
}

impl TypingStage {
    /// Delay until the following stage, and that stage. `None` when there is
    /// nothing left to do.
    pub fn next(self, total_chars: usize) -> Option<(u32, TypingStage)> {
        if total_chars == 0 {
            return None;
        }
        match self {
            TypingStage::Waiting => Some((START_DELAY_MS, TypingStage::Typed(1))),
            TypingStage::Typed(n) if n < total_chars => Some((CHAR_DELAY_MS, TypingStage::Typed(n + 1))),
            TypingStage::Typed(_) => Some((CHAR_DELAY_MS + CURSOR_HOLD_MS, TypingStage::Finished)),
            TypingStage::Finished => None,
        }
    }

    pub fn visible_text(self, title: &str) -> String {
        match self {
            TypingStage::Typed(n) => title.chars().take(n).collect(),
            TypingStage::Waiting | TypingStage::Finished => title.to_string(),
        }
    }

    pub fn shows_cursor(self) -> bool {
        matches!(self, TypingStage::Typed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(title: &str) -> Vec<(u32, TypingStage)> {
        let total = title.chars().count();
        let mut stage = TypingStage::Waiting;
        let mut steps = Vec::new();
        while let Some((delay, next)) = stage.next(total) {
            steps.push((delay, next));
            stage = next;
        }
        steps
    }

    #[test]
    fn types_one_character_at_a_time_then_drops_the_cursor() {
        assert_eq!(
            run("Hi!"),
            vec![
                (500, TypingStage::Typed(1)),
                (80, TypingStage::Typed(2)),
                (80, TypingStage::Typed(3)),
                (1_080, TypingStage::Finished),
            ]
        );
    }

    #[test]
    fn empty_title_is_left_alone() {
        assert!(run("").is_empty());
    }

    #[test]
    fn partial_text_respects_multibyte_characters() {
        let title = "Técnica";
        assert_eq!(TypingStage::Typed(2).visible_text(title), "Té");
        assert_eq!(TypingStage::Waiting.visible_text(title), title);
        assert!(TypingStage::Typed(2).shows_cursor());
        assert!(!TypingStage::Finished.shows_cursor());
    }
}
