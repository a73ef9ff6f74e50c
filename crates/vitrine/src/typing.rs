//! Hero typing effect.
//!
//! Types a word one character at a time, pauses, deletes it, pauses, and
//! moves on to the next word, wrapping around forever. The host shows
//! [`TypingStep::text`] and calls [`TypingEffect::step`] again after
//! [`TypingStep::delay_ms`].

use crate::config::TypingConfig;

/// Output of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    /// Text to display.
    pub text: String,
    /// Milliseconds until the next step.
    pub delay_ms: u32,
}

/// The typing state machine.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    words: Vec<String>,
    timing: TypingConfig,
    word_index: usize,
    /// Visible characters of the current word.
    char_index: usize,
    deleting: bool,
    running: bool,
}

impl TypingEffect {
    /// Creates a running effect. An empty word list falls back to the stock words.
    #[must_use]
    pub fn new(config: &TypingConfig) -> Self {
        Self {
            words: Self::or_default(config.words.clone()),
            timing: config.clone(),
            word_index: 0,
            char_index: 0,
            deleting: false,
            running: true,
        }
    }

    fn or_default(words: Vec<String>) -> Vec<String> {
        if words.is_empty() {
            TypingConfig::default().words
        } else {
            words
        }
    }

    /// Types or deletes one character. `None` once stopped.
    pub fn step(&mut self) -> Option<TypingStep> {
        if !self.running {
            return None;
        }

        let word = &self.words[self.word_index];
        let len = word.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = word.chars().take(self.char_index).collect();

        let delay_ms = if !self.deleting && self.char_index == len {
            self.deleting = true;
            self.timing.word_pause_ms
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            self.timing.next_word_pause_ms
        } else if self.deleting {
            self.timing.delete_delay_ms
        } else {
            self.timing.type_delay_ms
        };

        Some(TypingStep { text, delay_ms })
    }

    /// Stops the effect. Pending steps return `None`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Starts over from the first character of the first word.
    pub fn restart(&mut self) {
        self.word_index = 0;
        self.char_index = 0;
        self.deleting = false;
        self.running = true;
    }

    /// Replaces the words and restarts.
    pub fn set_words(&mut self, words: Vec<String>) {
        self.words = Self::or_default(words);
        self.restart();
    }

    /// Returns true until [`TypingEffect::stop`].
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The word being typed or deleted.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    /// Returns true while deleting.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(words: &[&str]) -> TypingEffect {
        TypingEffect::new(&TypingConfig {
            words: words.iter().map(|w| (*w).to_string()).collect(),
            ..TypingConfig::default()
        })
    }

    fn run(effect: &mut TypingEffect, steps: usize) -> Vec<(String, u32)> {
        (0..steps)
            .filter_map(|_| effect.step())
            .map(|s| (s.text, s.delay_ms))
            .collect()
    }

    #[test]
    fn test_full_cycle() {
        let mut typing = effect(&["ab", "c"]);
        let steps = run(&mut typing, 7);
        let expected = [
            ("a", 110),
            ("ab", 1800),
            ("a", 60),
            ("", 400),
            ("c", 1800),
            ("", 400),
            ("a", 110),
        ];
        let expected: Vec<(String, u32)> =
            expected.iter().map(|(t, d)| ((*t).to_string(), *d)).collect();
        assert_eq!(steps, expected);
    }

    #[test]
    fn test_multibyte_words() {
        let mut typing = effect(&["π≈3"]);
        let texts: Vec<String> = run(&mut typing, 3).into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["π", "π≈", "π≈3"]);
    }

    #[test]
    fn test_stop_and_restart() {
        let mut typing = effect(&["hello"]);
        run(&mut typing, 3);
        typing.stop();
        assert!(typing.step().is_none());

        typing.restart();
        assert_eq!(typing.step().map(|s| s.text), Some("h".to_string()));
    }

    #[test]
    fn test_set_words() {
        let mut typing = effect(&["hello"]);
        run(&mut typing, 2);
        typing.set_words(vec!["xy".to_string()]);
        assert_eq!(typing.current_word(), "xy");
        assert_eq!(typing.step().map(|s| s.text), Some("x".to_string()));

        typing.set_words(Vec::new());
        assert_eq!(typing.current_word(), "Data Analyst");
    }
}
