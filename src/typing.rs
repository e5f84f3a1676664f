//! Typing Effect
//!
//! Types a phrase one character at a time, pauses, deletes it, then moves to
//! the next phrase.

pub const TYPE_DELAY_MS: u32 = 120;
pub const DELETE_DELAY_MS: u32 = 50;
pub const PAUSE_MS: u32 = 900;

/// One frame of the animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// Wait before the next frame
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingCycle {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    shown: usize,
    deleting: bool,
}

impl TypingCycle {
    pub fn new(phrases: &[String]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.chars().collect()).collect(),
            phrase: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn next_frame(&mut self) -> Frame {
        let Some(current) = self.phrases.get(self.phrase) else {
            return Frame {
                text: String::new(),
                delay_ms: PAUSE_MS,
            };
        };
        let len = current.len();

        let delay_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
            }
            DELETE_DELAY_MS
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                PAUSE_MS
            } else {
                TYPE_DELAY_MS
            }
        };

        Frame {
            text: current[..self.shown].iter().collect(),
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(cycle: &mut TypingCycle, n: usize) -> Vec<Frame> {
        (0..n).map(|_| cycle.next_frame()).collect()
    }

    #[test]
    fn test_types_pauses_deletes() {
        let mut cycle = TypingCycle::new(&["Hi".to_string(), "Yo".to_string()]);
        let got = frames(&mut cycle, 6);
        let texts: Vec<&str> = got.iter().map(|f| f.text.as_str()).collect();
        let delays: Vec<u32> = got.iter().map(|f| f.delay_ms).collect();
        assert_eq!(texts, vec!["H", "Hi", "H", "", "Y", "Yo"]);
        assert_eq!(delays, vec![120, 900, 50, 50, 120, 900]);
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut cycle = TypingCycle::new(&["A".to_string()]);
        let texts: Vec<String> = frames(&mut cycle, 4).into_iter().map(|f| f.text).collect();
        assert_eq!(texts, vec!["A", "", "A", ""]);
    }

    #[test]
    fn test_multibyte_and_empty() {
        let mut cycle = TypingCycle::new(&["é✓".to_string()]);
        assert_eq!(cycle.next_frame().text, "é");
        assert_eq!(cycle.next_frame().text, "é✓");

        let mut empty = TypingCycle::new(&[]);
        assert_eq!(empty.next_frame(), Frame { text: String::new(), delay_ms: PAUSE_MS });
    }
}
