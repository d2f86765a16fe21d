//! Status line shown above the board.
//!
//! A [`Status`] is a tag plus the mark it mentions. Renderers ask for
//! [`Status::segments`] to style the emphasized part, or use `Display` for
//! plain text.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Status message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Fresh board, nobody has moved.
    #[default]
    Greeting,
    /// Game continues; the given mark moves next.
    NextPlayer(Mark),
    /// The given mark completed a line.
    Wins(Mark),
    /// Board full without a line.
    EqualGame,
}

/// One piece of a status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSegment {
    /// Text of this piece.
    pub text: String,
    /// Whether the renderer should emphasize this piece.
    pub emphasis: bool,
}

impl StatusSegment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }
}

impl Status {
    /// Splits the status into plain and emphasized pieces, in reading order.
    pub fn segments(&self) -> Vec<StatusSegment> {
        match self {
            Status::Greeting => vec![
                StatusSegment::emphasized("X O "),
                StatusSegment::plain("Game"),
            ],
            Status::NextPlayer(mark) => vec![
                StatusSegment::plain("Next player is "),
                StatusSegment::emphasized(mark.to_string()),
            ],
            Status::Wins(mark) => vec![
                StatusSegment::emphasized(mark.to_string()),
                StatusSegment::plain(" Wins"),
            ],
            Status::EqualGame => vec![
                StatusSegment::emphasized("Equal"),
                StatusSegment::plain(" Game"),
            ],
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in self.segments() {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(Status::Greeting.to_string(), "X O Game");
        assert_eq!(Status::NextPlayer(Mark::O).to_string(), "Next player is O");
        assert_eq!(Status::Wins(Mark::X).to_string(), "X Wins");
        assert_eq!(Status::EqualGame.to_string(), "Equal Game");
    }

    #[test]
    fn test_emphasis_falls_on_mark() {
        let emphasized: Vec<String> = Status::Wins(Mark::O)
            .segments()
            .into_iter()
            .filter(|s| s.emphasis)
            .map(|s| s.text)
            .collect();
        assert_eq!(emphasized, vec!["O".to_string()]);
    }
}
