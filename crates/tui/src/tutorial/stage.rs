//! Interaction stages of the tutorial and their ordering.
//!
//! Responsibilities:
//! - Define the four interaction stages and their forward ordering.
//!
//! Does NOT handle:
//! - Deciding when a stage is entered (see the `state` module).
//! - Content strings (see the `content` module).

use std::fmt;

/// Which tutorial step is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum InteractionStage {
    /// Click explanation and the call-to-action button.
    #[default]
    Initial,
    /// The button was clicked; waiting for the automatic advance.
    Clicked,
    /// Right-click explanation and the right-click target.
    RightClickIntro,
    /// The custom context menu is open. Terminal stage.
    ContextMenuOpened,
}

impl InteractionStage {
    /// All stages in forward order.
    pub const ALL: [InteractionStage; 4] = [
        Self::Initial,
        Self::Clicked,
        Self::RightClickIntro,
        Self::ContextMenuOpened,
    ];

    /// Returns the next stage in the tutorial sequence.
    ///
    /// Returns `None` when called on `ContextMenuOpened`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Initial => Some(Self::Clicked),
            Self::Clicked => Some(Self::RightClickIntro),
            Self::RightClickIntro => Some(Self::ContextMenuOpened),
            Self::ContextMenuOpened => None,
        }
    }

    /// Stable kebab-case identifier, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Clicked => "clicked",
            Self::RightClickIntro => "right-click-intro",
            Self::ContextMenuOpened => "context-menu-opened",
        }
    }

    /// Whether no further transitions are defined.
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for InteractionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
