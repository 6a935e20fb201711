//! Tutorial content: which block each stage shows, and the static strings.
//!
//! Responsibilities:
//! - Map every stage to exactly one content block
//! - Provide the text, button labels and context menu rows
//!
//! Does NOT handle:
//! - State management (see the `state` module)
//! - Layout and styling (see the `ui` module)

use super::stage::InteractionStage;
use super::state::Control;

pub const CLICK_INTRO: &str = "To \"Click\" something on a computer, move the pointer on screen by \
either dragging a finger across a trackpad (usually found on laptops), or dragging a mouse across \
a flat surface. Then press down on the left side of the trackpad or mouse.";

pub const CLICK_BUTTON_LABEL: &str = "Click this Button";

pub const CLICK_SUCCESS: &str = "Congratulations! You've successfully clicked the button!";

pub const RIGHT_CLICK_INTRO: &str = "Great job! Now, let's try a \"Right Click\" or \"Secondary \
Click\". On a mouse, this is usually the right button. On a trackpad, you can often use two \
fingers to tap, or look for a designated right-click area. Try right-clicking on the button below \
to open a context menu!";

pub const RIGHT_CLICK_BUTTON_LABEL: &str = "Secondary or Right-Click this button";

pub const CONTEXT_MENU_SUCCESS: &str = "Excellent! You've opened the context menu. This menu often \
provides additional options or actions.";

/// Glyph drawn above the right-click target.
pub const MENU_HINT_GLYPH: &str = "☰";

/// One of the four mutually exclusive content blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentBlock {
    /// Click explanation plus the call-to-action button.
    ClickIntro,
    /// Click success message.
    ClickSuccess,
    /// Right-click explanation plus the right-click target.
    RightClickIntro,
    /// Context menu success message.
    ContextMenuSuccess,
}

impl ContentBlock {
    /// The single block visible in `stage`.
    pub fn for_stage(stage: InteractionStage) -> Self {
        match stage {
            InteractionStage::Initial => Self::ClickIntro,
            InteractionStage::Clicked => Self::ClickSuccess,
            InteractionStage::RightClickIntro => Self::RightClickIntro,
            InteractionStage::ContextMenuOpened => Self::ContextMenuSuccess,
        }
    }

    /// Body text of the block.
    pub fn text(self) -> &'static str {
        match self {
            Self::ClickIntro => CLICK_INTRO,
            Self::ClickSuccess => CLICK_SUCCESS,
            Self::RightClickIntro => RIGHT_CLICK_INTRO,
            Self::ContextMenuSuccess => CONTEXT_MENU_SUCCESS,
        }
    }

    /// Label of the button under the text, if the block has one.
    pub fn button_label(self) -> Option<&'static str> {
        match self {
            Self::ClickIntro => Some(CLICK_BUTTON_LABEL),
            Self::RightClickIntro => Some(RIGHT_CLICK_BUTTON_LABEL),
            Self::ClickSuccess | Self::ContextMenuSuccess => None,
        }
    }

    /// The interactive control drawn as the block's button.
    pub fn control(self) -> Option<Control> {
        match self {
            Self::ClickIntro => Some(Control::CallToAction),
            Self::RightClickIntro => Some(Control::ContextTarget),
            Self::ClickSuccess | Self::ContextMenuSuccess => None,
        }
    }

    /// Success blocks are drawn bold in the success color.
    pub fn is_success(self) -> bool {
        matches!(self, Self::ClickSuccess | Self::ContextMenuSuccess)
    }

    /// Stable identifier, used in logs.
    pub fn key(self) -> &'static str {
        match self {
            Self::ClickIntro => "initial",
            Self::ClickSuccess => "clicked",
            Self::RightClickIntro => "right-click",
            Self::ContextMenuSuccess => "context-menu-opened",
        }
    }
}

/// A decorative context menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub glyph: &'static str,
    pub label: &'static str,
}

/// Context menu rows, in display order. None of them do anything.
pub const MENU_ITEMS: [MenuItem; 5] = [
    MenuItem {
        glyph: "+",
        label: "New File",
    },
    MenuItem {
        glyph: "✎",
        label: "Rename",
    },
    MenuItem {
        glyph: "❐",
        label: "Copy",
    },
    MenuItem {
        glyph: "⎘",
        label: "Paste",
    },
    MenuItem {
        glyph: "✕",
        label: "Delete",
    },
];
