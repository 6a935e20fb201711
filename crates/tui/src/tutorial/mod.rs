//! The click / right-click tutorial: stages, state machine and content.

pub mod content;
pub mod stage;
pub mod state;

pub use content::{ContentBlock, MENU_ITEMS, MenuItem};
pub use stage::InteractionStage;
pub use state::{Control, ControlBounds, Effect, PopupPosition, StageChange, TutorialState};
