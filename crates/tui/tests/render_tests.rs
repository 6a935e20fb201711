//! Rendering tests for the tutorial screen.
//!
//! Test coverage:
//! - Exactly one content block is on screen per stage
//! - Context menu visibility and row order
//! - Hint glyph, hover highlight and enter transition
//! - Small terminals and menus near the screen edge

mod helpers;

use std::time::{Duration, Instant};

use click_tutorial::App;
use click_tutorial::action::Action;
use click_tutorial::tutorial::content::{CLICK_SUCCESS, MENU_HINT_GLYPH};
use click_tutorial::tutorial::{InteractionStage, MENU_ITEMS};
use click_tutorial_config::TutorialConfig;
use click_tutorial_config::constants::{CONTENT_SLIDE_ROWS, CONTENT_TRANSITION_MS};
use helpers::*;

/// One line that only its own block ever shows.
const MARKERS: [&str; 4] = [
    "To \"Click\" something",
    CLICK_SUCCESS,
    "Great job!",
    "Excellent! You've opened the context menu",
];

fn drive_to(harness: &mut TuiHarness, stage: InteractionStage) {
    harness.render();
    for action in [
        Action::PrimaryActivation,
        Action::DeferredAdvance,
        Action::SecondaryActivation,
    ] {
        if harness.app.tutorial().stage() == stage {
            break;
        }
        harness.app.update(action);
        harness.render();
    }
    assert_eq!(harness.app.tutorial().stage(), stage);
}

fn visible_markers(screen: &str) -> Vec<usize> {
    MARKERS
        .iter()
        .enumerate()
        .filter(|(_, marker)| screen.contains(*marker))
        .map(|(index, _)| index)
        .collect()
}

#[test]
fn test_exactly_one_block_per_stage() {
    for (index, stage) in InteractionStage::ALL.into_iter().enumerate() {
        let mut harness = TuiHarness::new(100, 30);
        drive_to(&mut harness, stage);
        let screen = harness.render();
        assert_eq!(visible_markers(&screen), vec![index], "stage {stage}");
    }
}

#[test]
fn test_menu_only_in_final_stage() {
    for stage in InteractionStage::ALL {
        let mut harness = TuiHarness::new(100, 30);
        drive_to(&mut harness, stage);
        let screen = harness.render();
        let menu_visible = MENU_ITEMS.iter().any(|item| screen.contains(item.label));
        assert_eq!(menu_visible, stage.is_terminal(), "stage {stage}");
    }
}

#[test]
fn test_menu_rows_in_order() {
    let mut harness = TuiHarness::new(100, 30);
    drive_to(&mut harness, InteractionStage::ContextMenuOpened);
    let screen = harness.render();

    let rows: Vec<usize> = MENU_ITEMS
        .iter()
        .map(|item| row_of(&screen, item.label).expect("menu row drawn"))
        .collect();
    assert!(rows.windows(2).all(|pair| pair[1] == pair[0] + 1));

    let labels: Vec<_> = MENU_ITEMS.iter().map(|item| item.label).collect();
    assert_eq!(labels, ["New File", "Rename", "Copy", "Paste", "Delete"]);
    assert_eq!(harness.app.regions().menu_rows.len(), MENU_ITEMS.len());
}

#[test]
fn test_hint_glyph_only_with_right_click_target() {
    for stage in InteractionStage::ALL {
        let mut harness = TuiHarness::new(100, 30);
        drive_to(&mut harness, stage);
        let screen = harness.render();
        assert_eq!(
            screen.contains(MENU_HINT_GLYPH),
            stage == InteractionStage::RightClickIntro,
            "stage {stage}"
        );
    }
}

#[test]
fn test_hint_glyph_sits_above_target() {
    let mut harness = TuiHarness::new(100, 30);
    drive_to(&mut harness, InteractionStage::RightClickIntro);
    let screen = harness.render();

    let target = harness.app.regions().context_target.expect("target drawn");
    let glyph_row = row_of(&screen, MENU_HINT_GLYPH).expect("glyph drawn");
    assert!(glyph_row < usize::from(target.y));
}

#[test]
fn test_hovered_button_uses_hover_colors() {
    let mut harness = TuiHarness::new(100, 30);
    harness.render();
    let cta = harness.app.regions().call_to_action.expect("drawn");
    let (x, y) = (cta.x + 1, cta.y + 1);
    assert_eq!(harness.bg(x, y), harness.app.theme.button_bg);

    harness.app.handle_mouse(mouse_move(x, y));
    harness.render();
    assert_eq!(harness.bg(x, y), harness.app.theme.button_hover_bg);

    harness.app.handle_mouse(mouse_move(0, 0));
    harness.render();
    assert_eq!(harness.bg(x, y), harness.app.theme.button_bg);
}

#[test]
fn test_hovered_menu_row_is_highlighted() {
    let mut harness = TuiHarness::new(100, 30);
    drive_to(&mut harness, InteractionStage::ContextMenuOpened);
    let row = harness.app.regions().menu_rows[2];

    harness.app.handle_mouse(mouse_move(row.x + 1, row.y));
    harness.render();
    assert_eq!(harness.bg(row.x + 1, row.y), harness.app.theme.menu_hover_bg);

    let other = harness.app.regions().menu_rows[0];
    assert_eq!(harness.bg(other.x + 1, other.y), harness.app.theme.menu_bg);
}

#[test]
fn test_menu_near_edge_stays_on_screen() {
    // The target's right edge leaves no room for the menu
    let mut harness = TuiHarness::new(44, 30);
    drive_to(&mut harness, InteractionStage::ContextMenuOpened);
    let screen = harness.render();

    for item in MENU_ITEMS {
        assert!(screen.contains(item.label), "{} should be visible", item.label);
    }
    for row in &harness.app.regions().menu_rows {
        assert!(row.right() <= 44);
    }
}

#[test]
fn test_small_terminal_does_not_panic() {
    for (width, height) in [(1, 1), (10, 4), (20, 6), (30, 10)] {
        let mut harness = TuiHarness::new(width, height);
        for stage in InteractionStage::ALL {
            drive_to(&mut harness, stage);
        }
        harness.render();
    }
}

#[test]
fn test_resize_is_recorded() {
    let mut harness = TuiHarness::new(80, 24);
    harness.render();
    assert_eq!(
        (harness.app.last_area.width, harness.app.last_area.height),
        (80, 24)
    );

    harness.app.update(Action::Resize(120, 40));
    assert_eq!(
        (harness.app.last_area.width, harness.app.last_area.height),
        (120, 40)
    );
}

#[test]
fn test_initial_block_slides_in() {
    let start = Instant::now();
    let mut harness = TuiHarness::with_config(100, 30, TutorialConfig::default());
    harness.app = App::new_at(TutorialConfig::default(), start);

    harness
        .terminal
        .draw(|f| harness.app.render_at(f, start))
        .expect("render");
    let entering = buffer_to_string(harness.terminal.backend().buffer());

    let settled_at = start + Duration::from_millis(CONTENT_TRANSITION_MS);
    harness
        .terminal
        .draw(|f| harness.app.render_at(f, settled_at))
        .expect("render");
    let settled = buffer_to_string(harness.terminal.backend().buffer());

    let entering_row = row_of(&entering, MARKERS[0]).expect("text drawn while entering");
    let settled_row = row_of(&settled, MARKERS[0]).expect("text drawn at rest");
    assert_eq!(entering_row, settled_row + usize::from(CONTENT_SLIDE_ROWS));

    // Fully transparent text is drawn in the background color
    let theme = harness.app.theme;
    let y = u16::try_from(settled_row).unwrap();
    let x = (0..100)
        .find(|&x| harness.symbol(x, y) == "T")
        .expect("first letter drawn");
    assert_eq!(harness.fg(x, y), theme.text);
    harness
        .terminal
        .draw(|f| harness.app.render_at(f, start))
        .expect("render");
    let y = u16::try_from(entering_row).unwrap();
    assert_eq!(harness.fg(x, y), theme.background);
}

#[test]
fn test_click_content_swaps_after_exit() {
    let start = Instant::now();
    let config = TutorialConfig::default();
    let mut harness = TuiHarness::with_config(100, 30, config);
    harness.app = App::new_at(config, start);

    let exit_started = start + Duration::from_millis(CONTENT_TRANSITION_MS);
    harness.app.update_at(Action::PrimaryActivation, exit_started);

    // Old block still on screen while it exits
    let mid_exit = exit_started + Duration::from_millis(CONTENT_TRANSITION_MS / 2);
    harness
        .terminal
        .draw(|f| harness.app.render_at(f, mid_exit))
        .expect("render");
    let screen = buffer_to_string(harness.terminal.backend().buffer());
    assert!(visible_markers(&screen).iter().all(|&index| index == 0));

    // Then the success message enters
    let entered = exit_started + Duration::from_millis(CONTENT_TRANSITION_MS * 3);
    harness
        .terminal
        .draw(|f| harness.app.render_at(f, entered))
        .expect("render");
    let screen = buffer_to_string(harness.terminal.backend().buffer());
    assert_eq!(visible_markers(&screen), vec![1]);
}
