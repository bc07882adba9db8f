//! Hotbar selection: which block type is placed next.
//!
//! The hotbar is a single index into `BlockType::ALL`. Scrolling cycles it,
//! and the digit keys 1-9 set it absolutely.
use crate::block::BlockType;
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

/// Number of quick-select slots reachable from the digit keys.
pub const QUICK_SELECT_SLOTS: usize = 9;

const DIGIT_KEYS: [KeyCode; QUICK_SELECT_SLOTS] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Selection state for placement.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hotbar {
    index: usize,
}

impl Hotbar {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step the selection one slot, wrapping around the catalog.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        let n = BlockType::COUNT;
        self.index = match direction {
            ScrollDirection::Up => (self.index + 1) % n,
            ScrollDirection::Down => (self.index + n - 1) % n,
        };
    }

    /// Select slot `i` directly.
    ///
    /// Indices beyond the quick-select range are ignored. Indices inside the
    /// range but past the end of the catalog select the last entry.
    pub fn select_index(&mut self, i: usize) {
        if i >= QUICK_SELECT_SLOTS {
            return;
        }
        self.index = i.min(BlockType::COUNT - 1);
    }

    #[must_use]
    pub fn current(&self) -> BlockType {
        BlockType::ALL[self.index]
    }
}

/// Apply mouse wheel and digit key input to the hotbar.
///
/// # Arguments
/// * `wheel` - mouse wheel events for this update
/// * `keys` - keyboard state for the digit quick-select keys
/// * `hotbar` - the selection resource to update
#[allow(clippy::needless_pass_by_value)]
pub fn hotbar_input(
    mut wheel: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    mut hotbar: ResMut<Hotbar>,
) {
    for ev in wheel.read() {
        if ev.y > 0.0 {
            hotbar.scroll(ScrollDirection::Up);
        } else if ev.y < 0.0 {
            hotbar.scroll(ScrollDirection::Down);
        }
    }

    for (i, key) in DIGIT_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            hotbar.select_index(i);
        }
    }
}
