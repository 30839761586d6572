//! Deterministic collage layout.
//!
//! Each board image gets a fixed visual slot drawn from a static table,
//! one table per viewport size class, assigned by index modulo table
//! length. No randomness and no render history: re-layout on a size-class
//! change is a pure re-projection of the same board.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Container width at which the layout switches tables, matching the
/// collage grid's medium breakpoint.
pub const WIDE_BREAKPOINT_PX: u32 = 768;

/// Coarse viewport-width bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Compact,
    Wide,
}

impl SizeClass {
    /// Classify a container width against the single fixed breakpoint.
    pub fn for_width(width_px: u32) -> Self {
        if width_px < WIDE_BREAKPOINT_PX {
            SizeClass::Compact
        } else {
            SizeClass::Wide
        }
    }
}

/// One fixed visual placement. Offsets and extents are percentages of the
/// container; rotation is degrees; higher `stack_order` renders on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub rotation_deg: f32,
    pub stack_order: u8,
}

const fn slot(top: f32, left: f32, width: f32, height: f32, rotation_deg: f32, stack_order: u8) -> Slot {
    Slot {
        top,
        left,
        width,
        height,
        rotation_deg,
        stack_order,
    }
}

/// Narrow containers: two loose columns, six placements.
const COMPACT_SLOTS: [Slot; 6] = [
    slot(2.0, 4.0, 44.0, 30.0, -3.0, 1),
    slot(6.0, 52.0, 42.0, 26.0, 2.5, 2),
    slot(34.0, 8.0, 40.0, 28.0, 1.5, 1),
    slot(36.0, 54.0, 42.0, 30.0, -2.0, 3),
    slot(66.0, 4.0, 44.0, 28.0, 2.0, 2),
    slot(68.0, 52.0, 40.0, 26.0, -1.5, 1),
];

/// Wide containers: four loose columns, twelve placements.
const WIDE_SLOTS: [Slot; 12] = [
    slot(2.0, 2.0, 22.0, 28.0, -4.0, 1),
    slot(4.0, 26.0, 21.0, 24.0, 2.0, 2),
    slot(1.0, 50.0, 23.0, 26.0, -1.5, 1),
    slot(5.0, 75.0, 22.0, 28.0, 3.0, 3),
    slot(34.0, 4.0, 21.0, 26.0, 1.5, 2),
    slot(32.0, 27.0, 23.0, 28.0, -2.5, 1),
    slot(35.0, 52.0, 21.0, 24.0, 2.5, 2),
    slot(33.0, 76.0, 21.0, 26.0, -3.0, 1),
    slot(64.0, 2.0, 23.0, 28.0, 2.0, 3),
    slot(66.0, 27.0, 21.0, 26.0, -1.0, 1),
    slot(63.0, 51.0, 22.0, 28.0, 1.0, 2),
    slot(65.0, 76.0, 22.0, 24.0, -2.0, 1),
];

/// The fixed slot table for a size class.
pub fn slot_table(size_class: SizeClass) -> &'static [Slot] {
    match size_class {
        SizeClass::Compact => &COMPACT_SLOTS,
        SizeClass::Wide => &WIDE_SLOTS,
    }
}

/// Slot for the image at `index`, pure in `(index, size_class)`.
pub fn slot_for(index: usize, size_class: SizeClass) -> Slot {
    let table = slot_table(size_class);
    table[index % table.len()]
}

/// Assign slots to the board's images. At most one table's worth of
/// images is placed; the rest are deliberately left out of the collage.
pub fn layout_for(board: &Board, size_class: SizeClass) -> Vec<(String, Slot)> {
    let table = slot_table(size_class);
    board
        .images
        .iter()
        .take(table.len())
        .enumerate()
        .map(|(i, image)| (image.clone(), slot_for(i, size_class)))
        .collect()
}
