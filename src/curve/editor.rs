use super::presets::CurvePreset;
use super::raster;
use super::{LookupTable, grid};

/// Highest valid grid coordinate on either axis.
pub const GRID_MAX: i32 = 255;

/// Drag gesture state. `last` is the most recent pointer position seen
/// during the gesture and is discarded when the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    Dragging { last: (i32, i32) },
}

/// What the shell owes the user after an editor call: re-render the
/// grid, reprocess the image through the table, or neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorUpdate {
    pub redraw: bool,
    pub reprocess: bool,
}

impl EditorUpdate {
    pub const NONE: EditorUpdate = EditorUpdate {
        redraw: false,
        reprocess: false,
    };
    pub const REDRAW: EditorUpdate = EditorUpdate {
        redraw: true,
        reprocess: false,
    };
    pub const ALL: EditorUpdate = EditorUpdate {
        redraw: true,
        reprocess: true,
    };
}

/// Owns the active lookup table and turns pointer gestures, presets,
/// and resets into table updates.
///
/// The editor is the only writer of the table; the shell reads it via
/// [`CurveEditor::table`] and [`CurveEditor::grid_image`] and never
/// mutates it directly.
#[derive(Debug)]
pub struct CurveEditor {
    table: LookupTable,
    gesture: GestureState,
}

impl CurveEditor {
    pub fn new() -> Self {
        Self {
            table: LookupTable::identity(),
            gesture: GestureState::Idle,
        }
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Replace the table wholesale, e.g. with a saved snapshot.
    pub fn set_table(&mut self, table: LookupTable) -> EditorUpdate {
        self.table = table;
        self.gesture = GestureState::Idle;
        EditorUpdate::ALL
    }

    /// Back to the identity table.
    pub fn reset(&mut self) -> EditorUpdate {
        self.set_table(LookupTable::identity())
    }

    pub fn apply_preset(&mut self, preset: CurvePreset) -> EditorUpdate {
        self.set_table(preset.table())
    }

    /// Set the table column under a grid point: `table[x] = 255 - y`,
    /// since grid row 0 is the top (brightest output). Points outside
    /// the grid are ignored.
    pub fn set_point(&mut self, x: i32, y: i32) {
        plot_point(&mut self.table, x, y);
    }

    /// Rasterize the straight line between two grid points and set the
    /// table at every visited point, so widely spaced drag samples
    /// still produce a gap-free curve.
    pub fn draw_segment(&mut self, from: (i32, i32), to: (i32, i32)) {
        let table = &mut self.table;
        raster::plot_line(from, to, |x, y| plot_point(table, x, y));
    }

    /// Idle -> Dragging: record the point and set it immediately.
    pub fn on_drag_start(&mut self, x: i32, y: i32) -> EditorUpdate {
        self.set_point(x, y);
        self.gesture = GestureState::Dragging { last: (x, y) };
        EditorUpdate::REDRAW
    }

    /// Dragging -> Dragging: connect the previous point to this one.
    /// Move events while idle are ignored.
    pub fn on_drag_move(&mut self, x: i32, y: i32) -> EditorUpdate {
        match self.gesture {
            GestureState::Idle => EditorUpdate::NONE,
            GestureState::Dragging { last } => {
                self.draw_segment(last, (x, y));
                self.gesture = GestureState::Dragging { last: (x, y) };
                EditorUpdate::ALL
            }
        }
    }

    /// Dragging -> Idle. No further table mutation.
    pub fn on_drag_end(&mut self) -> EditorUpdate {
        match self.gesture {
            GestureState::Idle => EditorUpdate::NONE,
            GestureState::Dragging { .. } => {
                self.gesture = GestureState::Idle;
                EditorUpdate::ALL
            }
        }
    }

    /// Render the current curve on the editing grid.
    pub fn grid_image(&self) -> Vec<u8> {
        grid::render(&self.table)
    }
}

impl Default for CurveEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn plot_point(table: &mut LookupTable, x: i32, y: i32) {
    if (0..=GRID_MAX).contains(&x) && (0..=GRID_MAX).contains(&y) {
        table.set(x as u8, (GRID_MAX - y) as u8);
    }
}
