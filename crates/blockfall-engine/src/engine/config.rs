/// Session parameters, passed in at construction instead of living in
/// module-level globals.
///
/// `cell_size` and `ticks_per_frame` are presentation knobs consumed by the
/// render collaborator; the engine itself only reads the board dimensions
/// and `ticks_per_update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid height in rows.
    pub rows: usize,
    /// Grid width in columns.
    pub cols: usize,
    /// Rendered width of one cell, in terminal columns.
    pub cell_size: u16,
    /// Clock ticks between simulation steps. Smaller means faster fall.
    pub ticks_per_update: u32,
    /// Clock ticks between renders.
    pub ticks_per_frame: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 10,
            cell_size: 2,
            ticks_per_update: 12,
            ticks_per_frame: 1,
        }
    }
}
