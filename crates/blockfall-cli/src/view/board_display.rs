use blockfall_engine::GameState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::style;

/// Renders the grid and the active piece.
///
/// Each cell is a `cell_size`-column, one-row square painted at
/// `(col * cell_size, row)` inside the widget area; the stack and the
/// active piece get distinct styles.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    state: &'a GameState,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let config = self.state.config();
        u16::try_from(config.cols).unwrap_or(u16::MAX) * config.cell_size
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.state.config().rows).unwrap_or(u16::MAX)
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let cell_size = self.state.config().cell_size;
        for (row, cells) in self.state.grid().rows().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                let style = if occupied { style::STACK } else { style::EMPTY };
                paint_cell(buf, area, row, col, cell_size, style);
            }
        }
        for (row, col) in self.state.piece().occupied_cells() {
            let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
                continue;
            };
            paint_cell(buf, area, row, col, cell_size, style::ACTIVE);
        }
    }
}

fn paint_cell(buf: &mut Buffer, area: Rect, row: usize, col: usize, cell_size: u16, style: Style) {
    let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
        return;
    };
    let y = area.y + row;
    if y >= area.bottom() {
        return;
    }
    for dx in 0..cell_size {
        let x = area.x + col * cell_size + dx;
        if x >= area.right() {
            break;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(" ").set_style(style);
        }
    }
}
