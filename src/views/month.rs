use super::{month_anchor, HitMap, PickTarget};
use crate::navigator::DateNavigator;
use crate::theme::{ACTIVE_STYLE, BASE_STYLE, SELECTED_STYLE};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use time::Month;

const CELL_WIDTH: u16 = 8;
const COLS: u16 = 3;
pub(super) const GRID_WIDTH: u16 = COLS * CELL_WIDTH;
pub(super) const GRID_ROWS: u16 = 4;

pub(super) fn render(nav: &DateNavigator, content: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let active = nav.active_date();
    let year = active.year();
    let x0 = content.x + content.width.saturating_sub(GRID_WIDTH) / 2;
    for index in 0..12u16 {
        let row = index / COLS;
        // First content row stays blank to separate grid from header.
        let y = content.y + 1 + row;
        if y >= content.y + content.height {
            break;
        }
        let Ok(month) = Month::try_from(u8::try_from(index + 1).unwrap_or(1)) else {
            break;
        };
        let cell = Rect {
            x: x0 + (index % COLS) * CELL_WIDTH,
            y,
            width: CELL_WIDTH,
            height: 1,
        };
        buf.set_string(
            cell.x,
            cell.y,
            format!(" {:^6} ", nav.config().locale.months_short[usize::from(index)]),
            month_style(nav, year, month),
        );
        hits.push(cell, PickTarget::Month(month_anchor(active, year, month)));
    }
}

fn month_style(nav: &DateNavigator, year: i32, month: Month) -> Style {
    if nav
        .selected()
        .is_some_and(|d| (d.year(), d.month()) == (year, month))
    {
        SELECTED_STYLE
    } else if nav.show_active_date()
        && (nav.active_date().year(), nav.active_date().month()) == (year, month)
    {
        ACTIVE_STYLE
    } else {
        BASE_STYLE
    }
}
