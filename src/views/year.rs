use super::{month_anchor, HitMap, PickTarget};
use crate::navigator::DateNavigator;
use crate::theme::{ACTIVE_STYLE, BASE_STYLE, SELECTED_STYLE};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

const CELL_WIDTH: u16 = 6;
const COLS: u16 = 4;
pub(super) const GRID_WIDTH: u16 = COLS * CELL_WIDTH;

pub(super) fn grid_rows(years_per_view: u8) -> u16 {
    u16::from(years_per_view).div_ceil(COLS).max(1)
}

/// The `years_per_view`-aligned block of years containing `year`.
pub(super) fn year_range(year: i32, years_per_view: u8) -> (i32, i32) {
    let span = i32::from(years_per_view);
    let start = year.div_euclid(span) * span;
    (start, start + span - 1)
}

pub(super) fn render(nav: &DateNavigator, content: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let active = nav.active_date();
    let (start, end) = year_range(active.year(), nav.config().years_per_view);
    let x0 = content.x + content.width.saturating_sub(GRID_WIDTH) / 2;
    for (index, year) in (start..=end).enumerate() {
        let index = u16::try_from(index).unwrap_or(u16::MAX);
        let row = index / COLS;
        let y = content.y + 1 + row;
        if y >= content.y + content.height {
            break;
        }
        let cell = Rect {
            x: x0 + (index % COLS) * CELL_WIDTH,
            y,
            width: CELL_WIDTH,
            height: 1,
        };
        buf.set_string(
            cell.x,
            cell.y,
            format!(" {year:>4} "),
            year_style(nav, year),
        );
        hits.push(
            cell,
            PickTarget::Year(month_anchor(active, year, active.month())),
        );
    }
}

fn year_style(nav: &DateNavigator, year: i32) -> Style {
    if nav.selected().is_some_and(|d| d.year() == year) {
        SELECTED_STYLE
    } else if nav.show_active_date() && nav.active_date().year() == year {
        ACTIVE_STYLE
    } else {
        BASE_STYLE
    }
}
