use super::{month_year_label, HitMap, PickTarget};
use crate::dates;
use crate::navigator::DateNavigator;
use crate::theme::{
    ACTIVE_STYLE, BASE_STYLE, OTHER_MONTH_STYLE, SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE,
    WEEKDAY_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use time::Date;

pub(super) const CELL_WIDTH: u16 = 4;
pub(super) const PANE_WIDTH: u16 = 7 * CELL_WIDTH;
pub(super) const PANE_GUTTER: u16 = 2;

/// Six rows cover every month at every week start, and a fixed count keeps
/// the popover height stable while paging.
const WEEK_ROWS: u16 = 6;

pub(super) fn pane_height(months_per_view: u8) -> u16 {
    // Multi-month panes carry their own title row; a single pane is titled
    // by the popover header.
    if months_per_view > 1 {
        2 + WEEK_ROWS
    } else {
        1 + WEEK_ROWS
    }
}

pub(super) fn render(nav: &DateNavigator, content: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let months = nav.config().months_per_view;
    let anchor = dates::first_of_month(nav.active_date());
    for pane in 0..u16::from(months) {
        let pane_area = Rect {
            x: content.x + pane * (PANE_WIDTH + PANE_GUTTER),
            y: content.y,
            width: PANE_WIDTH,
            height: content.height,
        };
        if pane_area.right() > content.right() {
            break;
        }
        let month_start = dates::add_months(anchor, i32::from(pane));
        render_pane(nav, month_start, months > 1, pane_area, buf, hits);
    }
}

fn render_pane(
    nav: &DateNavigator,
    month_start: Date,
    titled: bool,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    let mut y = area.y;
    if titled {
        let label = month_year_label(nav, month_start);
        let width = u16::try_from(label.len()).unwrap_or(u16::MAX).min(area.width);
        let x = area.x + area.width.saturating_sub(width) / 2;
        buf.set_stringn(x, y, &label, usize::from(width), TITLE_STYLE);
        y += 1;
    }

    let week_start = nav.config().week_start;
    for col in 0..7u8 {
        let name: String = nav.config().locale.weekdays_short[usize::from((week_start + col) % 7)]
            .chars()
            .take(2)
            .collect();
        buf.set_string(
            area.x + u16::from(col) * CELL_WIDTH,
            y,
            format!(" {name} "),
            WEEKDAY_STYLE,
        );
    }
    y += 1;

    for (index, date) in month_grid(month_start, week_start).into_iter().enumerate() {
        let index = u16::try_from(index).unwrap_or(u16::MAX);
        let row = index / 7;
        if y + row >= area.y + area.height {
            break;
        }
        let cell = Rect {
            x: area.x + (index % 7) * CELL_WIDTH,
            y: y + row,
            width: CELL_WIDTH,
            height: 1,
        };
        buf.set_string(
            cell.x,
            cell.y,
            format!(" {:>2} ", date.day()),
            day_style(nav, date, month_start),
        );
        hits.push(cell, PickTarget::Day(date));
    }
}

/// The 42 dates of a month pane: the month itself plus leading and trailing
/// days borrowed from its neighbours.
fn month_grid(month_start: Date, week_start: u8) -> Vec<Date> {
    let lead = i64::from(
        (7 + month_start.weekday().number_days_from_sunday() - week_start) % 7,
    );
    let first_cell = dates::add_days(month_start, -lead);
    (0..i64::from(WEEK_ROWS) * 7)
        .map(|i| dates::add_days(first_cell, i))
        .collect()
}

fn day_style(nav: &DateNavigator, date: Date, month_start: Date) -> Style {
    if nav.selected() == Some(date) {
        SELECTED_STYLE
    } else if nav.show_active_date() && nav.active_date() == date {
        ACTIVE_STYLE
    } else if date == nav.today() {
        TODAY_STYLE
    } else if (date.year(), date.month()) != (month_start.year(), month_start.month()) {
        OTHER_MONTH_STYLE
    } else {
        BASE_STYLE
    }
}
