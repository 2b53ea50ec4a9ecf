mod day;
mod month;
mod year;

use crate::navigator::{CalendarView, DateNavigator};
use crate::theme::{BASE_STYLE, PADDLE_STYLE, TITLE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use time::{Date, Month};

/// What a pointer press on a popover cell means to the navigator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickTarget {
    Day(Date),
    Month(Date),
    Year(Date),
    /// The header label; zooms out one granularity.
    ViewLabel,
    PagePrev,
    PageNext,
}

/// Screen rectangles of everything clickable in the popover, rebuilt on
/// every draw.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct HitMap {
    cells: Vec<(Rect, PickTarget)>,
}

impl HitMap {
    pub(crate) fn new() -> HitMap {
        HitMap::default()
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn push(&mut self, rect: Rect, target: PickTarget) {
        self.cells.push((rect, target));
    }

    pub(crate) fn target_at(&self, column: u16, row: u16) -> Option<PickTarget> {
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|&(_, target)| target)
    }
}

/// The dropdown body: a bordered box with a paging header and the grid of
/// the current view.
#[derive(Copy, Clone, Debug)]
pub(crate) struct PopoverView<'a> {
    navigator: &'a DateNavigator,
}

impl<'a> PopoverView<'a> {
    pub(crate) fn new(navigator: &'a DateNavigator) -> PopoverView<'a> {
        PopoverView { navigator }
    }

    /// Outer size the popover wants, borders included.
    pub(crate) fn size(&self) -> (u16, u16) {
        let config = self.navigator.config();
        match self.navigator.current_view() {
            CalendarView::Day => {
                let panes = u16::from(config.months_per_view);
                let width = panes * day::PANE_WIDTH + (panes - 1) * day::PANE_GUTTER;
                (width + 2, 1 + day::pane_height(config.months_per_view) + 2)
            }
            CalendarView::Month => (month::GRID_WIDTH + 2, 1 + 1 + month::GRID_ROWS + 2),
            CalendarView::Year => (
                year::GRID_WIDTH + 2,
                1 + 1 + year::grid_rows(config.years_per_view) + 2,
            ),
        }
    }

    fn render_header(&self, inner: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let nav = self.navigator;
        let label = match nav.current_view() {
            CalendarView::Day => month_year_label(nav, nav.active_date()),
            CalendarView::Month => nav.active_date().year().to_string(),
            CalendarView::Year => {
                let (start, end) =
                    year::year_range(nav.active_date().year(), nav.config().years_per_view);
                format!("{start}-{end}")
            }
        };
        buf.set_string(inner.x + 1, inner.y, "‹", PADDLE_STYLE);
        buf.set_string(inner.right().saturating_sub(2), inner.y, "›", PADDLE_STYLE);
        let width = u16::try_from(label.len())
            .unwrap_or(u16::MAX)
            .min(inner.width.saturating_sub(6));
        let x = inner.x + inner.width.saturating_sub(width) / 2;
        buf.set_stringn(x, inner.y, &label, usize::from(width), TITLE_STYLE);
        hits.push(
            Rect {
                x: inner.x,
                y: inner.y,
                width: 3,
                height: 1,
            },
            PickTarget::PagePrev,
        );
        hits.push(
            Rect {
                x: inner.right().saturating_sub(3),
                y: inner.y,
                width: 3,
                height: 1,
            },
            PickTarget::PageNext,
        );
        hits.push(
            Rect {
                x,
                y: inner.y,
                width,
                height: 1,
            },
            PickTarget::ViewLabel,
        );
    }
}

impl StatefulWidget for PopoverView<'_> {
    type State = HitMap;

    fn render(self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        if area.width < 8 || area.height < 4 {
            return;
        }
        Clear.render(area, buf);
        let block = Block::bordered().style(BASE_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);
        self.render_header(inner, buf, hits);
        let content = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: inner.height.saturating_sub(1),
        };
        match self.navigator.current_view() {
            CalendarView::Day => day::render(self.navigator, content, buf, hits),
            CalendarView::Month => month::render(self.navigator, content, buf, hits),
            CalendarView::Year => year::render(self.navigator, content, buf, hits),
        }
    }
}

fn month_year_label(nav: &DateNavigator, date: Date) -> String {
    let month0 = usize::from(u8::from(date.month()) - 1);
    format!("{} {}", nav.config().locale.months[month0], date.year())
}

/// Carries the highlight's day of month into another month, clamped to that
/// month's length.
fn month_anchor(active: Date, year: i32, month: Month) -> Date {
    Date::from_calendar_date(year, month, active.day().min(month.length(year)))
        .unwrap_or(active)
}
