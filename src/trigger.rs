use crate::navigator::DateNavigator;
use crate::theme::{trigger, BASE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
};

/// The text-input line the picker anchors to.  It owns no state of its own;
/// everything it shows is derived from the navigator.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Trigger<'a> {
    navigator: &'a DateNavigator,
    focused: bool,
}

impl<'a> Trigger<'a> {
    pub(crate) fn new(navigator: &'a DateNavigator, focused: bool) -> Trigger<'a> {
        Trigger { navigator, focused }
    }
}

impl Widget for Trigger<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            trigger::FOCUSED_BORDER_STYLE
        } else {
            trigger::BLURRED_BORDER_STYLE
        };
        let block = Block::bordered()
            .title(" Date ")
            .border_style(border)
            .style(BASE_STYLE);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let marker = if self.navigator.is_open() {
            "▴"
        } else {
            "▾"
        };
        buf.set_string(
            inner.right().saturating_sub(2),
            inner.y,
            marker,
            trigger::MARKER_STYLE,
        );

        let text_width = usize::from(inner.width.saturating_sub(4));
        let value = self.navigator.display_value();
        if value.is_empty() {
            if let Some(placeholder) = &self.navigator.config().placeholder {
                buf.set_stringn(
                    inner.x + 1,
                    inner.y,
                    placeholder,
                    text_width,
                    trigger::PLACEHOLDER_STYLE,
                );
            }
        } else {
            buf.set_stringn(inner.x + 1, inner.y, value, text_width, trigger::VALUE_STYLE);
        }
    }
}
