use crate::dates;
use crate::focus::{FocusId, FocusRegistry};
use crate::help::Help;
use crate::navigator::{CalendarView, DateNavigator, Direction, KeyCommand, NavEvent};
use crate::popover::{Lifecycle, Popover, PopoverRequest};
use crate::theme::{BASE_STYLE, STATUS_STYLE};
use crate::trigger::Trigger;
use crate::views::{HitMap, PickTarget, PopoverView};
use crossterm::event::{
    read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

/// Left and top margin of the trigger line.
const MARGIN_X: u16 = 2;
const MARGIN_Y: u16 = 1;
const TRIGGER_HEIGHT: u16 = 3;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    navigator: DateNavigator,
    popover: Popover,
    focus: FocusRegistry,
    hits: HitMap,
    trigger_area: Rect,
    /// Last canonical value echoed to the host.
    emitted: Option<String>,
    state: AppState,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Quitting,
}

impl App {
    pub(crate) fn new(navigator: DateNavigator) -> App {
        let mut focus = FocusRegistry::new();
        focus.mount(FocusId::Trigger);
        focus
            .focus(FocusId::Trigger)
            .expect("trigger was just mounted");
        let emitted = match navigator.formatted() {
            "" => None,
            value => Some(value.to_owned()),
        };
        App {
            navigator,
            popover: Popover::new(),
            focus,
            hits: HitMap::new(),
            trigger_area: Rect::default(),
            emitted,
            state: AppState::Picking,
        }
    }

    /// Runs until quit and returns the committed value in canonical form.
    pub(crate) fn run<B: Backend>(
        mut self,
        mut terminal: Terminal<B>,
    ) -> anyhow::Result<Option<String>> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(self
            .navigator
            .selected()
            .map(|_| self.navigator.formatted().to_owned()))
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> anyhow::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match read()? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                    self.state = AppState::Quitting;
                } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code)? {
                    self.beep()?;
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse)?,
            // Redraw on resize, and we might as well redraw on other stuff
            // too
            _ => {}
        }
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> anyhow::Result<bool> {
        match self.state {
            AppState::Helping => {
                self.state = AppState::Picking;
                Ok(true)
            }
            AppState::Quitting => Ok(false),
            AppState::Picking => match key {
                KeyCode::Left => self.dispatch(KeyCommand::Arrow(Direction::Left)),
                KeyCode::Right => self.dispatch(KeyCommand::Arrow(Direction::Right)),
                KeyCode::Up => self.dispatch(KeyCommand::Arrow(Direction::Up)),
                KeyCode::Down => self.dispatch(KeyCommand::Arrow(Direction::Down)),
                KeyCode::Enter => self.dispatch(KeyCommand::Enter),
                KeyCode::Char(' ') => self.dispatch(KeyCommand::Space),
                KeyCode::Esc if self.navigator.is_open() => self.dispatch(KeyCommand::Escape),
                KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    Ok(true)
                }
                KeyCode::Char('?') if !self.navigator.is_open() => {
                    self.state = AppState::Helping;
                    Ok(true)
                }
                KeyCode::Char('q') if !self.navigator.is_open() => {
                    self.state = AppState::Quitting;
                    Ok(true)
                }
                _ => Ok(false),
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> anyhow::Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        if self.state == AppState::Helping {
            self.state = AppState::Picking;
            return Ok(());
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.trigger_area.contains(position) {
            self.apply_popover(PopoverRequest::Toggle)?;
            return Ok(());
        }
        if !self.navigator.is_open() {
            return Ok(());
        }
        if let Some(target) = self.hits.target_at(mouse.column, mouse.row) {
            self.apply_pick(target)?;
        }
        Ok(())
    }

    /// Interprets a pointer pick for the navigator.
    fn apply_pick(&mut self, target: PickTarget) -> anyhow::Result<()> {
        match target {
            PickTarget::Day(date) => self.navigator.commit_selection(date),
            // Coarse-grid picks move the anchor and drill toward the day
            // grid; nothing is committed.
            PickTarget::Month(date) | PickTarget::Year(date) => {
                self.navigator.set_active_anchor(date);
                self.navigator.reset_view();
            }
            PickTarget::ViewLabel => {
                let view = self.navigator.current_view().zoom_out();
                self.navigator.set_view(view);
            }
            PickTarget::PagePrev => self.page(-1),
            PickTarget::PageNext => self.page(1),
        }
        self.pump()
    }

    /// One page of the current view: a month of days, a year of months, a
    /// block of years.
    fn page(&mut self, sign: i32) {
        let nav = &mut self.navigator;
        let shifted = match nav.current_view() {
            CalendarView::Day => dates::add_months(nav.active_date(), sign),
            CalendarView::Month => dates::add_years(nav.active_date(), sign),
            CalendarView::Year => dates::add_years(
                nav.active_date(),
                sign.saturating_mul(i32::from(nav.config().years_per_view)),
            ),
        };
        nav.set_active_anchor(shifted);
    }

    fn dispatch(&mut self, cmd: KeyCommand) -> anyhow::Result<bool> {
        self.navigator.handle_key(cmd);
        self.pump()?;
        Ok(true)
    }

    /// Applies queued navigator effects in order until the queue runs dry.
    /// Popover lifecycle notifications feed straight back into the
    /// navigator's hooks, so the commit→close→reset chain runs through one
    /// linear pass and can never re-enter the commit.
    fn pump(&mut self) -> anyhow::Result<()> {
        loop {
            let events = self.navigator.drain_events();
            if events.is_empty() {
                return Ok(());
            }
            for event in events {
                match event {
                    NavEvent::Input(value) => self.emitted = Some(value),
                    NavEvent::Focus => self.focus.focus(FocusId::Trigger)?,
                    NavEvent::Popover(request) => self.apply_popover(request)?,
                    // The grid re-reads navigator state on every draw, and
                    // no host-level key listener is installed.
                    NavEvent::ActiveDate(_)
                    | NavEvent::ViewChange(_)
                    | NavEvent::ViewReset
                    | NavEvent::Key(_) => {}
                }
            }
        }
    }

    fn apply_popover(&mut self, request: PopoverRequest) -> anyhow::Result<()> {
        match self.popover.apply(request) {
            Some(Lifecycle::Opened) => self.navigator.on_opened(),
            Some(Lifecycle::Closed) => {
                self.navigator.on_closed();
                if request == PopoverRequest::Escape {
                    self.focus.focus(FocusId::Trigger)?;
                }
            }
            None => {}
        }
        Ok(())
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        self.hits.clear();

        let popover = PopoverView::new(&self.navigator);
        let (popover_width, popover_height) = popover.size();
        let width = popover_width.min(area.width.saturating_sub(MARGIN_X));
        let trigger_area = Rect {
            x: area.x + MARGIN_X,
            y: area.y + MARGIN_Y,
            width,
            height: TRIGGER_HEIGHT,
        }
        .intersection(area);
        self.trigger_area = trigger_area;
        let focused = self.focus.current() == Some(FocusId::Trigger);
        Trigger::new(&self.navigator, focused).render(trigger_area, buf);

        if self.popover.is_open() {
            let popover_area = Rect {
                x: trigger_area.x,
                y: trigger_area.bottom(),
                width: popover_width,
                height: popover_height,
            }
            .intersection(area);
            popover.render(popover_area, buf, &mut self.hits);
        }

        if area.height > TRIGGER_HEIGHT + MARGIN_Y + 1 {
            let status = match &self.emitted {
                Some(value) => format!("value: {value}   ENTER select · SPACE toggle · ? help"),
                None => String::from("value: (none)   ENTER select · SPACE toggle · ? help"),
            };
            buf.set_stringn(
                area.x + MARGIN_X,
                area.bottom() - 1,
                status,
                usize::from(area.width.saturating_sub(MARGIN_X)),
                STATUS_STYLE,
            );
        }

        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}
