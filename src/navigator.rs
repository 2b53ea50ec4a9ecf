use crate::codec::{self, Locale, RawValue};
use crate::dates;
use crate::popover::PopoverRequest;
use thiserror::Error;
use time::Date;

/// Granularity of the grid currently shown in the popover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CalendarView {
    Day,
    Month,
    Year,
}

impl CalendarView {
    /// One step toward the day grid.  Idempotent at the finest granularity.
    fn zoom_in(self) -> CalendarView {
        match self {
            CalendarView::Year => CalendarView::Month,
            CalendarView::Month | CalendarView::Day => CalendarView::Day,
        }
    }

    /// One step toward the year grid.  Idempotent at the coarsest granularity.
    pub(crate) fn zoom_out(self) -> CalendarView {
        match self {
            CalendarView::Day => CalendarView::Month,
            CalendarView::Month | CalendarView::Year => CalendarView::Year,
        }
    }
}

impl std::str::FromStr for CalendarView {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<CalendarView, ConfigError> {
        match s {
            "day" => Ok(CalendarView::Day),
            "month" => Ok(CalendarView::Month),
            "year" => Ok(CalendarView::Year),
            other => Err(ConfigError::View(other.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Logical key commands the trigger forwards to the navigator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum KeyCommand {
    Arrow(Direction),
    Enter,
    Escape,
    Space,
}

/// Everything the navigator tells its collaborators, in the order the
/// effects must be applied.  The re-emitted key is always last.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum NavEvent {
    /// The committed value changed; carries the canonical internal-format
    /// text echoed back to the host.
    Input(String),
    /// The highlight moved; the grid should re-render around this date.
    ActiveDate(Date),
    ViewChange(CalendarView),
    ViewReset,
    /// Return input focus to the trigger.
    Focus,
    Popover(PopoverRequest),
    /// Raw key re-emission for host-level listeners, consumed or not.
    Key(KeyCommand),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[error("months-per-view must be at least 1")]
    MonthsPerView,
    #[error("years-per-view must be at least 1")]
    YearsPerView,
    #[error("week-start must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    WeekStart(u8),
    #[error("unknown view {0:?} (expected day, month, or year)")]
    View(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    pub(crate) initial_view: CalendarView,
    pub(crate) months_per_view: u8,
    pub(crate) years_per_view: u8,
    /// Days from Sunday, 0-6.
    pub(crate) week_start: u8,
    pub(crate) close_on_select: bool,
    /// Pattern of the canonical value echoed to the host.
    pub(crate) date_format: String,
    /// Pattern of the human-facing trigger text.
    pub(crate) user_format: String,
    pub(crate) placeholder: Option<String>,
    pub(crate) locale: Locale,
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.months_per_view == 0 {
            return Err(ConfigError::MonthsPerView);
        }
        if self.years_per_view == 0 {
            return Err(ConfigError::YearsPerView);
        }
        if self.week_start > 6 {
            return Err(ConfigError::WeekStart(self.week_start));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            initial_view: CalendarView::Day,
            months_per_view: 1,
            years_per_view: 12,
            week_start: 0,
            close_on_select: true,
            date_format: String::from("Y-m-d"),
            user_format: String::from("F j, Y"),
            placeholder: None,
            locale: Locale::english(),
        }
    }
}

/// The view/navigation state machine of the date picker.
///
/// Owns the committed selection, the keyboard highlight, the view
/// granularity, and the open/highlight flags.  All mutation goes through the
/// operations below; each operation finishes by queueing the effects its
/// collaborators must apply, in order, on the internal event queue.  The
/// driver drains the queue with [`DateNavigator::drain_events`], feeding
/// popover lifecycle notifications back through [`DateNavigator::on_opened`]
/// and [`DateNavigator::on_closed`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DateNavigator {
    config: Config,
    today: Date,
    selected: Option<Date>,
    active_date: Date,
    current_view: CalendarView,
    open: bool,
    show_active_date: bool,
    formatted: String,
    display: String,
    events: Vec<NavEvent>,
}

impl DateNavigator {
    pub(crate) fn new(
        config: Config,
        today: Date,
        value: &RawValue,
    ) -> Result<DateNavigator, ConfigError> {
        config.validate()?;
        let selected = codec::parse(value, &config.date_format, &config.locale);
        let formatted = codec::format(selected, &config.date_format, &config.locale);
        let display = codec::format(selected, &config.user_format, &config.locale);
        Ok(DateNavigator {
            active_date: selected.unwrap_or(today),
            current_view: config.initial_view,
            open: false,
            show_active_date: false,
            selected,
            formatted,
            display,
            today,
            config,
            events: Vec::new(),
        })
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.selected
    }

    pub(crate) fn active_date(&self) -> Date {
        self.active_date
    }

    pub(crate) fn current_view(&self) -> CalendarView {
        self.current_view
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn show_active_date(&self) -> bool {
        self.show_active_date
    }

    /// Canonical internal-format text of the selection, `""` when empty.
    pub(crate) fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Human-facing text of the selection, `""` when empty.
    pub(crate) fn display_value(&self) -> &str {
        &self.display
    }

    /// First and last day of the months currently rendered, inclusive.
    pub(crate) fn visible_range(&self) -> (Date, Date) {
        let start = dates::first_of_month(self.active_date);
        let end = dates::last_of_month(dates::add_months(
            start,
            i32::from(self.config.months_per_view) - 1,
        ));
        (start, end)
    }

    /// Whether the committed value falls inside [`Self::visible_range`].
    /// An empty selection counts as in view.
    pub(crate) fn value_in_view(&self) -> bool {
        match self.selected {
            None => true,
            Some(value) => {
                let (start, end) = self.visible_range();
                start <= value && value <= end
            }
        }
    }

    pub(crate) fn drain_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    /// The only path by which an externally driven change enters the state.
    pub(crate) fn sync_value(&mut self, raw: &RawValue) {
        let parsed = codec::parse(raw, &self.config.date_format, &self.config.locale);
        self.set_selected(parsed);
    }

    /// Single dispatch point for the logical keys.  Every path re-emits the
    /// raw command last, whether or not it had a navigational effect.
    pub(crate) fn handle_key(&mut self, cmd: KeyCommand) {
        match cmd {
            KeyCommand::Arrow(direction) => self.arrow(direction),
            KeyCommand::Enter => self.enter(),
            KeyCommand::Escape => self.events.push(NavEvent::Popover(PopoverRequest::Escape)),
            KeyCommand::Space => self.events.push(NavEvent::Popover(PopoverRequest::Toggle)),
        }
        self.events.push(NavEvent::Key(cmd));
    }

    fn arrow(&mut self, direction: Direction) {
        self.show_active_date = true;
        if !self.open {
            // The press that opens the view must not also move the date.
            self.events.push(NavEvent::Popover(PopoverRequest::Open));
            return;
        }
        let date = self.active_date;
        self.active_date = match self.current_view {
            CalendarView::Day => dates::add_days(
                date,
                match direction {
                    Direction::Left => -1,
                    Direction::Right => 1,
                    Direction::Up => -7,
                    Direction::Down => 7,
                },
            ),
            CalendarView::Month => dates::add_months(date, Self::coarse_step(direction)),
            CalendarView::Year => dates::add_years(date, Self::coarse_step(direction)),
        };
        self.events.push(NavEvent::ActiveDate(self.active_date));
    }

    fn coarse_step(direction: Direction) -> i32 {
        match direction {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -4,
            Direction::Down => 4,
        }
    }

    fn enter(&mut self) {
        if !self.open {
            self.events.push(NavEvent::Popover(PopoverRequest::Open));
        } else if self.show_active_date {
            if self.current_view == CalendarView::Day {
                self.commit_selection(self.active_date);
            } else {
                self.reset_view();
            }
        }
        // No highlight yet: Enter has nothing to act on.
    }

    /// Commits `date` as the selection.  The only user-interaction path that
    /// writes `selected`.  One-shot: the close it may request only resets
    /// state through `on_closed` and cannot re-enter this method.
    pub(crate) fn commit_selection(&mut self, date: Date) {
        self.set_selected(Some(date));
        self.events.push(NavEvent::Focus);
        if self.config.close_on_select {
            self.events.push(NavEvent::Popover(PopoverRequest::Close));
        }
    }

    /// Moves the highlight to a candidate date without committing it.
    pub(crate) fn set_active_anchor(&mut self, date: Date) {
        self.active_date = date;
        self.events.push(NavEvent::ActiveDate(date));
        self.events.push(NavEvent::Focus);
    }

    pub(crate) fn set_view(&mut self, view: CalendarView) {
        self.current_view = view;
        self.events.push(NavEvent::ViewChange(view));
        self.events.push(NavEvent::Focus);
    }

    /// Zoom-in rule: Year→Month, Month→Day, Day→Day.
    pub(crate) fn reset_view(&mut self) {
        let next = self.current_view.zoom_in();
        self.events.push(NavEvent::ViewReset);
        self.set_view(next);
    }

    pub(crate) fn on_opened(&mut self) {
        self.open = true;
    }

    /// Closed baseline: every reopen starts from a clean state anchored on
    /// the current selection.
    pub(crate) fn on_closed(&mut self) {
        self.open = false;
        self.current_view = self.config.initial_view;
        self.show_active_date = false;
        self.active_date = self.selected.unwrap_or(self.today);
    }

    /// Explicit recomputation cascade shared by value sync and selection
    /// commit: derived text first, then the re-anchor rule.  The Input echo
    /// only fires when the canonical text actually changed, which keeps the
    /// host echo loop idempotent.
    fn set_selected(&mut self, value: Option<Date>) {
        self.selected = value;
        let formatted = codec::format(value, &self.config.date_format, &self.config.locale);
        self.display = codec::format(value, &self.config.user_format, &self.config.locale);
        if formatted != self.formatted {
            self.formatted = formatted;
            self.events.push(NavEvent::Input(self.formatted.clone()));
        }
        // With a single visible month the anchor always tracks the
        // selection; with more, avoid jumping a window the value is
        // already inside.
        if self.config.months_per_view == 1 || !self.value_in_view() {
            self.active_date = value.unwrap_or(self.today);
            self.events.push(NavEvent::ActiveDate(self.active_date));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2023 - 06 - 01);

    fn navigator(value: &str, config: Config) -> DateNavigator {
        DateNavigator::new(config, TODAY, &RawValue::Text(value.into()))
            .expect("config should be valid")
    }

    fn opened(value: &str, config: Config) -> DateNavigator {
        let mut nav = navigator(value, config);
        nav.on_opened();
        nav.drain_events();
        nav
    }

    #[test]
    fn config_rejected_at_construction() {
        let bad = Config {
            months_per_view: 0,
            ..Config::default()
        };
        assert_eq!(
            DateNavigator::new(bad, TODAY, &RawValue::Empty),
            Err(ConfigError::MonthsPerView)
        );
        let bad = Config {
            years_per_view: 0,
            ..Config::default()
        };
        assert_eq!(
            DateNavigator::new(bad, TODAY, &RawValue::Empty),
            Err(ConfigError::YearsPerView)
        );
        let bad = Config {
            week_start: 7,
            ..Config::default()
        };
        assert_eq!(
            DateNavigator::new(bad, TODAY, &RawValue::Empty),
            Err(ConfigError::WeekStart(7))
        );
    }

    #[test]
    fn seeds_from_the_initial_value() {
        let nav = navigator("2023-06-15", Config::default());
        assert_eq!(nav.selected(), Some(date!(2023 - 06 - 15)));
        assert_eq!(nav.active_date(), date!(2023 - 06 - 15));
        assert_eq!(nav.formatted(), "2023-06-15");
        assert_eq!(nav.display_value(), "June 15, 2023");
        assert!(!nav.is_open());
        assert!(!nav.show_active_date());
    }

    #[test]
    fn seeds_empty_from_unparseable_value() {
        let mut nav = navigator("not a date", Config::default());
        assert_eq!(nav.selected(), None);
        assert_eq!(nav.active_date(), TODAY);
        assert_eq!(nav.formatted(), "");
        // Construction emits nothing.
        assert_eq!(nav.drain_events(), Vec::new());
    }

    #[test]
    fn visible_range_spans_the_configured_months() {
        let nav = navigator("2023-06-15", Config::default());
        assert_eq!(
            nav.visible_range(),
            (date!(2023 - 06 - 01), date!(2023 - 06 - 30))
        );
        let nav = navigator(
            "2023-06-15",
            Config {
                months_per_view: 2,
                ..Config::default()
            },
        );
        assert_eq!(
            nav.visible_range(),
            (date!(2023 - 06 - 01), date!(2023 - 07 - 31))
        );
    }

    #[test]
    fn arrow_table_day_view() {
        for (direction, expected) in [
            (Direction::Left, date!(2023 - 06 - 14)),
            (Direction::Right, date!(2023 - 06 - 16)),
            (Direction::Up, date!(2023 - 06 - 08)),
            (Direction::Down, date!(2023 - 06 - 22)),
        ] {
            let mut nav = opened("2023-06-15", Config::default());
            nav.handle_key(KeyCommand::Arrow(direction));
            assert_eq!(nav.active_date(), expected, "{direction:?}");
            assert!(nav.show_active_date());
            assert_eq!(nav.selected(), Some(date!(2023 - 06 - 15)));
        }
    }

    #[test]
    fn arrow_table_month_view() {
        for (direction, expected) in [
            (Direction::Left, date!(2023 - 05 - 15)),
            (Direction::Right, date!(2023 - 07 - 15)),
            (Direction::Up, date!(2023 - 02 - 15)),
            (Direction::Down, date!(2023 - 10 - 15)),
        ] {
            let mut nav = opened("2023-06-15", Config::default());
            nav.set_view(CalendarView::Month);
            nav.handle_key(KeyCommand::Arrow(direction));
            assert_eq!(nav.active_date(), expected, "{direction:?}");
        }
    }

    #[test]
    fn arrow_table_year_view() {
        for (direction, expected) in [
            (Direction::Left, date!(2022 - 06 - 15)),
            (Direction::Right, date!(2024 - 06 - 15)),
            (Direction::Up, date!(2019 - 06 - 15)),
            (Direction::Down, date!(2027 - 06 - 15)),
        ] {
            let mut nav = opened("2023-06-15", Config::default());
            nav.set_view(CalendarView::Year);
            nav.handle_key(KeyCommand::Arrow(direction));
            assert_eq!(nav.active_date(), expected, "{direction:?}");
        }
    }

    #[test]
    fn arrow_crosses_month_boundaries_without_clamping() {
        let mut nav = opened("2024-02-28", Config::default());
        nav.handle_key(KeyCommand::Arrow(Direction::Right));
        assert_eq!(nav.active_date(), date!(2024 - 02 - 29));
        nav.handle_key(KeyCommand::Arrow(Direction::Right));
        assert_eq!(nav.active_date(), date!(2024 - 03 - 01));
    }

    #[test]
    fn arrow_when_closed_opens_without_moving() {
        let mut nav = navigator("2023-06-15", Config::default());
        nav.handle_key(KeyCommand::Arrow(Direction::Right));
        assert!(nav.show_active_date());
        assert_eq!(nav.active_date(), date!(2023 - 06 - 15));
        assert_eq!(
            nav.drain_events(),
            vec![
                NavEvent::Popover(PopoverRequest::Open),
                NavEvent::Key(KeyCommand::Arrow(Direction::Right)),
            ]
        );
    }

    #[test]
    fn enter_when_closed_opens() {
        let mut nav = navigator("2023-06-15", Config::default());
        nav.handle_key(KeyCommand::Enter);
        assert_eq!(
            nav.drain_events(),
            vec![
                NavEvent::Popover(PopoverRequest::Open),
                NavEvent::Key(KeyCommand::Enter),
            ]
        );
    }

    #[test]
    fn enter_without_highlight_does_nothing() {
        let mut nav = opened("2023-06-15", Config::default());
        nav.handle_key(KeyCommand::Enter);
        assert_eq!(nav.selected(), Some(date!(2023 - 06 - 15)));
        assert_eq!(nav.drain_events(), vec![NavEvent::Key(KeyCommand::Enter)]);
    }

    #[test]
    fn enter_commits_the_highlight_on_day_view() {
        // Open, move right twice, commit: the §8 walkthrough.
        let mut nav = navigator("2023-06-15", Config::default());
        nav.handle_key(KeyCommand::Arrow(Direction::Right));
        nav.on_opened();
        nav.drain_events();
        nav.handle_key(KeyCommand::Arrow(Direction::Right));
        nav.handle_key(KeyCommand::Arrow(Direction::Right));
        assert_eq!(nav.active_date(), date!(2023 - 06 - 17));
        assert_eq!(nav.selected(), Some(date!(2023 - 06 - 15)));
        nav.drain_events();

        nav.handle_key(KeyCommand::Enter);
        assert_eq!(nav.selected(), Some(date!(2023 - 06 - 17)));
        assert_eq!(
            nav.drain_events(),
            vec![
                NavEvent::Input(String::from("2023-06-17")),
                NavEvent::ActiveDate(date!(2023 - 06 - 17)),
                NavEvent::Focus,
                NavEvent::Popover(PopoverRequest::Close),
                NavEvent::Key(KeyCommand::Enter),
            ]
        );
    }

    #[test]
    fn enter_zooms_in_from_coarse_views() {
        let mut nav = opened("2023-06-15", Config::default());
        nav.set_view(CalendarView::Year);
        nav.handle_key(KeyCommand::Arrow(Direction::Right));
        nav.drain_events();
        nav.handle_key(KeyCommand::Enter);
        assert_eq!(nav.current_view(), CalendarView::Month);
        assert_eq!(nav.selected(), Some(date!(2023 - 06 - 15)));
        assert_eq!(
            nav.drain_events(),
            vec![
                NavEvent::ViewReset,
                NavEvent::ViewChange(CalendarView::Month),
                NavEvent::Focus,
                NavEvent::Key(KeyCommand::Enter),
            ]
        );
        nav.handle_key(KeyCommand::Enter);
        assert_eq!(nav.current_view(), CalendarView::Day);
    }

    #[test]
    fn commit_without_close_on_select_keeps_the_popover() {
        let mut nav = opened(
            "2023-06-15",
            Config {
                close_on_select: false,
                ..Config::default()
            },
        );
        nav.commit_selection(date!(2023 - 06 - 20));
        let events = nav.drain_events();
        assert!(!events.contains(&NavEvent::Popover(PopoverRequest::Close)));
        assert!(events.contains(&NavEvent::Focus));
    }

    #[test]
    fn escape_and_space_forward_to_the_popover() {
        let mut nav = opened("2023-06-15", Config::default());
        nav.handle_key(KeyCommand::Escape);
        assert_eq!(
            nav.drain_events(),
            vec![
                NavEvent::Popover(PopoverRequest::Escape),
                NavEvent::Key(KeyCommand::Escape),
            ]
        );
        nav.handle_key(KeyCommand::Space);
        assert_eq!(
            nav.drain_events(),
            vec![
                NavEvent::Popover(PopoverRequest::Toggle),
                NavEvent::Key(KeyCommand::Space),
            ]
        );
    }

    #[test]
    fn reset_view_is_idempotent_at_the_floor() {
        assert_eq!(CalendarView::Year.zoom_in(), CalendarView::Month);
        assert_eq!(CalendarView::Month.zoom_in(), CalendarView::Day);
        assert_eq!(CalendarView::Day.zoom_in(), CalendarView::Day);
        let mut nav = opened("2023-06-15", Config::default());
        nav.set_view(CalendarView::Year);
        nav.reset_view();
        nav.reset_view();
        nav.reset_view();
        assert_eq!(nav.current_view(), CalendarView::Day);
    }

    #[test]
    fn set_active_anchor_never_touches_the_selection() {
        let mut nav = opened("2023-06-15", Config::default());
        nav.drain_events();
        nav.set_active_anchor(date!(2023 - 09 - 03));
        assert_eq!(nav.selected(), Some(date!(2023 - 06 - 15)));
        assert_eq!(
            nav.drain_events(),
            vec![NavEvent::ActiveDate(date!(2023 - 09 - 03)), NavEvent::Focus]
        );
    }

    #[test]
    fn closing_restores_the_baseline() {
        let mut nav = opened(
            "2023-06-15",
            Config {
                initial_view: CalendarView::Month,
                ..Config::default()
            },
        );
        nav.set_view(CalendarView::Year);
        nav.handle_key(KeyCommand::Arrow(Direction::Down));
        assert!(nav.show_active_date());
        assert_ne!(nav.active_date(), date!(2023 - 06 - 15));

        nav.on_closed();
        assert!(!nav.is_open());
        assert_eq!(nav.current_view(), CalendarView::Month);
        assert!(!nav.show_active_date());
        assert_eq!(nav.active_date(), date!(2023 - 06 - 15));
    }

    #[test]
    fn closing_with_no_selection_anchors_on_today() {
        let mut nav = opened("", Config::default());
        nav.set_active_anchor(date!(1999 - 01 - 01));
        nav.on_closed();
        assert_eq!(nav.active_date(), TODAY);
    }

    #[test]
    fn single_month_view_tracks_the_selection() {
        let mut nav = opened("2023-06-15", Config::default());
        nav.sync_value(&RawValue::Text("2023-01-31".into()));
        assert_eq!(nav.selected(), Some(date!(2023 - 01 - 31)));
        assert_eq!(nav.active_date(), date!(2023 - 01 - 31));

        nav.sync_value(&RawValue::Empty);
        assert_eq!(nav.selected(), None);
        assert_eq!(nav.active_date(), TODAY);
    }

    #[test]
    fn multi_month_view_keeps_the_anchor_for_visible_values() {
        let mut nav = opened(
            "2023-06-15",
            Config {
                months_per_view: 2,
                ..Config::default()
            },
        );
        nav.drain_events();
        // 2023-07-20 is inside [2023-06-01, 2023-07-31]: no re-anchor.
        nav.sync_value(&RawValue::Text("2023-07-20".into()));
        assert_eq!(nav.selected(), Some(date!(2023 - 07 - 20)));
        assert_eq!(nav.active_date(), date!(2023 - 06 - 15));
        assert_eq!(
            nav.drain_events(),
            vec![NavEvent::Input(String::from("2023-07-20"))]
        );
    }

    #[test]
    fn multi_month_view_reanchors_for_out_of_view_values() {
        // The §8 scenario: null → Jan 31 while June–July is visible.
        let mut nav = opened(
            "",
            Config {
                months_per_view: 2,
                ..Config::default()
            },
        );
        nav.set_active_anchor(date!(2023 - 06 - 15));
        nav.drain_events();
        nav.sync_value(&RawValue::Text("2023-01-31".into()));
        assert_eq!(nav.selected(), Some(date!(2023 - 01 - 31)));
        assert_eq!(nav.active_date(), date!(2023 - 01 - 31));
    }

    #[test]
    fn multi_month_boundaries_are_inclusive() {
        for edge in ["2023-06-01", "2023-07-31"] {
            let mut nav = opened(
                "",
                Config {
                    months_per_view: 2,
                    ..Config::default()
                },
            );
            nav.set_active_anchor(date!(2023 - 06 - 15));
            nav.drain_events();
            nav.sync_value(&RawValue::Text(edge.into()));
            assert_eq!(nav.active_date(), date!(2023 - 06 - 15), "{edge}");
        }
    }

    #[test]
    fn canonical_echo_is_idempotent() {
        let mut nav = opened("2023-06-15", Config::default());
        nav.drain_events();
        // The host echoing our own canonical output back must not loop.
        nav.sync_value(&RawValue::Text("2023-06-15".into()));
        let events = nav.drain_events();
        assert!(
            !events.iter().any(|e| matches!(e, NavEvent::Input(_))),
            "unexpected echo: {events:?}"
        );
    }

    #[test]
    fn sync_accepts_every_raw_shape() {
        let mut nav = opened("", Config::default());
        nav.sync_value(&RawValue::Date(date!(2023 - 06 - 20)));
        assert_eq!(nav.selected(), Some(date!(2023 - 06 - 20)));
        nav.sync_value(&RawValue::Timestamp(1_686_787_200_000));
        assert_eq!(nav.selected(), Some(date!(2023 - 06 - 15)));
        nav.sync_value(&RawValue::List(vec![
            RawValue::Text("bogus".into()),
            RawValue::Text("2023-03-04".into()),
        ]));
        assert_eq!(nav.selected(), Some(date!(2023 - 03 - 04)));
    }
}
