/// Commands the navigator (or the host) may address to the popover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PopoverRequest {
    Open,
    Close,
    Toggle,
    /// Escape is close-with-focus-restore; the driver refocuses the trigger
    /// after the resulting `Closed` event.
    Escape,
}

/// Lifecycle notifications mirrored back into the navigator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Lifecycle {
    Opened,
    Closed,
}

/// Open/closed state of the dropdown container.  Redundant requests (closing
/// an already-closed popover, etc.) produce no lifecycle event.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Popover {
    open: bool,
}

impl Popover {
    pub(crate) fn new() -> Popover {
        Popover::default()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn apply(&mut self, request: PopoverRequest) -> Option<Lifecycle> {
        match request {
            PopoverRequest::Open => self.set(true),
            PopoverRequest::Close | PopoverRequest::Escape => self.set(false),
            PopoverRequest::Toggle => self.set(!self.open),
        }
    }

    fn set(&mut self, open: bool) -> Option<Lifecycle> {
        if self.open == open {
            return None;
        }
        self.open = open;
        Some(if open {
            Lifecycle::Opened
        } else {
            Lifecycle::Closed
        })
    }
}
