use thiserror::Error;

/// Focusable elements of the widget tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FocusId {
    Trigger,
}

/// Raised when focus restoration targets an element that was never mounted.
/// This is a wiring defect in the host, not a steady-state condition, so it
/// aborts the operation instead of being swallowed.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("focus target {0:?} is not mounted")]
pub(crate) struct MissingFocusTarget(pub(crate) FocusId);

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct FocusRegistry {
    mounted: Vec<FocusId>,
    current: Option<FocusId>,
}

impl FocusRegistry {
    pub(crate) fn new() -> FocusRegistry {
        FocusRegistry::default()
    }

    pub(crate) fn mount(&mut self, id: FocusId) {
        if !self.mounted.contains(&id) {
            self.mounted.push(id);
        }
    }

    pub(crate) fn focus(&mut self, id: FocusId) -> Result<(), MissingFocusTarget> {
        if !self.mounted.contains(&id) {
            return Err(MissingFocusTarget(id));
        }
        self.current = Some(id);
        Ok(())
    }

    pub(crate) fn current(&self) -> Option<FocusId> {
        self.current
    }
}
