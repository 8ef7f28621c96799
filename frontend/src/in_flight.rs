use std::{cell::Cell, rc::Rc};

/// Marks one control as waiting for a response.
///
/// Clones share the same flag, so the copy captured by an event listener
/// and the copy moved into the request task see each other.
#[derive(Clone, Default, Debug)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    /// `None` while an earlier request from this control is unresolved.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.0.replace(true) {
            return None;
        }

        Some(InFlightGuard(self.0.clone()))
    }

    pub fn is_pending(&self) -> bool {
        self.0.get()
    }
}

/// Releases the control when dropped.
#[derive(Debug)]
pub struct InFlightGuard(Rc<Cell<bool>>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
