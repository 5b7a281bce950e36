// Deferred state transitions requested while rendering
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Descend into the row at this `list_index` of the current level.
    Descend(usize),
    /// Jump back so the history has this many entries.
    Ascend(usize),
    ToggleSort(String),
    SetFilter { column: String, pattern: String },
}

/// Collects actions fired by renderers during one frame. The list view
/// drains it after rendering, so state never changes mid-frame.
#[derive(Default)]
pub struct Dispatcher {
    pending: RefCell<Vec<Action>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, action: Action) {
        self.pending.borrow_mut().push(action);
    }

    pub fn drain(&self) -> Vec<Action> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

/// Bound "select this row" callback handed to data row renderers.
#[derive(Clone, Copy)]
pub struct Select<'a> {
    dispatcher: &'a Dispatcher,
    list_index: usize,
}

impl<'a> Select<'a> {
    pub fn new(dispatcher: &'a Dispatcher, list_index: usize) -> Self {
        Self {
            dispatcher,
            list_index,
        }
    }

    pub fn list_index(&self) -> usize {
        self.list_index
    }

    pub fn select(&self) {
        self.dispatcher.dispatch(Action::Descend(self.list_index));
    }
}

/// Bound "jump back here" callback handed to breadcrumb renderers.
#[derive(Clone, Copy)]
pub struct Pop<'a> {
    dispatcher: &'a Dispatcher,
    hist_index: usize,
}

impl<'a> Pop<'a> {
    pub fn new(dispatcher: &'a Dispatcher, hist_index: usize) -> Self {
        Self {
            dispatcher,
            hist_index,
        }
    }

    pub fn pop(&self) {
        self.dispatcher.dispatch(Action::Ascend(self.hist_index));
    }
}
