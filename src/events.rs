use std::cell::Cell;

/// A user interaction whose default browser action can be suppressed.
pub trait Activation {
    fn prevent_default(&self);
}

/// Click built outside the browser. Records whether its default was suppressed.
#[derive(Debug, Default)]
pub struct SyntheticClick {
    prevented: Cell<bool>,
}

impl SyntheticClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl Activation for SyntheticClick {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}
