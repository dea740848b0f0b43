use tracing::debug;

use crate::events::Activation;

/// A blocking yes/no question put to the user.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Cancelled,
}

/// Asks before letting a logout link navigate.
pub struct LogoutGuard<C> {
    prompt: C,
    message: String,
}

impl<C: Confirm> LogoutGuard<C> {
    pub fn new(prompt: C, message: impl Into<String>) -> Self {
        Self {
            prompt,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn on_activate<E: Activation + ?Sized>(&self, event: &E) -> Navigation {
        if self.prompt.confirm(&self.message) {
            debug!("Logout confirmed");
            Navigation::Proceed
        } else {
            event.prevent_default();
            debug!("Logout cancelled");
            Navigation::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::events::SyntheticClick;

    #[test]
    fn test_declined_prevents_navigation() {
        let guard = LogoutGuard::new(|_: &str| false, "Are you sure you want to logout?");
        let click = SyntheticClick::new();

        assert_eq!(guard.on_activate(&click), Navigation::Cancelled);
        assert!(click.default_prevented());
    }

    #[test]
    fn test_confirmed_leaves_default() {
        let guard = LogoutGuard::new(|_: &str| true, "Are you sure you want to logout?");
        let click = SyntheticClick::new();

        assert_eq!(guard.on_activate(&click), Navigation::Proceed);
        assert!(!click.default_prevented());
    }

    #[test]
    fn test_prompt_receives_message_each_time() {
        let asked = RefCell::new(Vec::new());
        let guard = LogoutGuard::new(
            |message: &str| {
                asked.borrow_mut().push(message.to_string());
                true
            },
            "Are you sure you want to logout?",
        );

        guard.on_activate(&SyntheticClick::new());
        guard.on_activate(&SyntheticClick::new());

        assert_eq!(
            *asked.borrow(),
            vec!["Are you sure you want to logout?".to_string(); 2]
        );
    }
}
