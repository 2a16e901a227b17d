//! Per-tag moderation menu
//!
//! At most one tag has its options menu open. Opening the menu for another
//! tag replaces the current one. The blocked state is captured when the menu
//! opens and stays authoritative until it is closed and reopened, so exactly
//! one of Block or Unblock is offered.

use tracing::debug;

/// Action offered by an open menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Block,
    Unblock,
}

/// Menu state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    OpenFor { tag: String, is_blocked: bool },
}

#[derive(Debug, Default)]
pub struct TagModerationMenu {
    state: MenuState,
}

impl TagModerationMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &MenuState {
        &self.state
    }

    /// Tag the menu is open for
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            MenuState::OpenFor { tag, .. } => Some(tag),
            MenuState::Closed => None,
        }
    }

    /// The single action offered, if open
    #[must_use]
    pub const fn available_action(&self) -> Option<MenuAction> {
        match &self.state {
            MenuState::OpenFor { is_blocked: true, .. } => Some(MenuAction::Unblock),
            MenuState::OpenFor { is_blocked: false, .. } => Some(MenuAction::Block),
            MenuState::Closed => None,
        }
    }

    /// Open for `tag`, replacing any open menu
    pub fn open(&mut self, tag: &str, is_blocked: bool) {
        debug!(tag, is_blocked, previous = ?self.selected(), "opening moderation menu");
        self.state = MenuState::OpenFor {
            tag: tag.to_string(),
            is_blocked,
        };
    }

    pub fn close(&mut self) {
        if self.selected().is_some() {
            debug!("closing moderation menu");
        }
        self.state = MenuState::Closed;
    }

    /// Consume the menu for `action`
    ///
    /// Returns the target tag and closes the menu if `action` is the one on
    /// offer; otherwise leaves the menu untouched and returns `None`.
    pub fn take(&mut self, action: MenuAction) -> Option<String> {
        if self.available_action() != Some(action) {
            return None;
        }
        match std::mem::take(&mut self.state) {
            MenuState::OpenFor { tag, .. } => Some(tag),
            MenuState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = TagModerationMenu::new();
        assert_eq!(menu.state(), &MenuState::Closed);
        assert_eq!(menu.available_action(), None);
    }

    #[test]
    fn test_open_offers_one_action() {
        let mut menu = TagModerationMenu::new();
        menu.open("rust", false);
        assert_eq!(menu.available_action(), Some(MenuAction::Block));

        menu.open("php", true);
        assert_eq!(menu.available_action(), Some(MenuAction::Unblock));
    }

    #[test]
    fn test_last_opened_wins() {
        let mut menu = TagModerationMenu::new();
        menu.open("a", false);
        menu.open("b", true);
        assert_eq!(
            menu.state(),
            &MenuState::OpenFor {
                tag: "b".to_string(),
                is_blocked: true
            }
        );
    }

    #[test]
    fn test_take_closes_menu() {
        let mut menu = TagModerationMenu::new();
        menu.open("rust", false);
        assert_eq!(menu.take(MenuAction::Block), Some("rust".to_string()));
        assert_eq!(menu.state(), &MenuState::Closed);
    }

    #[test]
    fn test_take_wrong_action_keeps_menu() {
        let mut menu = TagModerationMenu::new();
        menu.open("rust", false);
        assert_eq!(menu.take(MenuAction::Unblock), None);
        assert_eq!(menu.selected(), Some("rust"));
    }

    #[test]
    fn test_take_when_closed() {
        let mut menu = TagModerationMenu::new();
        assert_eq!(menu.take(MenuAction::Block), None);
    }

    #[test]
    fn test_close() {
        let mut menu = TagModerationMenu::new();
        menu.open("rust", false);
        menu.close();
        assert_eq!(menu.selected(), None);
        menu.close();
        assert_eq!(menu.state(), &MenuState::Closed);
    }
}
