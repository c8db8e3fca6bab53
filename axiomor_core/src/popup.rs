//! Promotional popup state machine.
//!
//! ```text
//! Hidden --delay elapsed--> Visible --close | decline | offer--> Dismissed
//! ```
//!
//! `Dismissed` is terminal for the page view. Events that do not apply to
//! the current state are ignored and reported as `false`.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visibility of the promotional overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupState {
    /// Waiting for the disclosure delay
    #[default]
    Hidden,
    /// Overlay on screen
    Visible,
    /// Closed for the rest of the page view
    Dismissed,
}

impl PopupState {
    /// Whether the overlay should be rendered.
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Which control closed the popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissReason {
    /// Close icon in the corner
    Close,
    /// "No Thanks" button
    Decline,
    /// Outbound offer link (opens in a new tab)
    Offer,
}

/// Owns the popup state for one page view.
#[derive(Clone, Debug, Default)]
pub struct PopupController {
    state: PopupState,
    dismissed_by: Option<DismissReason>,
}

impl PopupController {
    /// Fresh controller in `Hidden`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> PopupState {
        self.state
    }

    /// The control that dismissed the popup, once dismissed.
    pub fn dismissed_by(&self) -> Option<DismissReason> {
        self.dismissed_by
    }

    /// The disclosure delay has elapsed. Only `Hidden` reacts.
    pub fn on_delay_elapsed(&mut self) -> bool {
        if self.state != PopupState::Hidden {
            return false;
        }
        self.state = PopupState::Visible;
        debug!("popup: hidden -> visible");
        true
    }

    /// A dismissing control was activated. Only `Visible` reacts.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if self.state != PopupState::Visible {
            return false;
        }
        self.state = PopupState::Dismissed;
        self.dismissed_by = Some(reason);
        debug!(?reason, "popup: visible -> dismissed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let popup = PopupController::new();
        assert_eq!(popup.state(), PopupState::Hidden);
        assert!(!popup.state().is_visible());
        assert_eq!(popup.dismissed_by(), None);
    }

    #[test]
    fn delay_shows_popup_once() {
        let mut popup = PopupController::new();
        assert!(popup.on_delay_elapsed());
        assert_eq!(popup.state(), PopupState::Visible);
        assert!(!popup.on_delay_elapsed());
        assert_eq!(popup.state(), PopupState::Visible);
    }

    #[test]
    fn every_control_dismisses() {
        for reason in [DismissReason::Close, DismissReason::Decline, DismissReason::Offer] {
            let mut popup = PopupController::new();
            popup.on_delay_elapsed();
            assert!(popup.dismiss(reason));
            assert_eq!(popup.state(), PopupState::Dismissed);
            assert_eq!(popup.dismissed_by(), Some(reason));
        }
    }

    #[test]
    fn dismissed_never_reappears() {
        let mut popup = PopupController::new();
        popup.on_delay_elapsed();
        popup.dismiss(DismissReason::Close);
        assert!(!popup.on_delay_elapsed());
        assert!(!popup.dismiss(DismissReason::Decline));
        assert_eq!(popup.state(), PopupState::Dismissed);
        assert_eq!(popup.dismissed_by(), Some(DismissReason::Close));
    }

    #[test]
    fn dismiss_while_hidden_is_ignored() {
        let mut popup = PopupController::new();
        assert!(!popup.dismiss(DismissReason::Close));
        assert_eq!(popup.state(), PopupState::Hidden);
        assert!(popup.on_delay_elapsed());
    }
}
