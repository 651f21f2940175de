//! Page objects, one per application screen.
//!
//! Screens form a directed graph: Top → {Login, Signup, Plans};
//! Login → MyPage; Signup → MyPage; MyPage → {Plans, Icon}; Icon → MyPage;
//! Plans → Reserve (in a new window); Reserve → Confirm; Confirm → a
//! success modal that collapses back to a single window. Each edge is a
//! navigation method consuming the current page object and returning the
//! next one, so a page object can never outlive the screen it stands for.
//!
//! Every constructor waits for the screen's title marker and then asserts
//! the title prefix, failing with `IllegalState` otherwise. Validation
//! failures keep the caller on the current page type and are observed
//! through message getters instead of a dedicated error screen.

mod confirm;
mod icon;
mod login;
mod my_page;
mod plans;
mod reserve;
mod room;
mod signup;
mod top;

pub use confirm::ConfirmPage;
pub use icon::IconPage;
pub use login::LoginPage;
pub use my_page::MyPage;
pub use plans::PlansPage;
pub use reserve::{Contact, ReservePage};
pub use room::RoomPage;
pub use signup::{Gender, Rank, SignupPage};
pub use top::TopPage;

use crate::error::E2eResult;
use crate::session::Session;

/// The closed set of application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing page
    Top,
    /// Login form
    Login,
    /// Signup form
    Signup,
    /// Member profile
    MyPage,
    /// Icon upload form
    Icon,
    /// Plan list
    Plans,
    /// Reservation form (opened in its own window)
    Reserve,
    /// Reservation confirmation
    Confirm,
    /// Room detail, embedded as a frame inside the reservation form
    Room,
}

impl Screen {
    /// Title marker identifying the screen; `None` for frame-embedded
    /// documents that carry no title of their own.
    #[must_use]
    pub const fn title_marker(&self) -> Option<&'static str> {
        match self {
            Self::Top => Some("HOTEL PLANISPHERE"),
            Self::Login => Some("Login"),
            Self::Signup => Some("Sign up"),
            Self::MyPage => Some("MyPage"),
            Self::Icon => Some("Setting Icon"),
            Self::Plans => Some("Plans"),
            Self::Reserve => Some("Reservation"),
            Self::Confirm => Some("Confirm Reservation"),
            Self::Room => None,
        }
    }
}

/// Shared construction guard: wait for the marker, then verify the prefix.
pub(crate) async fn expect_screen(session: &Session, screen: Screen) -> E2eResult<()> {
    if let Some(marker) = screen.title_marker() {
        session.wait_until_title_contains(marker).await?;
        session.assert_title_prefix(marker).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_navigable_screen_has_a_marker() {
        let screens = [
            Screen::Top,
            Screen::Login,
            Screen::Signup,
            Screen::MyPage,
            Screen::Icon,
            Screen::Plans,
            Screen::Reserve,
            Screen::Confirm,
        ];
        for screen in screens {
            assert!(screen.title_marker().is_some(), "{screen:?}");
        }
        // The room document lives inside a frame and has no title.
        assert!(Screen::Room.title_marker().is_none());
    }

    #[test]
    fn markers_match_the_target_site() {
        assert_eq!(Screen::Top.title_marker(), Some("HOTEL PLANISPHERE"));
        assert_eq!(Screen::Confirm.title_marker(), Some("Confirm Reservation"));
        assert_eq!(Screen::Icon.title_marker(), Some("Setting Icon"));
    }
}
