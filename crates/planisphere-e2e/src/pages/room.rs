//! Room detail document, embedded as a frame inside the reservation form.

use crate::error::E2eResult;
use crate::locator::Locator;
use crate::session::Session;

const HEADER: Locator = Locator::tag("h5");

/// The room detail shown inside the reservation form's frame.
///
/// The caller switches the session into the frame before attaching and back
/// out afterwards; the embedded document has no title of its own, so there
/// is no construction guard to run.
#[derive(Debug, Clone)]
pub struct RoomPage {
    session: Session,
}

impl RoomPage {
    /// Bind to the room document in the current frame
    #[must_use]
    pub fn attach(session: &Session) -> Self {
        Self {
            session: session.clone(),
        }
    }

    /// Room header line
    pub async fn header(&self) -> E2eResult<String> {
        self.session.read_text(HEADER).await
    }
}
