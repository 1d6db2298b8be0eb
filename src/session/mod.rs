//! Browsing session: filter criteria, expansion state and the render model

pub mod browser;
pub mod expansion;
pub mod view;

pub use browser::{BrowserSession, SessionError, SessionResult};
pub use expansion::{toggle, Expansion};
pub use view::{BrowserView, Card};
