//! Game session collaborator

mod session;

pub use session::GameSession;
