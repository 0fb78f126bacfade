pub mod gate;
pub mod store;

pub use gate::{is_authorized, GateDecision, SessionGate};
pub use store::{Session, SessionStore};
