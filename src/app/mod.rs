pub mod session;

pub use session::{Frame, Session};
