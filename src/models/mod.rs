pub mod delta;
pub mod direction;
pub mod session;
pub mod trade;

pub use delta::DeltaCategory;
pub use direction::Direction;
pub use session::{Session, SessionLabel};
pub use trade::Trade;
