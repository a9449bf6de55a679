pub mod filter;
pub mod store;

pub use filter::TradeFilter;
pub use store::{load_journal, save_journal, Journal, JournalError, Settings};
