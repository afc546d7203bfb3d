//! Search lifecycle: one active search at a time, newest wins.
//!
//! ```ignore
//! let mut controller = SearchController::from_config(&config::load())?;
//! controller.start_search("beatles", Category::Music);
//! match controller.wait_until_settled().await {
//!     SearchState::Succeeded(results) => println!("{} results", results.len()),
//!     SearchState::Failed(e) => eprintln!("{}", e.user_message()),
//!     _ => {}
//! }
//! ```

mod controller;
mod session;

pub use controller::{Completion, Outcome, SearchController};
pub use session::{SearchQuerySession, SearchState};
