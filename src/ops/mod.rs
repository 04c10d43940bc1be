//! User-facing operations behind each diary command.
//!
//! Each operation is a thin orchestration over date resolution
//! (`journal_core`) and day file storage (`journal_io`). Operations return
//! data; printing is left to the dispatcher in `cli`.

pub mod add;
pub mod edit;
pub mod hide;
pub mod list;
pub mod random;
pub mod search;
pub mod stats;

// Re-export commonly used functions
pub use add::add_entry;
pub use edit::prepare_entry;
pub use hide::hide_diary;
pub use list::list_entry;
pub use random::pick_random_entry;
pub use search::{search_entries, SearchMatch, SearchOptions};
pub use stats::{collect_word_counts, WordCountStats};
