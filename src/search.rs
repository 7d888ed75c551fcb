//! Search module
//!
//! Search-as-you-type inside the active panel. Matches are wrapped in
//! highlight elements directly in the document tree and a banner at the top
//! of the panel reports how many were found.

mod banner;
mod highlight;
mod matcher;
pub mod search_events;
pub mod search_render;
mod search_state;

pub use banner::{BANNER_CLASS, Banner, BannerKind};
pub use highlight::HIGHLIGHT_CLASS;
pub use matcher::{SearchMatcher, Segment};
pub use search_state::{DEFAULT_NO_RESULTS_DISMISS, SearchState};
