use std::time::Instant;

use crate::document::NodeId;

/// Class of the results banner element
pub const BANNER_CLASS: &str = "search-results";

/// Outcome the banner reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Results { count: usize },
    NoResults,
}

/// The banner element inserted at the top of the active panel
#[derive(Debug, Clone)]
pub struct Banner {
    pub node: NodeId,
    pub kind: BannerKind,
    /// When set, the banner is removed once this instant has passed
    pub dismiss_at: Option<Instant>,
}

impl Banner {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.dismiss_at.is_some_and(|deadline| now >= deadline)
    }
}

pub fn results_message(query: &str, count: usize) -> String {
    format!("Suchergebnisse für \"{}\" gefunden ({} Treffer)", query, count)
}

pub fn no_results_message(query: &str) -> String {
    format!("Keine Suchergebnisse für \"{}\" gefunden.", query)
}
