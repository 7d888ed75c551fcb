use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabviewError {
    #[error("No tabs found.\n\nThe document needs elements with class \"tab-button\" and matching \"tab-panel\" elements.")]
    NoTabs,

    #[error("Found {tabs} tab buttons but {panels} tab panels; every tab needs exactly one panel")]
    TabPanelMismatch { tabs: usize, panels: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
