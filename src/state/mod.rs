// State management module.
// Loading state per query, project filtering, and the persisted theme.

pub mod filter;
pub mod loading;
pub mod portfolio;
pub mod theme;

pub use loading::LoadingState;
pub use portfolio::PortfolioState;
pub use theme::{Theme, ThemeStore};
