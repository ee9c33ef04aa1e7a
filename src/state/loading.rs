// Per-query loading state.

/// Loading state for async data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

// No `T: Default` bound, unlike the derive.
impl<T> Default for LoadingState<T> {
    fn default() -> Self {
        LoadingState::Idle
    }
}

impl<T> LoadingState<T> {
    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadingState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Settle a finished query.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => LoadingState::Loaded(data),
            Err(e) => LoadingState::Error(e.to_string()),
        }
    }
}
