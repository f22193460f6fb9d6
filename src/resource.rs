//! Resource Load State
//!
//! Loading → Populated | Empty | Error, shared by every list panel.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Populated(T),
    Empty,
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            LoadState::Populated(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    pub fn from_list(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => LoadState::Empty,
            Ok(items) => LoadState::Populated(items),
            Err(e) => LoadState::Error(e.to_string()),
        }
    }
}

impl<T> LoadState<T> {
    pub fn from_optional(result: Result<Option<T>, ApiError>) -> Self {
        match result {
            Ok(Some(value)) => LoadState::Populated(value),
            Ok(None) => LoadState::Empty,
            Err(e) => LoadState::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_states() {
        assert_eq!(LoadState::from_list(Ok(vec![1, 2])), LoadState::Populated(vec![1, 2]));
        assert_eq!(LoadState::<Vec<u8>>::from_list(Ok(vec![])), LoadState::Empty);
        assert_eq!(
            LoadState::<Vec<u8>>::from_list(Err(ApiError::Network("offline".into()))),
            LoadState::Error("Falha de rede: offline".into())
        );
    }

    #[test]
    fn test_optional_states() {
        assert_eq!(LoadState::from_optional(Ok(Some("Barbearia"))), LoadState::Populated("Barbearia"));
        assert_eq!(LoadState::<&str>::from_optional(Ok(None)), LoadState::Empty);
        assert!(LoadState::<u8>::Loading.is_loading());
        assert_eq!(LoadState::Populated(3).populated(), Some(&3));
    }
}
