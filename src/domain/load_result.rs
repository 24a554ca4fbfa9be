use serde::Serialize;

/// Outcome of loading an optional resource
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadResult<T> {
    /// The loader has not run for the current lookup yet
    NotAttempted,
    Loaded { data: T },
    Empty { reason: String },
}

impl<T> LoadResult<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadResult::Loaded { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadResult::Loaded { data } => Some(data),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            LoadResult::Empty { reason } => Some(reason),
            _ => None,
        }
    }
}

impl<T: Default> LoadResult<T> {
    /// Loaded data, or the empty value for any other state
    pub fn into_data_or_default(self) -> T {
        match self {
            LoadResult::Loaded { data } => data,
            _ => T::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_degrades_to_default() {
        let result: LoadResult<Vec<i32>> = LoadResult::Empty {
            reason: "HTTP 503: Service Unavailable".to_string(),
        };
        assert!(!result.is_loaded());
        assert_eq!(result.reason(), Some("HTTP 503: Service Unavailable"));
        assert!(result.into_data_or_default().is_empty());
    }

    #[test]
    fn loaded_exposes_data() {
        let result = LoadResult::Loaded { data: vec![1, 2] };
        assert_eq!(result.data(), Some(&vec![1, 2]));
        assert_eq!(result.into_data_or_default(), vec![1, 2]);
    }
}
