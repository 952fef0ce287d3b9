//! View errors

use thiserror::Error;

/// Errors raised while preparing display state
///
/// Never propagated past the reducer; converted to the user-visible error
/// string on `BookView` instead.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Sample processing failed
    #[error("Failed to load dummy orderbook data")]
    DataPreparation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_preparation_message() {
        assert_eq!(
            ViewError::DataPreparation.to_string(),
            "Failed to load dummy orderbook data"
        );
    }
}
