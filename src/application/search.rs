// City-search submission
use crate::domain::error::ForecastError;

/// Accept a free-text city query from the UI.
///
/// The only validation is the empty check: surrounding whitespace is
/// trimmed and a blank query is rejected, anything else passes through
/// unchanged for the data layer to resolve.
pub fn submit(text: &str) -> Result<String, ForecastError> {
    let query = text.trim();
    if query.is_empty() {
        return Err(ForecastError::EmptyQuery);
    }
    Ok(query.to_string())
}
