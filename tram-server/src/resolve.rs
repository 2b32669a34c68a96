//! Stop resolution from free-text identifiers.

use crate::domain::{PlanError, Stop};
use crate::repository::StopRepository;

/// Resolves a user-supplied identifier (display name or stop code) to a
/// stop via the injected repository.
pub struct StopResolver<'a, R: StopRepository> {
    stops: &'a R,
}

impl<'a, R: StopRepository> StopResolver<'a, R> {
    pub fn new(stops: &'a R) -> Self {
        Self { stops }
    }

    /// Resolve an identifier to a stop.
    ///
    /// Blank input is a caller bug (`InvalidArgument`); an identifier that
    /// matches nothing is `StopNotFound`.
    pub fn resolve(&self, identifier: &str) -> Result<Stop, PlanError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(PlanError::InvalidArgument(
                "stop identifier must not be empty",
            ));
        }

        self.stops
            .get_stop(identifier)
            .ok_or_else(|| PlanError::StopNotFound(identifier.to_string()))
    }
}
