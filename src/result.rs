use log::warn;

/// Codes for the result of an integration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegrationRetCode {
    /// Successful integration
    Success,
    /// At least one Simpson panel was accepted at the maximum recursion level
    /// without meeting its tolerance
    MaxLevelReached,
}

/// Structure for the result of an integration
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationResult<T> {
    /// Value of the integration
    pub val: T,
    /// Estimated error of the integration, if the rule provides one
    pub err: Option<T>,
    /// Return code
    pub code: IntegrationRetCode,
    /// Number of function evaluations
    pub nevals: usize,
}

impl<T> IntegrationResult<T> {
    pub(crate) fn new(val: T, err: Option<T>, nevals: usize) -> IntegrationResult<T> {
        IntegrationResult {
            val,
            err,
            code: IntegrationRetCode::Success,
            nevals,
        }
    }

    pub(crate) fn issue_warning(&self, level_max: usize) {
        match self.code {
            IntegrationRetCode::Success => {}
            IntegrationRetCode::MaxLevelReached => warn!(
                "Maximum level {} reached before tolerance was met after {} evaluations",
                level_max, self.nevals
            ),
        }
    }
}
