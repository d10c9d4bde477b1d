use crate::{DiagnosisClient, DiagnosisResult, Error};

/// Interactive checking session owning the result currently displayed.
///
/// A check borrows the session mutably, so a session runs one check at a time. A successful
/// check replaces the current result while a failed one leaves it untouched.
pub struct Session {
    client: DiagnosisClient,

    current: Option<DiagnosisResult>,
}

impl Session {
    pub fn new(client: DiagnosisClient) -> Self {
        Self { client, current: None }
    }

    /// Result of the last successful check
    pub fn current(&self) -> Option<&DiagnosisResult> {
        self.current.as_ref()
    }

    pub async fn check(&mut self, input: &str) -> Result<&DiagnosisResult, Error> {
        let result = self.client.check(input).await?;

        Ok(self.current.insert(result))
    }
}
