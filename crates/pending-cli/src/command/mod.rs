use pending_diagnosis::{Configuration, DiagnosisClient};

use crate::core::Error;

pub mod check;
pub mod endpoints;
pub mod interactive;
pub mod reasons;

fn diagnosis_client(timeout: u64) -> Result<DiagnosisClient, Error> {
    Ok(DiagnosisClient::new(&Configuration::with_timeout(timeout))?)
}
