use pending_diagnosis::{DiagnosisResult, PendingCategory};
use serde::Serialize;

const LABEL_WIDTH: usize = 15;

/// Entry of the JSON report, either a diagnosis or the reason it could not be made
#[derive(Serialize)]
#[serde(untagged)]
pub enum CheckReport<'a> {
    Diagnosis(&'a DiagnosisResult),
    Failure { address: String, error: String },
}

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<width$}{}\n", label, value, width = LABEL_WIDTH)
}

// Render a diagnosis as a card
//
// Example:
// _____________________________________________________________
// Address        cfxtest:aajg4wt2mbmbb44sp6szd783ry0jtad5bemzfdf83g
// Hex            0x106d49f8505410eb4e671d51f7d96d2c87807b09
// Type           user
// Network        testnet
// Nonce          5
// Balance        2 CFX
// Pending        2
// Status         FutureNonce: Use a skipped nonce
// Remedy         use the correct nonce to send the transaction
// First pending  nonce 7, hash 0x4f5b5bbf......8bd16a5d3e
//                https://testnet.confluxscan.io/transaction/0x4f5b...
// Checked at     2026-10-16 10:00:00 UTC
// _____________________________________________________________
//
pub fn render_result(result: &DiagnosisResult) -> String {
    let mut card = String::new();
    card.push_str(&format!("{}\n", "_".repeat(61)));
    card.push_str(&line("Address", &result.address));
    card.push_str(&line("Hex", result.address.to_hex()));
    card.push_str(&line("Type", result.address.address_type().as_str()));
    card.push_str(&line("Network", result.network.as_str()));
    card.push_str(&line("Nonce", result.nonce));
    card.push_str(&line("Balance", format!("{} CFX", result.balance)));
    card.push_str(&line("Pending", result.pending_count));

    match result.category {
        PendingCategory::NoPending => card.push_str(&line("Status", result.category.description())),
        category => card.push_str(&line("Status", format!("{}: {}", category.as_str(), category.description()))),
    }

    if let Some(remedy) = &result.remedy {
        card.push_str(&line("Remedy", remedy));
    }

    if let Some(first) = &result.first_pending {
        card.push_str(&line("First pending", format!("nonce {}, hash {}", first.nonce, first.hash.display)));
        card.push_str(&line("", &first.hash.url));
    }

    card.push_str(&line("Checked at", result.checked_at.format("%Y-%m-%d %H:%M:%S UTC")));
    card.push_str(&"_".repeat(61));

    card
}

pub fn render_failure(address: &str, error: &impl std::fmt::Display) -> String {
    format!("{}\n{}{}", "_".repeat(61), line("Address", address), line("Failed", error)).trim_end().to_string()
}
