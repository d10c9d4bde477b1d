use pending_diagnosis::PendingCategory;

use crate::constants::{TRANSACTION_EXPLAIN_URL, TRANSACTION_STAGE_URL, WHY_TX_IS_PENDING_URL};

fn render_reasons() -> String {
    let mut output = String::from("Possible reasons for a pending transaction:\n");
    for category in PendingCategory::ALL {
        if category == PendingCategory::NoPending {
            continue;
        }

        output.push_str(&format!("  {:<14} {}\n", category.as_str(), category.description()));
        if let Some(remedy) = category.remedy() {
            output.push_str(&format!("  {:<14} remedy: {}\n", "", remedy));
        }
    }

    output.push_str("\nLearn more:\n");
    for url in [TRANSACTION_EXPLAIN_URL, TRANSACTION_STAGE_URL, WHY_TX_IS_PENDING_URL] {
        output.push_str(&format!("  {}\n", url));
    }

    output
}

pub fn command_reasons() {
    print!("{}", render_reasons());
}
