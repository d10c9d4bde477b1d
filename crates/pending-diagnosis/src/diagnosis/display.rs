use pending_conflux::Network;
use serde::Serialize;

const VISIBLE_CHARS: usize = 10;
const ELLIPSIS: &str = "......";

/// Shorten a transaction hash to its first and last ten characters. Hashes shorter than
/// twenty characters are returned unchanged.
pub fn truncate_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() < 2 * VISIBLE_CHARS {
        return hash.to_string();
    }

    let head: String = chars[..VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_CHARS..].iter().collect();

    format!("{}{}{}", head, ELLIPSIS, tail)
}

/// Transaction hash along with its shortened form and explorer link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashLink {
    pub hash: String,
    pub display: String,
    pub url: String,
}

impl HashLink {
    pub fn new(network: Network, hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            display: truncate_hash(hash),
            url: network.transaction_url(hash),
        }
    }
}
