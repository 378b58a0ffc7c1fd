//! # Shared Display Helpers
//!
//! Formatting used by list screens for wallet addresses and transaction hashes.
//!
//! ```rust
//! use shared::utils::short_address;
//!
//! assert_eq!(short_address("0x52908400098527886E0F7030069857D2E4169EE7"), "0x5290...9EE7");
//! ```

/// Shorten an address to its first `prefix_len` and last `suffix_len` characters.
///
/// A leading `0x` is kept and not counted towards the prefix. Addresses too
/// short to shorten meaningfully are returned unchanged.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let (hex_prefix, body) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    let chars: Vec<char> = body.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let head: String = chars[..prefix_len].iter().collect();
    let tail: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{hex_prefix}{head}...{tail}")
}

/// [`format_address`] with four characters on each side.
pub fn short_address(address: &str) -> String {
    format_address(address, 4, 4)
}
