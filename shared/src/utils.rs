//! # Shared Utility Functions
//!
//! Common utility functions used across the indexer core and any frontend.
//!
//! ## Address Formatting
//!
//! Functions for formatting account and contract addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0xd8dA...6045");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The address to format
/// * `prefix_len` - Number of characters to show at the start
/// * `suffix_len` - Number of characters to show at the end
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
/// assert_eq!(format_address(addr, 6, 4), "0xd8dA...6045");
/// assert_eq!(format_address(addr, 4, 4), "0xd8...6045");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Return early if the address is too short to truncate meaningfully.
    // Also guard against individual lengths exceeding the address length to prevent panics.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Safe to slice: hex addresses are ASCII-only, so byte indexing is fine
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address with default 4-character prefix and suffix.
///
/// This is a convenience function that calls [`format_address`] with `prefix_len=4` and `suffix_len=4`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
/// assert_eq!(truncate_address(addr), "0xd8...6045");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}
