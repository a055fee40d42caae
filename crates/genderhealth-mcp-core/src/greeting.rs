//! The greeting returned by the `hello` tool.

/// Build the greeting for `name`.
///
/// `name` is inserted verbatim: no trimming, no escaping, and the empty
/// string is accepted.
pub fn greeting(name: &str) -> String {
    format!("Xin chào, {name}! Đây là MCP server của GenderHealth.")
}
