//! StringReference Command Set (10)

use super::*;

/// Returns the characters contained in the string.
#[jdwp_command(String, 10, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Value {
    /// The String object ID
    string_object: StringID,
}
