//! ArrayReference Command Set (13)

use super::*;

/// Returns the number of components in a given array.
#[jdwp_command(u32, 13, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Length {
    /// The array object ID
    array_id: ArrayID,
}

/// Returns a range of array components.
///
/// The specified range must be within the bounds of the array.
#[jdwp_command(ArrayRegion, 13, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct GetValues {
    /// The array object ID
    array_id: ArrayID,
    /// The first index to retrieve
    first_index: u32,
    /// The number of components to retrieve
    length: u32,
}

/// Sets a range of array components.
///
/// The specified range must be within the bounds of the array.
///
/// For primitive values, each value's type must match the array component
/// type exactly.
///
/// For object values, there must be a widening reference conversion from
/// the value's type to the array component type and the array component
/// type must be loaded.
#[jdwp_command((), 13, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SetValues<'a, V: JdwpValue> {
    /// The array object ID
    array_id: ArrayID,
    /// The first index to set
    first_index: u32,
    /// Values to set
    values: &'a [V],
}
