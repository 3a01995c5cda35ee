/// Numeric conversion helpers.
///
/// Conversions between script integers (`i64`) and host positions and
/// lengths (`usize`) that never wrap silently.
pub mod num;
