//! Token identifiers and the reserved padding value

/// A token type id
pub type Token = u32;

/// Marker written in place of unselected tokens when length is preserved.
///
/// Callers must never use it as a real type id.
pub const PAD: Token = 0;

/// One tokenized text
pub type Document = Vec<Token>;
