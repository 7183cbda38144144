//! Selection options

use crate::{
    error::{CoreError, Result},
    window::Window,
};

/// What happens to tokens covered by a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Keep matched tokens, drop everything else
    #[default]
    Keep,
    /// Drop matched tokens, keep everything else
    Remove,
}

impl Mode {
    /// Host encoding of [`Mode::Keep`]
    pub const KEEP_CODE: i32 = 1;
    /// Host encoding of [`Mode::Remove`]
    pub const REMOVE_CODE: i32 = 2;

    /// Decode the conventional integer encoding
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            Self::KEEP_CODE => Ok(Mode::Keep),
            Self::REMOVE_CODE => Ok(Mode::Remove),
            _ => Err(CoreError::InvalidMode { code }),
        }
    }

    /// Integer encoding of this mode
    pub fn code(self) -> i32 {
        match self {
            Mode::Keep => Self::KEEP_CODE,
            Mode::Remove => Self::REMOVE_CODE,
        }
    }

    /// Mode name as used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Keep => "keep",
            Mode::Remove => "remove",
        }
    }
}

impl TryFrom<i32> for Mode {
    type Error = CoreError;

    fn try_from(code: i32) -> Result<Self> {
        Mode::from_code(code)
    }
}

/// What happens to unselected positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaddingPolicy {
    /// Overwrite with [`PAD`](crate::PAD), length is preserved
    Pad,
    /// Drop them, the document shrinks
    #[default]
    Compact,
}

impl PaddingPolicy {
    /// Whether length is preserved
    pub fn is_padding(self) -> bool {
        matches!(self, PaddingPolicy::Pad)
    }
}

impl From<bool> for PaddingPolicy {
    fn from(padding: bool) -> Self {
        if padding {
            PaddingPolicy::Pad
        } else {
            PaddingPolicy::Compact
        }
    }
}

/// Options for one selection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectOptions {
    /// Keep or remove matches
    pub mode: Mode,
    /// Pad or compact unselected positions
    pub padding: PaddingPolicy,
    /// Context around each match
    pub window: Window,
}

impl SelectOptions {
    /// Exact matches, compacted output
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the padding policy
    pub fn with_padding(mut self, padding: impl Into<PaddingPolicy>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the context window
    pub fn with_window(mut self, window: impl Into<Window>) -> Self {
        self.window = window.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_codes() {
        assert_eq!(Mode::from_code(1).unwrap(), Mode::Keep);
        assert_eq!(Mode::try_from(2).unwrap(), Mode::Remove);
        assert_eq!(Mode::Keep.code(), 1);
        assert_eq!(Mode::Remove.code(), 2);
    }

    #[test]
    fn test_unknown_mode_code_is_rejected() {
        for code in [0, 3, -1, i32::MAX] {
            assert_eq!(Mode::from_code(code), Err(CoreError::InvalidMode { code }));
        }
    }

    #[test]
    fn test_padding_from_bool() {
        assert_eq!(PaddingPolicy::from(true), PaddingPolicy::Pad);
        assert_eq!(PaddingPolicy::from(false), PaddingPolicy::Compact);
        assert!(PaddingPolicy::Pad.is_padding());
    }

    #[test]
    fn test_options_builder() {
        let options = SelectOptions::new(Mode::Remove)
            .with_padding(true)
            .with_window(Window::new(1, 2));

        assert_eq!(options.mode, Mode::Remove);
        assert_eq!(options.padding, PaddingPolicy::Pad);
        assert_eq!(options.window, Window::new(1, 2));
    }
}
