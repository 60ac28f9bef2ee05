//! Generation bounds.
//!
//! `Depth` and `Width` wrap unsigned integers, so a negative bound cannot be
//! expressed. Moving one level down saturates at zero instead of going
//! below it.

/// Nesting levels still available to the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Depth(pub u32);

/// Exact number of elements or fields generated per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Width(pub u32);

impl Depth {
    pub const DEFAULT: Depth = Depth(2);

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The bound one level further in.
    pub fn nested(self) -> Depth {
        Depth(self.0.saturating_sub(1))
    }
}

impl Width {
    pub const DEFAULT: Width = Width(2);

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::DEFAULT
    }
}

impl Default for Width {
    fn default() -> Self {
        Width::DEFAULT
    }
}

/// Bounds threaded through every recursive generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenConfig {
    pub depth: Depth,
    pub width: Width,
}

impl GenConfig {
    pub fn new(depth: Depth, width: Width) -> Self {
        Self { depth, width }
    }

    pub fn with_depth(self, depth: u32) -> Self {
        Self { depth: Depth(depth), ..self }
    }

    pub fn with_width(self, width: u32) -> Self {
        Self { width: Width(width), ..self }
    }

    /// Configuration for the children of a collection generated under `self`.
    pub fn nested(self) -> Self {
        Self {
            depth: self.depth.nested(),
            width: self.width,
        }
    }
}
