/// Render pass subscription bitmask.
///
/// Every pass the renderer runs owns one bit; an actor subscribes to 0..n
/// passes by setting their bits. New passes take unused bits.

use bitflags::bitflags;

bitflags! {
    /// Passes an actor must be considered for
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PassFlags: u8 {
        /// Cubemap reflection capture (one view per probe face)
        const REFLECTION = 1 << 0;
        /// Main camera pass
        const FINAL      = 1 << 1;
        // Bits 2-7 reserved for future passes

        /// Every pass, present and future: all bits of the storage width
        const ALL_PASS   = !0;
    }
}

impl PassFlags {
    /// Passes the renderer currently runs, in execution order
    pub const DEFINED: [PassFlags; 2] = [PassFlags::REFLECTION, PassFlags::FINAL];

    /// Whether an actor with these flags takes part in `pass`.
    pub fn participates_in(self, pass: PassFlags) -> bool {
        self.intersects(pass)
    }
}

#[cfg(test)]
#[path = "pass_flags_tests.rs"]
mod tests;
