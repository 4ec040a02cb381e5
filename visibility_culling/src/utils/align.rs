/// Buffer offset alignment helpers.
///
/// Per-actor and per-viewport parameter blocks are packed into shared
/// buffers and bound with an offset, which must be 256-byte aligned.

/// Required alignment (in bytes) of any buffer offset used for binding
pub const BUFFER_OFFSET_ALIGN: usize = 256;

/// Round `value` up to the next multiple of `ALIGN`.
///
/// `ALIGN` must be 0 or a power of two; this is checked at compile time.
/// `ALIGN == 0` returns `value` unchanged.
///
/// # Example
///
/// ```
/// use visibility_culling::utils::{align, BUFFER_OFFSET_ALIGN};
///
/// assert_eq!(align::<BUFFER_OFFSET_ALIGN>(300), 512);
/// assert_eq!(align::<16>(32), 32);
/// ```
pub const fn align<const ALIGN: usize>(value: usize) -> usize {
    const {
        assert!(
            ALIGN == 0 || ALIGN.is_power_of_two(),
            "align must be 0 or a power of two"
        );
    }

    let mask = ALIGN.wrapping_sub(1);
    if ALIGN == 0 || value & mask == 0 {
        value
    } else {
        (value + ALIGN) & !mask
    }
}

#[cfg(test)]
#[path = "align_tests.rs"]
mod tests;
