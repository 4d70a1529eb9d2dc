//! DMA channel 3, used for bulk fills
//!
//! Only the fixed-source fill is implemented: the channel repeatedly copies
//! one halfword into a destination range. The CPU is halted while the
//! transfer runs, so the fill has completed when [`fill16`] returns.

const DMA3_SRC: *mut u32 = 0x0400_00D4 as *mut u32;
const DMA3_DST: *mut u32 = 0x0400_00D8 as *mut u32;
const DMA3_CNT: *mut u32 = 0x0400_00DC as *mut u32;

/// Control bits (upper half of DMA3CNT, shifted into place)
pub mod control {
    /// Source address stays fixed
    pub const SRC_FIXED: u32 = 2 << 23;
    /// Transfer 32-bit words instead of halfwords
    pub const WORDS: u32 = 1 << 26;
    /// Start now / transfer in progress
    pub const ENABLE: u32 = 1 << 31;
}

/// Largest transfer count channel 3 accepts
pub const MAX_UNITS: usize = 0x1_0000;

/// Control word for a halfword fill of `count` units
#[inline]
pub const fn fill16_control(count: u16) -> u32 {
    count as u32 | control::SRC_FIXED | control::ENABLE
}

/// Whether channel 3 is still running a transfer
#[inline]
pub fn is_busy() -> bool {
    unsafe { DMA3_CNT.read_volatile() & control::ENABLE != 0 }
}

/// Fill `count` halfwords at `dst` with `value`
///
/// # Panics
///
/// Panics if the channel is already busy or `count` is zero or too large;
/// starting a second transfer would corrupt the first.
///
/// # Safety
///
/// `dst` must be valid for `count` halfword writes.
pub unsafe fn fill16(dst: *mut u16, value: u16, count: usize) {
    assert!(!is_busy(), "DMA3 busy at fill start");
    assert!(count > 0 && count < MAX_UNITS, "DMA3 fill of {count} units");

    let src = value;
    unsafe {
        DMA3_SRC.write_volatile(core::ptr::addr_of!(src) as u32);
        DMA3_DST.write_volatile(dst as u32);
        DMA3_CNT.write_volatile(fill16_control(count as u16));
    }
}
