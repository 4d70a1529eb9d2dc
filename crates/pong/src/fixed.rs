//! Fixed-point math for sub-pixel motion
//!
//! Every position, velocity and acceleration in the game is a [`Fixed`]
//! value so that slow motion (the ball's curve, particle gravity) accumulates
//! without floating-point hardware.

use core::ops::{Add, AddAssign, Mul, Neg, Shr, Sub, SubAssign};

/// Number of fractional bits
pub const FRAC_BITS: u32 = 8;

/// Signed fixed-point number with 8 fractional bits (Q24.8)
///
/// A real value `v` is stored as `round(v * 256)`.
///
/// # Example
/// ```
/// use pong::fixed::Fixed;
///
/// let a = Fixed::from_int(5);     // 5.0
/// let b = Fixed::from_raw(0x180); // 1.5
/// assert_eq!((a + b).to_raw(), 0x680);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
#[repr(transparent)]
pub struct Fixed(i32);

impl Fixed {
    /// Zero value
    pub const ZERO: Fixed = Fixed(0);
    /// One (1.0)
    pub const ONE: Fixed = Fixed(1 << FRAC_BITS);
    /// Smallest positive step (1/256)
    pub const EPSILON: Fixed = Fixed(1);

    /// Create from whole pixels
    #[inline]
    pub const fn from_int(n: i32) -> Self {
        Fixed(n << FRAC_BITS)
    }

    /// Create from raw fixed-point value
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    /// Whole part, rounded toward negative infinity
    ///
    /// This is an arithmetic shift, so `-0.5` becomes `-1`. Edge tests in
    /// the collision engine depend on this: a ball half a pixel past the
    /// left wall is already out.
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// Get raw fixed-point value
    #[inline]
    pub const fn to_raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Absolute value
    #[inline]
    pub const fn abs(self) -> Fixed {
        Fixed(self.0.abs())
    }
}

impl Add for Fixed {
    type Output = Fixed;
    #[inline]
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0 + other.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    #[inline]
    fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0 - other.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, other: Fixed) {
        self.0 += other.0;
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, other: Fixed) {
        self.0 -= other.0;
    }
}

/// Scale by a plain integer
impl Mul<i32> for Fixed {
    type Output = Fixed;
    #[inline]
    fn mul(self, k: i32) -> Fixed {
        Fixed(self.0 * k)
    }
}

/// Divide by a power of two, truncating toward negative infinity
impl Shr<u32> for Fixed {
    type Output = Fixed;
    #[inline]
    fn shr(self, bits: u32) -> Fixed {
        Fixed(self.0 >> bits)
    }
}

/// 2D vector with [`Fixed`] components
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Vec2 {
    pub x: Fixed,
    pub y: Fixed,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: Fixed::ZERO, y: Fixed::ZERO };

    /// Create new vector
    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Vec2 { x, y }
    }

    /// Create from whole-pixel coordinates
    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Vec2 {
            x: Fixed::from_int(x),
            y: Fixed::from_int(y),
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}
