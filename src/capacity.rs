use core::fmt::{Debug, Display};
use core::ops::{AddAssign, Sub, SubAssign};

use num_traits::{CheckedAdd, Zero};

/// A trait representing an edge capacity (and therefore a flow value), which is always an
/// integer.
pub trait Capacity:
    Copy
    + Sub<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + CheckedAdd
    + Zero
    + Debug
    + Display
    + Default
{
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl Capacity for i32 {}

impl Capacity for i64 {}

impl Capacity for u32 {}

impl Capacity for u64 {}

impl Capacity for usize {}
