//! Memory layout of vectors and matrices.

use crate::scalar::Scalar;
use bytemuck::Zeroable;
use std::fmt::Debug;

/// The two memory layouts a vector or matrix can have.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PackingMode {
    /// The value occupies exactly the bytes of its components.
    #[default]
    Packed,
    /// Size and alignment are rounded up to the width of the SIMD register
    /// the value would be loaded into.
    Aligned,
}

/// A compile-time layout tag. Selects the backing storage for every vector
/// dimension.
pub trait Packing: Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    const MODE: PackingMode;

    type Storage1<T: Scalar>: Storage<T, 1>;
    type Storage2<T: Scalar>: Storage<T, 2>;
    type Storage3<T: Scalar>: Storage<T, 3>;
    type Storage4<T: Scalar>: Storage<T, 4>;
}

/// Layout tag for [`PackingMode::Packed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Packed;

/// Layout tag for [`PackingMode::Aligned`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aligned;

/// Backing storage holding exactly `L` components.
pub trait Storage<T, const L: usize>: Copy + Send + Sync + 'static {
    fn from_array(array: [T; L]) -> Self;

    fn as_array(&self) -> &[T; L];

    fn as_array_mut(&mut self) -> &mut [T; L];
}

/// A zero-sized type whose only purpose is to raise the alignment of the
/// type containing it.
pub trait AlignMarker: Copy + Send + Sync + 'static {}

/// An array of `L` components followed by a zero-length array of the
/// alignment marker `A`. The marker takes no space but raises the alignment,
/// and the size is padded to a multiple of it.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct AlignedArray<T, const L: usize, A> {
    array: [T; L],
    _align: [A; 0],
}

macro_rules! define_align_markers {
    ($($name:ident => $align:literal),* $(,)?) => {
        $(
            #[doc = concat!("Zero-sized marker with an alignment of ", stringify!($align), " bytes.")]
            #[repr(align($align))]
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl AlignMarker for $name {}
        )*
    };
}

define_align_markers!(
    Align1 => 1,
    Align2 => 2,
    Align4 => 4,
    Align8 => 8,
    Align16 => 16,
    Align32 => 32,
);

impl<T: Scalar, const L: usize> Storage<T, L> for [T; L] {
    #[inline]
    fn from_array(array: [T; L]) -> Self {
        array
    }

    #[inline]
    fn as_array(&self) -> &[T; L] {
        self
    }

    #[inline]
    fn as_array_mut(&mut self) -> &mut [T; L] {
        self
    }
}

impl<T: Scalar, const L: usize, A: AlignMarker> Storage<T, L> for AlignedArray<T, L, A> {
    #[inline]
    fn from_array(array: [T; L]) -> Self {
        Self { array, _align: [] }
    }

    #[inline]
    fn as_array(&self) -> &[T; L] {
        &self.array
    }

    #[inline]
    fn as_array_mut(&mut self) -> &mut [T; L] {
        &mut self.array
    }
}

// SAFETY: The marker array is zero-sized and the components are `Pod`, so the
// all-zero bit pattern is a valid value. The padding is never read.
unsafe impl<T: Scalar, const L: usize, A: AlignMarker> Zeroable for AlignedArray<T, L, A> {}

impl Packing for Packed {
    const MODE: PackingMode = PackingMode::Packed;

    type Storage1<T: Scalar> = [T; 1];
    type Storage2<T: Scalar> = [T; 2];
    type Storage3<T: Scalar> = [T; 3];
    type Storage4<T: Scalar> = [T; 4];
}

impl Packing for Aligned {
    const MODE: PackingMode = PackingMode::Aligned;

    type Storage1<T: Scalar> = AlignedArray<T, 1, T::Align1>;
    type Storage2<T: Scalar> = AlignedArray<T, 2, T::Align2>;
    type Storage3<T: Scalar> = AlignedArray<T, 3, T::Align3>;
    type Storage4<T: Scalar> = AlignedArray<T, 4, T::Align4>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn packed_storage_has_no_padding() {
        assert_eq!(size_of::<<Packed as Packing>::Storage3<f32>>(), 12);
        assert_eq!(align_of::<<Packed as Packing>::Storage3<f32>>(), 4);
        assert_eq!(size_of::<<Packed as Packing>::Storage2<u8>>(), 2);
    }

    #[test]
    fn aligned_storage_is_rounded_to_simd_width() {
        assert_eq!(size_of::<<Aligned as Packing>::Storage3<f32>>(), 16);
        assert_eq!(align_of::<<Aligned as Packing>::Storage3<f32>>(), 16);
        assert_eq!(size_of::<<Aligned as Packing>::Storage2<f64>>(), 16);
        assert_eq!(size_of::<<Aligned as Packing>::Storage3<f64>>(), 32);
        assert_eq!(align_of::<<Aligned as Packing>::Storage1<i16>>(), 2);
        assert_eq!(size_of::<<Aligned as Packing>::Storage3<u8>>(), 4);
    }

    #[test]
    fn aligned_storage_keeps_components_in_order() {
        let mut storage = <<Aligned as Packing>::Storage4<i32> as Storage<i32, 4>>::from_array([
            1, 2, 3, 4,
        ]);
        storage.as_array_mut()[2] = 7;
        assert_eq!(storage.as_array(), &[1, 2, 7, 4]);
    }

    #[test]
    fn default_mode_is_packed() {
        assert_eq!(PackingMode::default(), PackingMode::Packed);
        assert_eq!(Aligned::MODE, PackingMode::Aligned);
    }
}
