//! Big-endian encoding of the fixed-size values in a name table.

/// A value stored in the table as a fixed number of big-endian bytes.
///
/// Implemented for the integer widths the format uses and for [`NameId`](crate::NameId).
/// Code outside this crate normally reaches these through [`BigEndian`].
pub trait Scalar: Sized {
    /// The bytes as they appear in the table.
    type Raw: sealed::BeByteArray;

    /// Decode from big-endian bytes.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode to big-endian bytes.
    fn to_raw(self) -> Self::Raw;

    /// Decode from a slice, which must be exactly `RAW_BYTE_LEN` long.
    fn read(slice: &[u8]) -> Option<Self> {
        sealed::BeByteArray::from_slice(slice).map(Self::from_raw)
    }
}

/// A type with a known encoded size.
pub trait FixedSize: Sized {
    /// The number of bytes this type occupies in the table.
    ///
    /// ```
    /// # use name_types::*;
    /// assert_eq!(std::mem::size_of::<u16>(), u16::RAW_BYTE_LEN);
    /// assert_eq!(NameId::RAW_BYTE_LEN, 2);
    /// ```
    const RAW_BYTE_LEN: usize;
}

pub(crate) mod sealed {
    /// A byte array of any length.
    #[cfg(not(feature = "bytemuck"))]
    pub trait BeByteArray: Copy + AsRef<[u8]> {
        /// `None` unless `slice.len()` equals the array length.
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    #[cfg(feature = "bytemuck")]
    pub trait BeByteArray:
        Copy + AsRef<[u8]> + bytemuck::AnyBitPattern + bytemuck::Zeroable
    {
        /// `None` unless `slice.len()` equals the array length.
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    impl<const N: usize> BeByteArray for [u8; N] {
        fn from_slice(slice: &[u8]) -> Option<Self> {
            slice.try_into().ok()
        }
    }
}

/// The encoded bytes of a [`Scalar`], as they sit in the table.
///
/// Record structs are made of these so they can be viewed in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BigEndian<T: Scalar>(pub(crate) T::Raw);

// SAFETY: the only field is `T::Raw`, which is always a `[u8; N]`.
#[cfg(feature = "bytemuck")]
unsafe impl<T> bytemuck::Zeroable for BigEndian<T> where T: Scalar + Copy {}
#[cfg(feature = "bytemuck")]
unsafe impl<T> bytemuck::AnyBitPattern for BigEndian<T> where T: Scalar + Copy + 'static {}

impl<T: Scalar> BigEndian<T> {
    /// `None` if the slice is not exactly `T::RAW_BYTE_LEN` long.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        sealed::BeByteArray::from_slice(slice).map(Self)
    }

    /// Decode the value.
    #[inline(always)]
    pub fn get(&self) -> T {
        T::from_raw(self.0)
    }

    pub fn be_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl<T: Scalar> From<T> for BigEndian<T> {
    #[inline]
    fn from(val: T) -> Self {
        BigEndian(val.to_raw())
    }
}

impl<T: Scalar> FixedSize for T {
    const RAW_BYTE_LEN: usize = std::mem::size_of::<T::Raw>();
}

impl<T: Scalar> FixedSize for BigEndian<T> {
    const RAW_BYTE_LEN: usize = T::RAW_BYTE_LEN;
}

/// Implements [`Scalar`] for a newtype over a scalar.
#[macro_export]
macro_rules! newtype_scalar {
    ($name:ident, $raw:ty) => {
        impl $crate::raw::Scalar for $name {
            type Raw = $raw;

            fn to_raw(self) -> $raw {
                $crate::raw::Scalar::to_raw(self.0)
            }

            #[inline(always)]
            fn from_raw(raw: $raw) -> Self {
                Self($crate::raw::Scalar::from_raw(raw))
            }
        }
    };
}

macro_rules! int_scalar {
    ($($ty:ty),*) => {
        $(
            impl crate::raw::Scalar for $ty {
                type Raw = [u8; std::mem::size_of::<$ty>()];

                fn to_raw(self) -> Self::Raw {
                    self.to_be_bytes()
                }

                #[inline(always)]
                fn from_raw(raw: Self::Raw) -> $ty {
                    Self::from_be_bytes(raw)
                }
            }
        )*
    };
}

int_scalar!(u8, u16, u32);

impl<T: std::fmt::Debug + Scalar + Copy> std::fmt::Debug for BigEndian<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.get().fmt(f)
    }
}
