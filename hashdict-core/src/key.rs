//! Key requirements shared by both tables

use crate::error::KeyViolation;
use std::borrow::Cow;
use std::hash::Hash;

/// Maximum key length accepted unless a table is configured otherwise
pub const DEFAULT_MAX_KEY_LEN: usize = 255;

/// A key usable in a `ChainingTable` or `ProbingTable`
///
/// `Hash` drives the intrinsic hash source and must agree with `Eq`.
/// `key_bytes` feeds the digest sources, so equal keys must produce equal bytes.
pub trait TableKey: Hash + Eq {
    /// Byte representation hashed by the digest sources
    fn key_bytes(&self) -> Cow<'_, [u8]>;

    /// Length in the units the maximum applies to
    fn key_len(&self) -> usize {
        self.key_bytes().len()
    }

    /// Check the key against the empty and maximum-length rules
    fn validate(&self, max_len: usize) -> Result<(), KeyViolation> {
        let len = self.key_len();
        if len == 0 {
            Err(KeyViolation::Empty)
        } else if len > max_len {
            Err(KeyViolation::TooLong { len, max: max_len })
        } else {
            Ok(())
        }
    }
}

impl TableKey for str {
    fn key_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }

    fn key_len(&self) -> usize {
        self.chars().count()
    }
}

impl TableKey for String {
    fn key_bytes(&self) -> Cow<'_, [u8]> {
        self.as_str().key_bytes()
    }

    fn key_len(&self) -> usize {
        self.as_str().key_len()
    }
}

impl TableKey for [u8] {
    fn key_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl TableKey for Vec<u8> {
    fn key_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: TableKey + ?Sized> TableKey for &T {
    fn key_bytes(&self) -> Cow<'_, [u8]> {
        (**self).key_bytes()
    }

    fn key_len(&self) -> usize {
        (**self).key_len()
    }
}

macro_rules! integer_keys {
    ($($ty:ty),*) => {
        $(
            impl TableKey for $ty {
                fn key_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_string().into_bytes())
                }
            }
        )*
    };
}

integer_keys!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
