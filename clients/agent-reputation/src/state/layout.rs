//! Fixed-offset little-endian field reader.
//!
//! A record layout is a set of [`Field`] constants, each naming its offset and
//! (through its value type) its width. Decoders read through the same table
//! the layout tests check, so an offset change is made in exactly one place.

use std::marker::PhantomData;

use anchor_lang::prelude::Pubkey;

use crate::errors::{ReputationError, Result};

/// Width of the Anchor account discriminator that prefixes every record.
pub const DISCRIMINATOR_LEN: usize = 8;

/// A value with a fixed-width little-endian encoding.
pub trait LayoutValue: Sized {
    const WIDTH: usize;

    /// Decode from exactly `WIDTH` bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

impl LayoutValue for u8 {
    const WIDTH: usize = 1;

    fn from_le_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl LayoutValue for u64 {
    const WIDTH: usize = 8;

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        u64::from_le_bytes(buf)
    }
}

impl LayoutValue for [u8; DISCRIMINATOR_LEN] {
    const WIDTH: usize = DISCRIMINATOR_LEN;

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; DISCRIMINATOR_LEN];
        buf.copy_from_slice(bytes);
        buf
    }
}

impl LayoutValue for Pubkey {
    const WIDTH: usize = 32;

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(bytes);
        Pubkey::new_from_array(buf)
    }
}

/// One entry of a layout table.
pub struct Field<T> {
    pub name: &'static str,
    pub offset: usize,
    _value: PhantomData<fn() -> T>,
}

impl<T: LayoutValue> Field<T> {
    pub const fn new(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            _value: PhantomData,
        }
    }

    pub const fn width(&self) -> usize {
        T::WIDTH
    }

    /// First byte past this field.
    pub const fn end(&self) -> usize {
        self.offset + T::WIDTH
    }

    pub fn read(&self, data: &[u8]) -> Result<T> {
        data.get(self.offset..self.end())
            .map(T::from_le_slice)
            .ok_or(ReputationError::LayoutTooShort {
                len: data.len(),
                min: self.end(),
            })
    }
}

/// Fail with `LayoutTooShort` unless `data` covers `min` bytes.
pub fn require_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(ReputationError::LayoutTooShort {
            len: data.len(),
            min,
        });
    }
    Ok(())
}
