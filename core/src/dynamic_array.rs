//! DynamicArray: a growable, index-addressable sequence of `i32`.
//!
//! The array owns a zero-initialized buffer whose length is the capacity.
//! Live elements occupy `buf[..len]`; the tail is spare room for appends.
//!
//! - Growth doubles the capacity (an empty buffer grows to 1 slot)
//! - Clones are deep: the copy gets its own buffer of the same capacity
//! - Capacity never shrinks, except when the array is destroyed

use alloc::{boxed::Box, vec};
use core::fmt;

use crate::Error;

pub struct DynamicArray {
    buf: Box<[i32]>,
    len: usize,
}

static_assertions::assert_impl_all!(DynamicArray: Clone, Send, Sync, fmt::Debug, fmt::Display);
static_assertions::assert_not_impl_any!(DynamicArray: Copy);

impl DynamicArray {
    /// Creates an array of `initial_size` zeros with room for twice as many.
    ///
    /// A size of zero is treated as one, so a fresh array is never empty.
    ///
    /// # Panics
    ///
    /// Panics if twice `initial_size` overflows `usize`.
    pub fn new(initial_size: usize) -> Self {
        let len = if initial_size == 0 {
            tracing::debug!("Requested initial size 0, using 1");
            1
        } else {
            initial_size
        };
        Self {
            buf: zeroed(len.checked_mul(2).expect("capacity overflow")),
            len,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.buf[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.buf[..self.len]
    }

    pub fn front(&self) -> Result<i32, Error> {
        self.as_slice().first().copied().ok_or(Error::EmptyContainer)
    }

    pub fn back(&self) -> Result<i32, Error> {
        self.as_slice().last().copied().ok_or(Error::EmptyContainer)
    }

    pub fn get(&self, index: usize) -> Result<i32, Error> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_range(index, self.len))
    }

    pub fn set(&mut self, index: usize, value: i32) -> Result<(), Error> {
        let len = self.len;
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }

    pub fn push_back(&mut self, value: i32) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting the elements after it one slot to
    /// the right. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: i32) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        if self.len == self.capacity() {
            self.grow();
        }
        self.buf.copy_within(index..self.len, index + 1);
        self.buf[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, closing the gap.
    pub fn pop(&mut self, index: usize) -> Result<i32, Error> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        let value = self.buf[index];
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(value)
    }

    /// Index of the first element equal to `value`.
    pub fn find(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&x| x == value)
    }

    /// Like [`find`](Self::find), but a hit is swapped one slot toward the
    /// front and its new index is returned.
    ///
    /// Repeated lookups of the same value migrate it to index 0.
    pub fn find_with_transposition(&mut self, value: i32) -> Option<usize> {
        let index = self.find(value)?;
        if index == 0 {
            return Some(0);
        }
        self.buf.swap(index, index - 1);
        Some(index - 1)
    }

    /// Moves the last element to the front.
    pub fn right_rotate_one(&mut self) {
        let len = self.len;
        if len <= 1 {
            return;
        }
        let last = self.buf[len - 1];
        self.buf.copy_within(0..len - 1, 1);
        self.buf[0] = last;
    }

    /// Rotates right by `times` positions in a single pass, using three
    /// reversals instead of `times` single-step rotations.
    pub fn right_rotate(&mut self, times: usize) {
        if times == 0 || self.len <= 1 {
            return;
        }
        let times = times % self.len;
        let elems = self.as_mut_slice();
        elems.reverse();
        let (head, tail) = elems.split_at_mut(times);
        head.reverse();
        tail.reverse();
    }

    /// Moves the first element to the back.
    pub fn left_rotate_one(&mut self) {
        let len = self.len;
        if len <= 1 {
            return;
        }
        let first = self.buf[0];
        self.buf.copy_within(1..len, 0);
        self.buf[len - 1] = first;
    }

    /// Releases the buffer, leaving an empty array with no capacity.
    ///
    /// Calling it again is harmless. A destroyed array is still usable: the
    /// next append grows it to a single slot.
    pub fn destroy(&mut self) {
        if self.capacity() > 0 {
            tracing::debug!(capacity = self.capacity(), "Releasing array buffer");
        }
        self.buf = Box::default();
        self.len = 0;
    }

    /// Writes the elements to stdout, space separated, followed by a newline.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::println!("{self}");
    }

    #[cold]
    fn grow(&mut self) {
        debug_assert_eq!(self.len, self.capacity());
        let new_cap = self
            .capacity()
            .checked_mul(2)
            .expect("capacity overflow")
            .max(1);
        tracing::trace!(from = self.capacity(), to = new_cap, "Growing array");

        let mut new_buf = zeroed(new_cap);
        new_buf[..self.len].copy_from_slice(self.as_slice());
        self.buf = new_buf;
    }
}

fn zeroed(capacity: usize) -> Box<[i32]> {
    vec![0; capacity].into_boxed_slice()
}

impl Clone for DynamicArray {
    fn clone(&self) -> Self {
        let mut buf = zeroed(self.capacity());
        buf[..self.len].copy_from_slice(self.as_slice());
        Self { buf, len: self.len }
    }

    fn clone_from(&mut self, source: &Self) {
        // The old buffer is dropped before the copy is allocated.
        self.buf = Box::default();
        self.buf = zeroed(source.capacity());
        self.buf[..source.len].copy_from_slice(source.as_slice());
        self.len = source.len;
    }
}

/// Two arrays are equal when their live elements are; capacity is ignored.
impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynamicArray {}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elems = self.as_slice().iter();
        if let Some(first) = elems.next() {
            write!(f, "{first}")?;
            for elem in elems {
                write!(f, " {elem}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dynamic_array_test.rs"]
mod dynamic_array_test;
