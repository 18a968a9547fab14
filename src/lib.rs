//! A growable contiguous vector with slack-based capacity growth.
//!
//! [`KVec`] keeps its elements in a single raw allocation. Only the first
//! `len()` slots hold live values; the remaining capacity stays
//! uninitialized. When an append needs room the buffer is relocated to
//! `len + len / 2 + 1` slots.
//!
//! Every operation which may allocate or address an element by position is
//! offered in two forms: a `try_*` method returning a [`StorageError`] (or an
//! [`UpdateError`] carrying back the rejected value), and a plain method which
//! panics on the same conditions.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

extern crate alloc as alloc_crate;

#[macro_use]
mod trace;

pub mod capacity;

pub(crate) mod error;

pub mod storage;

pub mod vec;

pub use self::{
    error::{StorageError, UpdateError},
    vec::{swap, IntoIter, KVec},
};
