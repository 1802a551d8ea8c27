//! Platform abstraction layer for the clock source.
//!
//! Public API types talk to the platform through [`PlatformFacade`], which dispatches either
//! to the build target platform or, in unit tests, to a fake or mock platform whose time
//! is controlled by the test.

mod abstractions;
mod facade;
mod fixed_point;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
#[cfg_attr(
    not(all(windows, not(miri))),
    allow(unused_imports, reason = "only the Windows clock scales a tick counter")
)]
pub(crate) use fixed_point::*;

#[cfg(all(unix, not(miri)))]
mod unix;
#[cfg(all(unix, not(miri)))]
pub(crate) use unix::*;

#[cfg(all(windows, not(miri)))]
mod windows;
#[cfg(all(windows, not(miri)))]
pub(crate) use self::windows::*;

// Miri cannot talk to a real OS but Rust std time still works.
#[cfg(any(miri, not(any(unix, windows))))]
mod rust;
#[cfg(any(miri, not(any(unix, windows))))]
pub(crate) use rust::*;

#[cfg(test)]
mod fake;
#[cfg(test)]
pub(crate) use fake::*;
