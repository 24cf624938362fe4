// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! # Rudiments FFI
//!
//! **C-Compatible Bindings for the Rudiments Utility Library.**
//!
//! This crate exposes the functions of `rudiments-core` through a stable C
//! ABI so they can be called from C, C++, Go (cgo), Java (JNI/Panama) or
//! Python (ctypes/cffi).
//!
//! ## Core Design Principles
//!
//! 1.  **Plain Values**: Scalars cross the boundary by value. Sequences are
//!     `(pointer, length)` pairs and are only borrowed for the duration of
//!     the call.
//! 2.  **Status Codes**: Fallible functions return a `RudimentsStatus` and
//!     write their result through an out-pointer on success.
//! 3.  **Explicit Lifecycle**: Strings returned by the library must be
//!     released with `rudiments_string_free`.
//! 4.  **Fail-Fast Safety**: Passing `NULL` where data is required, or an
//!     undersized output buffer, results in an immediate process abort
//!     (panic) rather than undefined behavior.

pub mod collection;
pub mod math;
pub mod status;
pub mod text;
