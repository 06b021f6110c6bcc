/*
Copyright © 2025 Mako and JayAndJef

This file is part of vgacon.

vgacon is free software: you can redistribute it and/or modify it under the terms of the GNU General
Public License as published by the Free Software Foundation, either version 3 of the License, or (at
your option) any later version.

vgacon is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the
implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public
License for more details.

You should have received a copy of the GNU General Public License along with vgacon. If not, see
<https://www.gnu.org/licenses/>.
*/

//! Boot-time VGA text console.
//!
//! The crate is `no_std`; unit tests run on the host against an in-memory framebuffer.

#![cfg_attr(not(test), no_std)]

pub mod memory;
pub mod meta;
pub mod output;
pub mod serial;
