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

//! The kernel's console instance.
//!
//! Everything else in the kernel writes text through the functions here (or the `print!` macros
//! built on them) and never touches the framebuffer directly. All of them quietly do nothing until
//! a framebuffer has been installed.

use core::ffi::CStr;

use spin::Mutex;
use x86_64::VirtAddr;

use super::{cell::Framebuffer, console::Console};
use crate::info;

/// Physical address of the color text-mode buffer.
pub const VGA_TEXT_BUFFER: u64 = 0xb8000;

pub static CONSOLE: Mutex<Option<Console<'static>>> = Mutex::new(None);

/// Installs the console over the hardware text buffer mapped at `text_buffer`.
///
/// # Safety
///
/// `text_buffer` must be a writable, uncached mapping of physical [`VGA_TEXT_BUFFER`] covering a
/// whole [`Framebuffer`], such as the one [`crate::memory::map_text_buffer`] returns, and nothing
/// else may reference that memory afterwards. Output only shows up if the display adapter is in
/// 80x25 text mode.
pub unsafe fn vga_init(text_buffer: VirtAddr) {
    let framebuffer = unsafe { &mut *text_buffer.as_mut_ptr::<Framebuffer>() };
    install(framebuffer);
}

/// Builds a console over `framebuffer` and makes it the kernel console, replacing any previous one.
pub fn install(framebuffer: &'static mut Framebuffer) {
    let address = framebuffer.as_ptr() as usize;
    *CONSOLE.lock() = Some(Console::new(framebuffer));

    info!("vga console initialized at {:#x}", address);
}

/// Repaints the screen and homes the cursor.
pub fn init() {
    if let Some(console) = CONSOLE.lock().as_mut() {
        console.init();
    }
}

pub fn put_char(c: u8) {
    if let Some(console) = CONSOLE.lock().as_mut() {
        console.put_char(c);
    }
}

pub fn write(bytes: &[u8]) {
    if let Some(console) = CONSOLE.lock().as_mut() {
        console.write(bytes);
    }
}

pub fn write_cstr(string: &CStr) {
    if let Some(console) = CONSOLE.lock().as_mut() {
        console.write_cstr(string);
    }
}
