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

use core::{ffi::CStr, fmt::Write, ptr};

use crate::output::cell::{self, Cell, DEFAULT_COLOR, Framebuffer, HEIGHT, NULL_CHAR, WIDTH};

/// Cursor and color state over a text-mode framebuffer.
///
/// The framebuffer is borrowed for the lifetime of the console, so nothing else can write to it
/// while the console exists. There is no scrolling: running off the bottom row wraps the cursor
/// back to row 0 and later output overwrites whatever is there.
pub struct Console<'a> {
    buffer: &'a mut Framebuffer,
    row: usize,
    column: usize,
    color: u8,
}

impl<'a> Console<'a> {
    /// Takes ownership of `buffer` and initializes it.
    ///
    /// The buffer may hold leftovers from firmware or an earlier boot stage, so it is always
    /// repainted before the console is handed out.
    pub fn new(buffer: &'a mut Framebuffer) -> Self {
        let mut console = Self {
            buffer,
            row: 0,
            column: 0,
            color: DEFAULT_COLOR,
        };
        console.init();
        console
    }

    /// Homes the cursor, restores the default color and blanks every cell.
    pub fn init(&mut self) {
        self.row = 0;
        self.column = 0;
        self.color = DEFAULT_COLOR;

        let blank = cell::pack(NULL_CHAR, self.color);
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                self.store(row, column, blank);
            }
        }
    }

    /// Places one byte at the cursor and advances it.
    ///
    /// `b'\n'` only moves the cursor to the start of the next row. Any other byte is drawn with the
    /// active color; control bytes included, since the hardware just looks up a glyph.
    pub fn put_char(&mut self, c: u8) {
        if c == b'\n' {
            self.new_line();
            return;
        }

        self.store(self.row, self.column, cell::pack(c, self.color));
        self.column += 1;
        if self.column == WIDTH {
            self.new_line();
        }
    }

    /// Places every byte of `bytes` in order.
    pub fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }

    /// Writes a NUL-terminated string, excluding the terminator.
    pub fn write_cstr(&mut self, string: &CStr) {
        self.write(string.to_bytes());
    }

    /// Writes the NUL-terminated string starting at `string`.
    ///
    /// # Safety
    ///
    /// `string` must point to a readable byte sequence that contains a zero byte. The length is
    /// found by scanning for that byte, so an unterminated sequence reads out of bounds.
    pub unsafe fn write_cstr_ptr(&mut self, string: *const u8) {
        let string = unsafe { CStr::from_ptr(string.cast()) };
        self.write_cstr(string);
    }

    /// Current `(row, column)` of the cursor.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Attribute byte used for new characters.
    pub fn color(&self) -> u8 {
        self.color
    }

    /// Reads back the cell at `(row, column)`.
    ///
    /// Panics if the position is outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        assert!(row < HEIGHT && column < WIDTH, "cell ({row}, {column}) is outside the grid");
        unsafe { ptr::read_volatile(&self.buffer[cell::index(row, column, WIDTH)]) }
    }

    /// Column back to 0, row forward by one, wrapping to the top row.
    fn new_line(&mut self) {
        self.column = 0;
        self.row += 1;
        if self.row == HEIGHT {
            self.row = 0;
        }
    }

    fn store(&mut self, row: usize, column: usize, value: Cell) {
        let slot = &mut self.buffer[cell::index(row, column, WIDTH)];
        // the buffer is scanned by the display, the store must not be elided
        unsafe { ptr::write_volatile(slot, value) };
    }
}

impl Write for Console<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write(s.as_bytes());
        Ok(())
    }
}
