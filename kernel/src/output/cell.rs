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

//! Encoding of VGA text-mode cells.
//!
//! A cell is a 16-bit value laid out as the display hardware scans it:
//!
//! ```text
//! bit:   15 14 13 12 11 10  9  8 | 7  6  5  4  3  2  1  0
//! field: [ background ][foreground] | [ character code  ]
//! ```

/// Number of columns in the text grid.
pub const WIDTH: usize = 80;
/// Number of rows in the text grid.
pub const HEIGHT: usize = 25;
/// Number of cells in the text grid.
pub const CELLS: usize = WIDTH * HEIGHT;

/// Glyph used to blank the grid.
pub const NULL_CHAR: u8 = 0x00;

/// Attribute the console starts with: light gray on black.
pub const DEFAULT_COLOR: u8 = color_attribute(Color::LightGray as u8, Color::Black as u8);

/// One hardware cell: character in the low byte, attribute in the high byte.
pub type Cell = u16;

/// The whole text grid in row-major order.
pub type Framebuffer = [Cell; CELLS];

/// The 16-entry VGA palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Linear buffer index of `(row, column)` in a grid `width` cells wide.
///
/// No bounds checking is done here; the caller keeps `column < width`.
#[inline]
pub const fn index(row: usize, column: usize, width: usize) -> usize {
    row * width + column
}

/// Packs a character and a color attribute into a cell.
#[inline]
pub const fn pack(character: u8, attribute: u8) -> Cell {
    (character as Cell) | ((attribute as Cell) << 8)
}

/// Splits a cell back into `(character, attribute)`.
#[inline]
pub const fn unpack(cell: Cell) -> (u8, u8) {
    (cell as u8, (cell >> 8) as u8)
}

/// Packs two palette indices into an attribute byte.
///
/// Each index is masked to its low nibble, the same way the attribute register would see it.
#[inline]
pub const fn color_attribute(foreground: u8, background: u8) -> u8 {
    (foreground & 0x0f) | ((background & 0x0f) << 4)
}
