pub mod cell;
pub mod console;
pub mod macros;
pub mod vga;


pub use cell::{Cell, Color, Framebuffer};
pub use console::Console;
pub use vga::{CONSOLE, vga_init};
