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

use core::fmt;

#[cfg(not(test))]
use conquer_once::spin::Lazy;
#[cfg(not(test))]
use spin::Mutex;
#[cfg(not(test))]
use uart_16550::SerialPort;

/// COM1, the sink for the logging macros.
#[cfg(not(test))]
pub static SERIAL1: Lazy<Mutex<SerialPort>> = Lazy::new(|| {
    let mut serial_port = unsafe { SerialPort::new(0x3F8) };
    serial_port.init();
    Mutex::new(serial_port)
});

#[doc(hidden)]
#[cfg(not(test))]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;
    let _ = SERIAL1.lock().write_fmt(args);
}

/// Host test builds have no port I/O privileges.
#[doc(hidden)]
#[cfg(test)]
pub fn _print(args: fmt::Arguments) {
    let _ = args;
}

/// Global print! macro that writes to the serial interface in QEMU.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {{
        $crate::serial::_print(format_args!($($arg)*));
    }};
}

/// Global println! macro that writes to the serial interface in QEMU.
#[macro_export]
macro_rules! serial_println {
    () => {
        $crate::serial_print!("\n");
    };
    ($($arg:tt)*) => {
        $crate::serial_print!("{}\n", format_args!($($arg)*));
    };
}
