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

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod boot {
    use core::{fmt::Write, panic::PanicInfo};

    use limine::{
        BaseRevision,
        request::{HhdmRequest, MemoryMapRequest, RequestsEndMarker, RequestsStartMarker},
    };
    use vgacon::{
        info,
        memory::{BootInfoFrameAllocator, map_text_buffer},
        meta::print_welcome,
        output::{CONSOLE, vga_init},
        serial_println,
    };
    use x86_64::VirtAddr;

    #[unsafe(no_mangle)]
    unsafe extern "C" fn kernel_main() -> ! {
        assert!(BASE_REVISION.is_supported());

        let physical_memory_offset = HHDM_REQUEST
            .get_response()
            .expect("Hhdm request failed")
            .offset();
        let memory_regions = MEMORY_MAP_REQUEST
            .get_response()
            .expect("memory map request failed")
            .entries();

        let mut frame_allocator = unsafe { BootInfoFrameAllocator::init(memory_regions) };
        let text_buffer = unsafe {
            map_text_buffer(VirtAddr::new(physical_memory_offset), &mut frame_allocator)
                .expect("failed to map the VGA text buffer")
        };

        unsafe {
            vga_init(text_buffer);
        }

        print_welcome();
        info!("console up, halting");
        hcf();
    }

    #[used]
    #[unsafe(link_section = ".requests")]
    pub static BASE_REVISION: BaseRevision = BaseRevision::new();

    #[used]
    #[unsafe(link_section = ".requests")]
    static HHDM_REQUEST: HhdmRequest = HhdmRequest::new();

    #[used]
    #[unsafe(link_section = ".requests")]
    static MEMORY_MAP_REQUEST: MemoryMapRequest = MemoryMapRequest::new();

    #[used]
    #[unsafe(link_section = ".requests_start_marker")]
    static _START_MARKER: RequestsStartMarker = RequestsStartMarker::new();
    #[used]
    #[unsafe(link_section = ".requests_end_marker")]
    static _END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("{}", info);
        // the panic may have happened with the console locked
        if let Some(mut lock) = CONSOLE.try_lock() {
            if let Some(console) = lock.as_mut() {
                let _ = writeln!(console, "{}", info);
            }
        }
        hcf();
    }

    fn hcf() -> ! {
        loop {
            x86_64::instructions::hlt();
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("vgacon is a freestanding kernel, build it for x86_64-unknown-none");
}
