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

//! Mapping of the VGA text buffer.
//!
//! Limine's direct map only covers some memory map entry types, and the legacy VGA hole at
//! `0xa0000-0xfffff` is not one of them. The text buffer page is therefore mapped explicitly at
//! [`TEXT_BUFFER_WINDOW`] in the active page tables.

#[cfg(test)]
mod tests;

use limine::memory_map::{Entry, EntryType};
use x86_64::{
    PhysAddr, VirtAddr,
    structures::paging::{
        FrameAllocator, Mapper, OffsetPageTable, Page, PageTable, PageTableFlags, PhysFrame,
        Size4KiB, mapper::MapToError,
    },
};

use crate::{debug, output::vga::VGA_TEXT_BUFFER};

/// Virtual page the text buffer is mapped at. Lies between the direct map and the kernel image.
pub const TEXT_BUFFER_WINDOW: u64 = 0xffff_fe00_0000_0000;

const FRAME_SIZE: u64 = 4096;

/// Hands out the usable frames of the bootloader's memory map, in order. Frames are never freed.
pub struct BootInfoFrameAllocator<'a> {
    memory_map: &'a [&'a Entry],
    next: usize,
}

impl<'a> BootInfoFrameAllocator<'a> {
    /// Creates an allocator over `memory_map`.
    ///
    /// # Safety
    ///
    /// Every `USABLE` entry must really be unused, and reachable through the direct map.
    pub unsafe fn init(memory_map: &'a [&'a Entry]) -> Self {
        Self {
            memory_map,
            next: 0,
        }
    }

    fn usable_frames(&self) -> impl Iterator<Item = PhysFrame> + '_ {
        self.memory_map
            .iter()
            .filter(|region| region.entry_type == EntryType::USABLE)
            .map(|region| region.base..(region.base + region.length))
            .flat_map(|region_range| region_range.step_by(FRAME_SIZE as usize))
            .map(|base| PhysFrame::containing_address(PhysAddr::new(base)))
    }
}

unsafe impl FrameAllocator<Size4KiB> for BootInfoFrameAllocator<'_> {
    fn allocate_frame(&mut self) -> Option<PhysFrame> {
        let frame = self.usable_frames().nth(self.next);
        if frame.is_some() {
            self.next += 1;
        }
        frame
    }
}

/// Maps the text buffer page at [`TEXT_BUFFER_WINDOW`] and returns the address of the first cell.
///
/// Page table frames for the new mapping come from `frame_allocator`.
///
/// # Safety
///
/// `hhdm_offset` must be the base of a direct map covering the active page tables and the frames
/// `frame_allocator` returns. May only be called once.
pub unsafe fn map_text_buffer(
    hhdm_offset: VirtAddr,
    frame_allocator: &mut impl FrameAllocator<Size4KiB>,
) -> Result<VirtAddr, MapToError<Size4KiB>> {
    let level_4_table = unsafe { active_level_4_table(hhdm_offset) };
    let mut mapper = unsafe { OffsetPageTable::new(level_4_table, hhdm_offset) };

    let physical = PhysAddr::new(VGA_TEXT_BUFFER);
    let frame = PhysFrame::<Size4KiB>::containing_address(physical);
    let page = Page::<Size4KiB>::containing_address(VirtAddr::new(TEXT_BUFFER_WINDOW));
    let flags = PageTableFlags::PRESENT | PageTableFlags::WRITABLE | PageTableFlags::NO_CACHE;

    unsafe { mapper.map_to(page, frame, flags, frame_allocator)?.flush() };
    debug!("mapped {:?} at {:?}", frame, page);

    Ok(page.start_address() + (physical - frame.start_address()))
}

/// The level 4 table currently in CR3, through the direct map.
///
/// # Safety
/// The direct map must cover the table, and no other `&mut` to it may exist.
unsafe fn active_level_4_table(hhdm_offset: VirtAddr) -> &'static mut PageTable {
    let (level_4_table_frame, _) = x86_64::registers::control::Cr3::read();
    let phys = level_4_table_frame.start_address();
    let virt = hhdm_offset + phys.as_u64();
    unsafe { &mut *virt.as_mut_ptr::<PageTable>() }
}
