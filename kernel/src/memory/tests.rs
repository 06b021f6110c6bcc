use limine::memory_map::{Entry, EntryType};
use x86_64::{
    PhysAddr, VirtAddr,
    structures::paging::{FrameAllocator, PhysFrame},
};

use super::{BootInfoFrameAllocator, TEXT_BUFFER_WINDOW};
use crate::output::{Framebuffer, vga::VGA_TEXT_BUFFER};

fn entry(base: u64, length: u64, entry_type: EntryType) -> Entry {
    Entry {
        base,
        length,
        entry_type,
    }
}

fn frame(base: u64) -> PhysFrame {
    PhysFrame::containing_address(PhysAddr::new(base))
}

#[test]
fn test_allocator_only_hands_out_usable_frames() {
    let low = entry(0x0000, 0x9_f000, EntryType::RESERVED);
    let vga = entry(0xa_0000, 0x6_0000, EntryType::RESERVED);
    let first = entry(0x10_0000, 0x2000, EntryType::USABLE);
    let kernel = entry(0x10_2000, 0x1000, EntryType::EXECUTABLE_AND_MODULES);
    let second = entry(0x20_0000, 0x1000, EntryType::USABLE);
    let memory_map = [&low, &vga, &first, &kernel, &second];

    let mut allocator = unsafe { BootInfoFrameAllocator::init(&memory_map) };
    assert_eq!(allocator.allocate_frame(), Some(frame(0x10_0000)));
    assert_eq!(allocator.allocate_frame(), Some(frame(0x10_1000)));
    assert_eq!(allocator.allocate_frame(), Some(frame(0x20_0000)));
    assert_eq!(allocator.allocate_frame(), None);
    assert_eq!(allocator.allocate_frame(), None);
}

#[test]
fn test_allocator_never_returns_the_text_buffer() {
    let vga = entry(0xa_0000, 0x6_0000, EntryType::RESERVED);
    let usable = entry(0x10_0000, 0x10_0000, EntryType::USABLE);
    let memory_map = [&vga, &usable];

    let mut allocator = unsafe { BootInfoFrameAllocator::init(&memory_map) };
    let text_buffer = frame(VGA_TEXT_BUFFER);
    let mut count = 0;
    while let Some(allocated) = allocator.allocate_frame() {
        assert_ne!(allocated, text_buffer);
        count += 1;
    }
    assert_eq!(count, 0x100);
}

#[test]
fn test_text_buffer_fits_one_mapped_page() {
    assert_eq!(VGA_TEXT_BUFFER % 4096, 0);
    assert!(size_of::<Framebuffer>() <= 4096);

    let window = VirtAddr::try_new(TEXT_BUFFER_WINDOW).expect("window must be canonical");
    assert!(window.is_aligned(4096u64));
    assert!(window.as_u64() >= 0xffff_8000_0000_0000);
    assert!(window.as_u64() < 0xffff_ffff_8000_0000);
}
