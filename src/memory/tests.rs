use crate::analysis::Error;
use crate::memory::walker::{self, next, offset};
use crate::memory::{CpuRegisters, MemoryImage, IMAGE_SIZE, WATCHDOG};
use proptest::prelude::*;

#[test]
fn walk_within_register() {
    assert_eq!(next(700).unwrap(), 701);
    assert_eq!(next(705).unwrap(), 706);
}

#[test]
fn walk_across_register() {
    // Last byte of register 100 goes to the first byte of register 99.
    assert_eq!(next(706).unwrap(), 693);
    assert_eq!(walker::register_of(693), 99);
    assert_eq!(offset(693), 0);
}

#[test]
fn walk_underflow() {
    assert!(matches!(next(6), Err(Error::WalkUnderflow(6))));
    assert_eq!(next(13).unwrap(), 0);
}

#[test]
fn walk_advance() {
    assert_eq!(walker::advance(700, 0).unwrap(), 700);
    assert_eq!(walker::advance(700, 7).unwrap(), 693);
    assert_eq!(walker::advance(704, 3).unwrap(), 693);
}

proptest! {
    #[test]
    fn walk_order(loc in 13usize..IMAGE_SIZE) {
        let n = next(loc).unwrap();

        if offset(loc) == 6 {
            prop_assert_eq!(n, loc - 13);
            prop_assert_eq!(offset(n), 0);
        } else {
            prop_assert_eq!(n, loc + 1);
        }
    }
}

#[test]
fn status_fields() {
    let mut image = MemoryImage::new();
    image.set_byte(91, 0x01).unwrap();
    image.set_byte(92, 0x69).unwrap();
    image.set_byte(95, 0x1F).unwrap();
    image.set_byte(96, 0xF1).unwrap();
    image.set_byte(97, 0xF4).unwrap();

    let status = image.status();
    assert_eq!(status.watchdog, WATCHDOG);
    assert!(status.is_well_formed());
    assert_eq!(status.program_top, 511);
    assert_eq!(status.program_limit, 500);
}

#[test]
fn status_setters_roundtrip() {
    let image = MemoryImage::test_image(0x1FF, 0x1F4);
    let status = image.status();

    assert_eq!(status.program_top, 0x1FF);
    assert_eq!(status.program_limit, 0x1F4);
    assert!(status.is_well_formed());
    assert_eq!(image.byte(96).unwrap(), 0xF1);
}

#[test]
fn program_limit_repack_keeps_top() {
    let mut image = MemoryImage::test_image(0x1FF, 0x1F4);
    image.set_program_limit(0x0C5);

    let status = image.status();
    assert_eq!(status.program_top, 0x1FF);
    assert_eq!(status.program_limit, 0x0C5);
}

#[test]
fn out_of_bounds() {
    let mut image = MemoryImage::new();

    assert!(matches!(image.byte(IMAGE_SIZE), Err(Error::OutOfBounds(_))));
    assert!(image.set_byte(IMAGE_SIZE, 0).is_err());
    assert!(image.register(1112).is_none());
    assert!(image.register(1111).is_some());
}

#[test]
fn read_run_crosses_registers() {
    let mut image = MemoryImage::new();
    image.set_register(101, [0, 0, 0, 0, 0, 0xAB, 0xCD]).unwrap();
    image.set_register(100, [0xEF, 0, 0, 0, 0, 0, 0]).unwrap();

    let (run, after) = image.read_run(712, 3).unwrap();
    assert_eq!(run, vec![0xAB, 0xCD, 0xEF]);
    assert_eq!(after, 701);
}

#[test]
fn from_bytes_checks_length() {
    let mut bytes = vec![0; IMAGE_SIZE];
    bytes[0] = 0x42;

    let image = MemoryImage::from_bytes(bytes, CpuRegisters::default()).unwrap();
    assert_eq!(image.byte(0).unwrap(), 0x42);
    assert_eq!(image.bytes().len(), IMAGE_SIZE);
    assert_eq!(image.cpu().g, vec![0]);

    assert!(MemoryImage::from_bytes(vec![0; IMAGE_SIZE - 1], CpuRegisters::default()).is_none());
}
