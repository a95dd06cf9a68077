use crate::analysis::{
    alarm, catalog, free_registers, inject, listing, program_bottom, summary, CatalogEntry, Error,
};
use crate::analysis::alarm::Alarm;
use crate::arch::hp41::{Instruction, Label};
use crate::memory::walker;
use crate::memory::MemoryImage;
use pretty_assertions::assert_eq;

const TOP: usize = 511;

/// Two programs: `LBL "AB" RTN END` (10 bytes) and
/// `LBL "C" LBL "D" RTN END` (14 bytes).
const PROGRAMS: [u8; 24] = [
    0xC0, 0x00, 0xF3, 0x00, 0x41, 0x42, 0x85, 0xC0, 0x00, 0x0D, 0xC0, 0x00, 0xF2, 0x00, 0x43, 0xC0,
    0x00, 0xF2, 0x00, 0x44, 0x85, 0xC0, 0x00, 0x09,
];

/// Build an image with `code` at the top of program space, followed by a
/// `.END.` at the start of the next free register.
fn image_with_code(code: &[u8]) -> MemoryImage {
    let registers = (code.len() + 6) / 7;
    let limit = TOP - registers;
    let mut image = MemoryImage::test_image(TOP, limit);

    image.poke(walker::register_start(TOP), code);
    image.poke(walker::register_start(limit), &inject::FINAL_END);

    image
}

fn label(name: &str) -> Label {
    Label {
        name: name.to_string(),
        key: None,
    }
}

#[test]
fn catalog_programs() {
    let image = image_with_code(&PROGRAMS);
    let catalog = catalog::index(&image).unwrap();

    assert_eq!(catalog.labels, 3);
    assert_eq!(catalog.programs, 2);
    assert_eq!(
        catalog.entries,
        vec![
            CatalogEntry::Label(label("AB")),
            CatalogEntry::Size(10),
            CatalogEntry::Label(label("C")),
            CatalogEntry::Label(label("D")),
            CatalogEntry::Size(14),
        ]
    );
}

#[test]
fn catalog_is_idempotent() {
    let image = image_with_code(&PROGRAMS);

    assert_eq!(catalog::index(&image).unwrap(), catalog::index(&image).unwrap());
}

#[test]
fn catalog_empty_program_space() {
    let image = MemoryImage::test_image(511, 500);
    let catalog = catalog::index(&image).unwrap();

    assert_eq!(catalog.labels, 0);
    assert_eq!(catalog.programs, 0);
    assert!(catalog.entries.is_empty());

    let summary = summary::summarize(&image).unwrap();
    assert_eq!(summary.programs, 0);
    assert_eq!(summary.labels, 0);
    assert_eq!(summary.program_registers, 11);
    assert!(summary.well_formed);
}

#[test]
fn listing_named_program() {
    let image = image_with_code(&PROGRAMS);
    let program = listing::disassemble(&image, "C").unwrap().unwrap();

    assert_eq!(program.label, label("C"));
    let mnemonics: Vec<_> = program.rows.iter().map(|r| r.mnemonic.as_str()).collect();
    assert_eq!(mnemonics, vec!["LBL \"D\"", "RTN", "END"]);
    assert_eq!(program.rows[0].sequence, 1);
    assert_eq!(program.rows[2].sequence, 3);
    assert_eq!(program.hex, "C000F2004485C00009");
    assert_eq!(program.size(), 9);

    let program = listing::disassemble(&image, "AB").unwrap().unwrap();
    assert_eq!(program.hex, "85C0000D");
}

#[test]
fn listing_missing_program() {
    let image = image_with_code(&PROGRAMS);

    assert_eq!(listing::disassemble(&image, "ZZ").unwrap(), None);
}

#[test]
fn listing_all() {
    let image = image_with_code(&PROGRAMS);
    let rows = listing::disassemble_all(&image).unwrap();

    // 7 instructions, 4 bytes of padding, then the final end.
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0].mnemonic, "LBL \"AB\"");
    assert_eq!(rows[7].mnemonic, "??(00)");
    assert_eq!(rows[11].mnemonic, ".END.");
}

#[test]
fn bottom_of_free_space() {
    let mut image = image_with_code(&PROGRAMS);
    assert_eq!(program_bottom(&image), 192);
    assert_eq!(free_registers(&image), 507 - 192);

    image.set_register(200, [0xF0, 0x01, 0x02, 0, 0, 0, 0]).unwrap();
    assert_eq!(program_bottom(&image), 201);
    assert_eq!(free_registers(&image), 306);
}

#[test]
fn inject_program() {
    let mut image = image_with_code(&PROGRAMS);
    let code = "C000F2004585C0000D";
    let injection = inject::inject(&mut image, code).unwrap();

    assert_eq!(injection.bytes, 9);
    assert_eq!(injection.registers, 2);
    assert_eq!(injection.old_limit, 507);
    assert_eq!(injection.new_limit, 505);
    assert_eq!(injection.free_before, 507 - 192);
    assert_eq!(injection.free_after, 505 - 192);
    assert_eq!(image.status().program_limit, 505);
    assert_eq!(image.status().program_top, TOP);

    let end = Instruction::decode(&image, walker::register_start(505)).unwrap();
    assert_eq!(end.instruction, Instruction::FinalEnd);
    assert_eq!(end.hex(), "C40129");

    let catalog = catalog::index(&image).unwrap();
    assert_eq!(catalog.labels, 4);
    assert_eq!(catalog.programs, 3);
    assert_eq!(catalog.entries[5], CatalogEntry::Label(label("E")));
    // Padding before the injected code belongs to the new program.
    assert_eq!(catalog.entries[6], CatalogEntry::Size(13));

    let program = listing::disassemble(&image, "E").unwrap().unwrap();
    assert_eq!(program.hex, "85C0000D");
}

#[test]
fn inject_partial_register() {
    let mut image = image_with_code(&PROGRAMS);
    let injection = inject::inject(&mut image, "85").unwrap();

    assert_eq!(injection.new_limit, 506);
    assert_eq!(image.register(507).unwrap(), &[0x85, 0, 0, 0, 0, 0, 0]);
    assert_eq!(image.register(506).unwrap(), &[0xC4, 0x01, 0x29, 0, 0, 0, 0]);
}

#[test]
fn inject_exactly_fills_free_space() {
    let mut image = image_with_code(&PROGRAMS);
    image.set_register(500, [0xF0, 0, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(free_registers(&image), 6);

    let code = "54".repeat(42);
    let injection = inject::inject(&mut image, &code).unwrap();

    assert_eq!(injection.new_limit, 501);
    assert_eq!(injection.free_after, 0);
    assert!(injection.new_limit >= program_bottom(&image));
    assert_eq!(image.register(501).unwrap()[..3], [0xC4, 0x01, 0x29]);
    assert_eq!(image.register_head(500), Some(0xF0));
}

#[test]
fn inject_one_byte_too_many() {
    let mut image = image_with_code(&PROGRAMS);
    image.set_register(500, [0xF0, 0, 0, 0, 0, 0, 0]).unwrap();
    let before = image.clone();

    let code = "54".repeat(43);
    let err = inject::inject(&mut image, &code).unwrap_err();

    assert!(matches!(
        err,
        Error::InsufficientSpace {
            required: 7,
            free: 6
        }
    ));
    assert!(image == before);
}

#[test]
fn inject_invalid_hex() {
    let mut image = image_with_code(&PROGRAMS);

    assert!(matches!(
        inject::inject(&mut image, "C40"),
        Err(Error::InvalidHex(_))
    ));
    assert!(matches!(
        inject::inject(&mut image, "XY"),
        Err(Error::InvalidHex(_))
    ));
    assert_eq!(inject::parse_code("C4 01\n29").unwrap(), vec![0xC4, 0x01, 0x29]);
}

/// Alarm partition at register 192 with the given records.
fn image_with_alarms(records: &[[u8; 7]]) -> MemoryImage {
    let mut image = image_with_code(&PROGRAMS);
    image
        .set_register(192, [0xAA, records.len() as u8, 0, 0, 0, 0, 0])
        .unwrap();

    for (i, record) in records.iter().enumerate() {
        image.set_register(193 + i, *record).unwrap();
    }

    image
}

#[test]
fn alarm_epoch() {
    // 1900-01-01 00:00:01.0, i.e. 10 tenths of a second.
    let image = image_with_alarms(&[[0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00]]);

    assert_eq!(
        alarm::index(&image, 3600),
        vec![Alarm {
            time: -2208988799 + 3600,
            repeating: false,
            interval: 0,
            name: "ALARM".to_string(),
        }]
    );
}

#[test]
fn alarm_repeating_with_name() {
    let image = image_with_alarms(&[
        [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00],
        // 1970-01-01 00:00:00, repeating, one name register.
        [0x22, 0x08, 0x98, 0x88, 0x00, 0x01, 0x01],
        // Every hour.
        [0x00, 0x00, 0x00, 0x36, 0x00, 0x00, 0x00],
        [0x57, 0x41, 0x00, 0x4B, 0x45, 0x00, 0x00],
    ]);
    let alarms = alarm::index(&image, 0);

    assert_eq!(alarms.len(), 2);
    assert_eq!(
        alarms[1],
        Alarm {
            time: 0,
            repeating: true,
            interval: 3600,
            name: "WAKE".to_string(),
        }
    );
    assert_eq!(
        alarms[1].local_time().unwrap().to_string(),
        "1970-01-01 00:00:00"
    );
}

#[test]
fn alarm_partition_missing() {
    let image = image_with_code(&PROGRAMS);

    assert!(alarm::index(&image, 0).is_empty());
}

/// A terminal marker inside the partition drops every alarm decoded before
/// it, not just the ones after it.
#[test]
fn alarm_end_marker_discards_alarms() {
    let image = image_with_alarms(&[
        [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00],
        [0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        [0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00],
    ]);

    assert!(alarm::index(&image, 0).is_empty());
}

#[test]
fn summary_counts() {
    let mut image = image_with_alarms(&[[0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00]]);
    image.set_register(194, [0xF0, 0, 0, 0, 0, 0, 0]).unwrap();

    let summary = summary::summarize(&image).unwrap();
    assert_eq!(summary.labels, 3);
    assert_eq!(summary.programs, 2);
    assert_eq!(summary.alarms, 1);
    assert_eq!(summary.program_registers, 4);
    assert_eq!(summary.program_bottom, 195);
    assert_eq!(summary.free_registers, 507 - 195);
    assert_eq!(summary.partition_registers, 3);
}

/// Nibbles above 9 are weighted like any other digit.
#[test]
fn alarm_bcd_nibble_above_nine() {
    let image = image_with_alarms(&[[0x00, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x00]]);

    assert_eq!(alarm::index(&image, 0)[0].time, 10 - alarm::EPOCH_OFFSET);
}
