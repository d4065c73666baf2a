mod common;

use common::{console, finish, Capture};
use kconsole::{console_printf, Arg, Console};

fn printf(format: &str, args: &[Arg<'_>]) -> String {
    let console = console();
    console.vprintf(format, args);
    finish(console).text()
}

#[test]
fn magic_number_greeting() {
    let console = console();
    console_printf!(console, "hewo\nmagic number is %i\n", 69);
    assert_eq!(finish(console).text(), "hewo\nmagic number is 69\n");
}

#[test]
fn puts_is_verbatim_and_single_write() {
    let console = console();
    console.puts("raw %s text\t\x01");
    let device = finish(console);
    assert_eq!(device.writes, vec![b"raw %s text\t\x01".to_vec()]);
}

#[test]
fn puts_stops_at_terminator() {
    let console = console();
    console.puts(b"zero\0terminated");
    assert_eq!(finish(console).text(), "zero");
}

#[test]
fn absent_device_is_silent() {
    let console: Console<Capture> = Console::absent();
    assert!(!console.is_present());
    console.puts("nothing");
    console_printf!(console, "%i", 1);
    console.put_hexdump(b"nothing");
    assert!(console.into_device().is_none());
}

#[test]
fn unavailable_device_is_silent() {
    let console = Console::new(Some(Capture::offline()));
    assert!(!console.is_present());
    console.puts("nothing");
    console_printf!(console, "%s", "nothing");
    console.put_hexdump(b"nothing");
    assert!(finish(console).writes.is_empty());
}

#[test]
fn hex_and_decimal_round_trip() {
    for n in [0u64, 1, 9, 10, 15, 16, 255, 4096, 0xdead_beef, u32::MAX as u64, u64::MAX] {
        let hex = printf("%llx", &[n.into()]);
        assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), n, "hex of {n}");
        let dec = printf("%lli", &[n.into()]);
        assert_eq!(dec.parse::<u64>().unwrap(), n, "decimal of {n}");
    }
}

#[test]
fn zero_is_a_single_digit() {
    assert_eq!(printf("%x", &[0u32.into()]), "0");
    assert_eq!(printf("%i", &[0u32.into()]), "0");
    assert_eq!(printf("%lx", &[0u64.into()]), "0");
}

#[test]
fn int_class_truncates_to_32_bits() {
    assert_eq!(printf("%x", &[0x1_2345_6789u64.into()]), "23456789");
    assert_eq!(printf("%lx", &[0x1_2345_6789u64.into()]), "123456789");
}

#[test]
fn signed_values_print_as_unsigned() {
    assert_eq!(printf("%i", &[(-1i32).into()]), "4294967295");
    assert_eq!(printf("%x", &[(-1i32).into()]), "ffffffff");
    assert_eq!(printf("%lli", &[(-1i64).into()]), "18446744073709551615");
    assert_eq!(printf("%llx", &[(-2i32).into()]), "fffffffffffffffe");
}

#[test]
fn null_pointer_prints_null() {
    let null: *const u8 = core::ptr::null();
    assert_eq!(printf("%p", &[null.into()]), "(null)");
}

// A non-null %p is always `0x` plus sixteen zero-padded digits. Unused
// positions are filled with '0' rather than left as stale buffer bytes.
#[test]
fn pointer_uses_fixed_zero_padded_field() {
    assert_eq!(printf("%p", &[Arg::Pointer(0x1000)]), "0x0000000000001000");
    assert_eq!(printf("%p", &[Arg::Pointer(usize::MAX)]), format!("0x{:016x}", usize::MAX));

    let value = 7u32;
    let out = printf("%p", &[(&value as *const u32).into()]);
    assert!(out.starts_with("0x"));
    assert_eq!(out.len(), 18);
    assert_eq!(usize::from_str_radix(&out[2..], 16).unwrap(), &value as *const u32 as usize);
}

#[test]
fn string_pointer_prints_its_address() {
    let text = "abc";
    let out = printf("%p", &[text.into()]);
    assert_eq!(usize::from_str_radix(&out[2..], 16).unwrap(), text.as_ptr() as usize);
}

#[test]
fn percent_escape_takes_no_argument() {
    assert_eq!(printf("%%", &[]), "%");
    assert_eq!(printf("%i%%%i", &[1u32.into(), 2u32.into()]), "1%2");
}

#[test]
fn chars_and_strings() {
    assert_eq!(printf("[%c]", &['x'.into()]), "[x]");
    assert_eq!(printf("[%c]", &[0x141u32.into()]), "[A]");
    assert_eq!(printf("<%s>", &["mid".into()]), "<mid>");
    assert_eq!(printf("<%s>", &[(&b"cut\0off"[..]).into()]), "<cut>");
}

#[test]
fn unknown_specifiers_are_dropped_without_consuming() {
    assert_eq!(printf("a%zb%ic", &[5u32.into()]), "ab5c");
}

#[test]
fn mismatched_or_missing_arguments_print_nothing() {
    assert_eq!(printf("[%s]", &[3u32.into()]), "[]");
    assert_eq!(printf("[%x]", &["str".into()]), "[]");
    assert_eq!(printf("[%i][%i]", &[1u32.into()]), "[1][]");
}

#[test]
fn long_prefix_with_other_conversion_is_hex() {
    assert_eq!(printf("%lz!", &[255u32.into()]), "ff!");
}

#[test]
fn literal_runs_are_flushed_around_directives() {
    let console = console();
    console_printf!(console, "ab%icd", 7);
    let device = finish(console);
    assert_eq!(device.writes, vec![b"ab".to_vec(), b"7".to_vec(), b"cd".to_vec()]);
}

#[test]
fn write_fmt_goes_through_the_console() {
    let console = console();
    console.write_fmt(format_args!("{} + {} = {}", 1, 2, 1 + 2));
    assert_eq!(finish(console).text(), "1 + 2 = 3");
}
