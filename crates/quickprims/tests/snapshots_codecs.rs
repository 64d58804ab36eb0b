#![expect(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use quickprims::{
    FastInt, base64, hex, natural, text,
    units::{self, DistanceUnit, TimeUnit},
};

#[test]
fn snapshot_integer_extremes() {
    let mut out = String::new();
    macro_rules! extremes {
        ($($ty:ident),*) => {$(
            writeln!(
                out,
                "{}: {} ..= {}",
                <$ty as FastInt>::NAME,
                $ty::MIN.fast_format(),
                $ty::MAX.fast_format()
            )
            .unwrap();
        )*};
    }
    extremes!(i8, i16, i32, i64, u8, u16, u32, u64);

    insta::assert_snapshot!(out, @r#"
    i8: -128 ..= 127
    i16: -32768 ..= 32767
    i32: -2147483648 ..= 2147483647
    i64: -9223372036854775808 ..= 9223372036854775807
    u8: 0 ..= 255
    u16: 0 ..= 65535
    u32: 0 ..= 4294967295
    u64: 0 ..= 18446744073709551615
    "#);
}

#[test]
fn snapshot_base64_and_hex() {
    let stride: Vec<u8> = (0..=255).step_by(17).collect();
    let mut out = String::new();
    writeln!(out, "{}", base64::encode(b"Many hands make light work.")).unwrap();
    writeln!(out, "{}", base64::encode(&stride)).unwrap();
    writeln!(out, "{:?}", hex::decode_hex("00112233ccDDeeFF")).unwrap();
    writeln!(out, "{:?}", hex::decode_hex("0g")).unwrap();

    insta::assert_snapshot!(out, @r#"
    TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu
    ABEiM0RVZneImaq7zN3u/w==
    Ok([0, 17, 34, 51, 204, 221, 238, 255])
    Err(InvalidDigit { index: 1, found: 'g' })
    "#);
}

#[test]
fn snapshot_natural_sort() {
    let mut names = vec![
        "img12.png",
        "img10.png",
        "IMG3.png",
        "img2.png",
        "img02.png",
        "img1.png",
        "img.png",
        "img0.png",
        "img00.png",
        "Zeta.png",
        "alpha.png",
    ];
    names.sort_by(|a, b| natural::compare(a, b));

    insta::assert_snapshot!(names.join("\n"), @r#"
    alpha.png
    img0.png
    img00.png
    img1.png
    img02.png
    img2.png
    img10.png
    img12.png
    IMG3.png
    img.png
    Zeta.png
    "#);
}

#[test]
fn snapshot_text_helpers() {
    let mut out = String::new();
    for max in [0, 2, 5, 11, 40] {
        writeln!(out, "{max}: [{}]", text::truncate("hello, world", max)).unwrap();
    }
    let quoted = text::quote(r#"say "hi" \ bye"#);
    writeln!(out, "{quoted}").unwrap();
    writeln!(out, "{}", text::unquote(&quoted)).unwrap();

    insta::assert_snapshot!(out, @r#"
    0: []
    2: [..]
    5: [he...]
    11: [hello, w...]
    40: [hello, world]
    "say \"hi\" \\ bye"
    say "hi" \ bye
    "#);
}

#[test]
fn snapshot_unit_strings() {
    let mut out = String::new();
    for seconds in [0.000_25, 0.75, 42.0, 600.0, 7_200.0, 200_000.0] {
        writeln!(out, "{seconds} s => {}", units::format_time(seconds, TimeUnit::Seconds)).unwrap();
    }
    for meters in [0.000_002, 0.004, 0.3, 3.0, 30.0, 300.0, 3_000.0, 300_000.0] {
        writeln!(out, "{meters} m => {}", units::format_distance(meters, DistanceUnit::Meters)).unwrap();
    }

    insta::assert_snapshot!(out, @r#"
    0.00025 s => 250.00 us
    0.75 s => 750.00 ms
    42 s => 42.00 s
    600 s => 10.0 min
    7200 s => 2.0 hrs
    200000 s => 2.31 days
    0.000002 m => 2 um
    0.004 m => 4.0 mm
    0.3 m => 30.0 cm
    3 m => 3.00 m
    30 m => 30.0 m
    300 m => 300 m
    3000 m => 3.00 km
    300000 m => 300 km
    "#);
}
