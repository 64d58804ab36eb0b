#![expect(missing_docs)]

use core::fmt::Write;

use quickprims::{DateParseOptions, parse_free_form_date};

fn render(inputs: &[&str], options: &DateParseOptions) -> String {
    let mut out = String::new();
    for input in inputs {
        match parse_free_form_date(input, options) {
            Ok(date) => writeln!(out, "{input:?} => {date}").unwrap(),
            Err(err) => writeln!(out, "{input:?} => {err}").unwrap(),
        }
    }
    out
}

#[test]
fn snapshot_day_first() {
    let inputs = [
        "2024-03-05",
        "05/03/24",
        "Mar/24",
        "20240305",
        "31 December 1999",
        "1 1 70",
        "2/2/02",
        "0/0/2000",
        "1984",
        "13/13/13",
        "feb 29 2024",
        "today",
    ];
    insta::assert_snapshot!(render(&inputs, &DateParseOptions::default()), @r#"
    "2024-03-05" => 2024-03-05
    "05/03/24" => 2024-03-05
    "Mar/24" => 2024-03-01
    "20240305" => 2024-03-05
    "31 December 1999" => 1999-12-31
    "1 1 70" => 1970-01-01
    "2/2/02" => 2002-02-02
    "0/0/2000" => 2000-01-01
    "1984" => 1984-01-01
    "13/13/13" => could not parse '13/13/13' as date
    "feb 29 2024" => could not parse 'feb 29 2024' as date
    "today" => could not parse 'today' as date
    "#);
}

#[test]
fn snapshot_month_first() {
    let options = DateParseOptions {
        american: true,
        ..Default::default()
    };
    let inputs = ["03/05/24", "feb 29 2024", "12/31/99", "31/12/99", "2024-03-05"];
    insta::assert_snapshot!(render(&inputs, &options), @r#"
    "03/05/24" => 2024-03-05
    "feb 29 2024" => 2024-02-29
    "12/31/99" => 1999-12-31
    "31/12/99" => could not parse '31/12/99' as date
    "2024-03-05" => 2024-03-05
    "#);
}
