use crate::keywords::KeywordTable;
use crate::report::{write_keywords, Report, ReportFormat};
use crate::scanner::{scan, Match};

fn render(format: ReportFormat, quiet: bool, matches: Vec<Match>) -> (String, usize) {
    let mut out = vec![];
    let report = Report::new(format, quiet);
    let count = report.write_matches(&mut out, "test.c", matches).unwrap();
    (String::from_utf8(out).unwrap(), count)
}

fn sample() -> Vec<Match<'static>> {
    vec![
        Match::new("int", "entero"),
        Match::new("if", "si"),
        Match::new("int", "entero"),
    ]
}

#[test]
fn parse_format() {
    assert_eq!("text".parse::<ReportFormat>(), Ok(ReportFormat::Text));
    assert_eq!("plain".parse::<ReportFormat>(), Ok(ReportFormat::Plain));
    assert_eq!("summary".parse::<ReportFormat>(), Ok(ReportFormat::Summary));
    assert!("Text".parse::<ReportFormat>().is_err());
    assert_eq!(ReportFormat::Summary.to_string(), "summary");
}

#[test]
fn text_report() {
    let (output, count) = render(ReportFormat::Text, false, sample());
    assert_eq!(count, 3);
    assert_eq!(
        output,
        concat!(
            "--- Starting analysis: test.c ---\n",
            "  Keyword found: C = 'int', translation = 'entero'\n",
            "  Keyword found: C = 'if', translation = 'si'\n",
            "  Keyword found: C = 'int', translation = 'entero'\n",
            "--- Analysis finished (3 keywords) ---\n",
        )
    );
}

#[test]
fn quiet_text_report() {
    let (output, _) = render(ReportFormat::Text, true, vec![Match::new("if", "si")]);
    assert_eq!(output, "  Keyword found: C = 'if', translation = 'si'\n");
}

#[test]
fn empty_text_report() {
    let (output, count) = render(ReportFormat::Text, false, vec![]);
    assert_eq!(count, 0);
    assert_eq!(
        output,
        "--- Starting analysis: test.c ---\n--- Analysis finished (0 keywords) ---\n"
    );
}

#[test]
fn plain_report() {
    let (output, count) = render(ReportFormat::Plain, false, sample());
    assert_eq!(count, 3);
    assert_eq!(output, "int\tentero\nif\tsi\nint\tentero\n");
}

#[test]
fn summary_report() {
    let (output, count) = render(ReportFormat::Summary, false, sample());
    assert_eq!(count, 3);
    assert_eq!(output, "int\tentero\t2\nif\tsi\t1\ntotal\t3\n");
}

#[test]
fn report_straight_from_scanner() {
    let table = KeywordTable::new([("while", "mientras")]).unwrap();
    let mut out = vec![];
    let report = Report::new(ReportFormat::Plain, false);
    let count = report
        .write_matches(&mut out, "<code>", scan("while (1) { /* while */ }", &table))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(String::from_utf8(out).unwrap(), "while\tmientras\n");
}

#[test]
fn list_keywords() {
    let table = KeywordTable::new([("if", "si"), ("else", "si_no")]).unwrap();
    let mut out = vec![];
    write_keywords(&mut out, &table).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "if\tsi\nelse\tsi_no\n");
}
