use super::*;

#[test]
fn escapes_markup() {
    assert_eq!(escape_html("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
}

#[test]
fn escapes_ampersand_before_other_entities() {
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

#[test]
fn leaves_quotes_and_plain_text_alone() {
    assert_eq!(escape_html(r#"l'"accueil""#), r#"l'"accueil""#);
    assert_eq!(escape_html("Réunion à 10h"), "Réunion à 10h");
}

#[test]
fn encodes_non_breaking_space() {
    assert_eq!(escape_html("10\u{a0}%"), "10&nbsp;%");
}

#[test]
fn text_to_html_escapes_then_breaks_lines() {
    assert_eq!(text_to_html("ligne 1\r\n<ligne 2>"), "ligne 1<br>&lt;ligne 2&gt;");
}
