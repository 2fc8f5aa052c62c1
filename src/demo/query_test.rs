use super::*;

#[test]
fn parses_pairs_in_order() {
    let q = QueryParams::parse("page=2&page_size=10&search=chen");
    assert_eq!(q.get("page"), Some("2"));
    assert_eq!(q.get("page_size"), Some("10"));
    assert_eq!(q.get("search"), Some("chen"));
    assert_eq!(q.get("missing"), None);
}

#[test]
fn keys_are_case_sensitive() {
    let q = QueryParams::parse("Status=active");
    assert_eq!(q.get("status"), None);
    assert_eq!(q.get("Status"), Some("active"));
}

#[test]
fn repeated_keys_keep_every_value_and_get_returns_first() {
    let q = QueryParams::parse("tag=tax&tag=vat");
    assert_eq!(q.get("tag"), Some("tax"));
    assert_eq!(q.get_all("tag").collect::<Vec<_>>(), vec!["tax", "vat"]);
}

#[test]
fn decodes_plus_and_percent_escapes() {
    let q = QueryParams::parse("search=Sarah+Chen&authority=Tax%20Authority&q=%26%3D");
    assert_eq!(q.get("search"), Some("Sarah Chen"));
    assert_eq!(q.get("authority"), Some("Tax Authority"));
    assert_eq!(q.get("q"), Some("&="));
}

#[test]
fn bare_keys_and_empty_segments() {
    let q = QueryParams::parse("&flag&&x=");
    assert_eq!(q.get("flag"), Some(""));
    assert_eq!(q.filter("flag"), None);
    assert_eq!(q.get("x"), Some(""));
    assert!(QueryParams::parse("").is_empty());
}

#[test]
fn flag_accepts_only_literals() {
    let q = QueryParams::parse("a=true&b=false&c=1&d=TRUE");
    assert_eq!(q.flag("a"), Some(true));
    assert_eq!(q.flag("b"), Some(false));
    assert_eq!(q.flag("c"), None);
    assert_eq!(q.flag("d"), None);
    assert_eq!(q.flag("e"), None);
}

#[test]
fn positive_falls_back_on_invalid_values() {
    let q = QueryParams::parse("page=0&page_size=abc&n=-3&ok=4");
    assert_eq!(q.positive("page", 1), 1);
    assert_eq!(q.positive("page_size", 25), 25);
    assert_eq!(q.positive("n", 7), 7);
    assert_eq!(q.positive("ok", 1), 4);
    assert_eq!(q.positive("absent", 9), 9);
}
