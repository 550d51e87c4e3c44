//! Tests for query strings.

use net_url::query::{build_with, parse_with};
use net_url::{Options, Query, QueryValue};

/// Creates a nested query value from pairs.
fn nested<const N: usize>(pairs: [(&str, QueryValue); N]) -> QueryValue {
    QueryValue::Nested(pairs.into_iter().collect())
}

#[test]
fn bracket_keys_build_nested_sequences() {
    let options = Options::default();
    let query = parse_with("a[b][]=1&a[b][]=2", None, &options);
    let expected: Query = [("a", nested([("b", QueryValue::from(vec!["1", "2"]))]))]
        .into_iter()
        .collect();
    assert_eq!(query, expected);
}

#[test]
fn bracket_encoding_is_exact() {
    let options = Options::default();
    let query: Query = [("a", nested([("b", QueryValue::from(vec!["1", "2"]))]))]
        .into_iter()
        .collect();
    assert_eq!(
        build_with(&query, None, None, &options),
        "a%5Bb%5D%5B%5D=1&a%5Bb%5D%5B%5D=2"
    );
}

#[test]
fn pair_without_equals_has_empty_value() {
    let options = Options::default();
    let query = parse_with("flag&x=1", None, &options);
    assert_eq!(query.get("flag"), Some(&QueryValue::from("")));
    assert_eq!(build_with(&query, None, None, &options), "flag&x=1");
}

#[test]
fn value_keeps_later_equals() {
    let options = Options::default();
    let query = parse_with("expr=a=b", None, &options);
    assert_eq!(query.get("expr"), Some(&QueryValue::from("a=b")));
    assert_eq!(build_with(&query, None, None, &options), "expr=a%3Db");
}

#[test]
fn top_level_order_is_first_insertion() {
    let options = Options::default();
    let query = parse_with("z=1&a[x]=2&m=3&z=4&a[y]=5", None, &options);
    assert_eq!(query.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
    assert_eq!(
        build_with(&query, None, None, &options),
        "z=4&a%5Bx%5D=2&a%5By%5D=5&m=3"
    );
}

#[test]
fn custom_separator() {
    let options = Options::default().with_separator(";").expect("non-empty separator");
    let query = parse_with("a=1;b=2&c", None, &options);
    assert_eq!(query.get("b"), Some(&QueryValue::from("2&c")));
    assert_eq!(build_with(&query, None, None, &options), "a=1;b=2%26c");

    let query = parse_with("a=1|b=2", Some("|"), &options);
    assert_eq!(query.len(), 2);
    assert_eq!(build_with(&query, Some("&amp;"), None, &options), "a=1&amp;b=2");
}

#[test]
fn legal_in_query_extends_unescaped_set() {
    let mut options = Options::default();
    let query: Query = [("k", "a<b>")].into_iter().collect();
    assert_eq!(build_with(&query, None, None, &options), "k=a%3Cb%3E");

    options.legal_in_query_mut().extend(['<', '>']);
    assert_eq!(build_with(&query, None, None, &options), "k=a<b>");
}

#[test]
fn roundtrip_of_parsed_queries() {
    let inputs = [
        "a=1&b=2",
        "a[]=1&a[]=2&b[c][d]=3&b[c][e][]=4",
        "list[][name]=x&list[][name]=y",
        "empty&text=hello%20world&sym=%26%3D%2B%23",
        "utf8=%E2%82%AC&k%5Bj%5D=v",
        "x[0]=a&x[1]=b",
        "a[b=1&a[b=2",
        "[&[",
        "[&[&%28",
        "a[b]c[=1&d%5B=2",
    ];
    for cumulative in [false, true] {
        let options = Options::default().with_cumulative_parameters(cumulative);
        for input in inputs {
            let parsed = parse_with(input, None, &options);
            let rebuilt = build_with(&parsed, None, None, &options);
            assert_eq!(
                parse_with(&rebuilt, None, &options),
                parsed,
                "input={input:?}, rebuilt={rebuilt:?}, cumulative={cumulative}"
            );
        }
    }
}

#[test]
fn cumulative_roundtrip_keeps_sequence_order() {
    let options = Options::default().with_cumulative_parameters(true);
    let parsed = parse_with("k=3&k=1&k=2", None, &options);
    assert_eq!(parsed.get("k"), Some(&QueryValue::from(vec!["3", "1", "2"])));
    let rebuilt = build_with(&parsed, None, None, &options);
    assert_eq!(rebuilt, "k%5B%5D=3&k%5B%5D=1&k%5B%5D=2");
    assert_eq!(parse_with(&rebuilt, None, &options), parsed);
}

#[test]
fn plus_is_space_toggle() {
    let query: Query = [("q", "a b+c")].into_iter().collect();

    let options = Options::default();
    let built = build_with(&query, None, None, &options);
    assert_eq!(built, "q=a%20b%2Bc");
    assert_eq!(parse_with("q=a+b%2Bc", None, &options), query);

    let options = options.with_query_plus_is_space(false);
    assert_eq!(
        parse_with("q=a+b", None, &options).get("q"),
        Some(&QueryValue::from("a+b"))
    );
}

#[test]
fn unmatched_bracket_names_roundtrip_as_sequences() {
    let options = Options::default().with_cumulative_parameters(true);
    let parsed = parse_with("a[b=1&a[b=2", None, &options);
    assert_eq!(parsed.get("a_b"), Some(&QueryValue::from(vec!["1", "2"])));

    let rebuilt = build_with(&parsed, None, None, &options);
    assert_eq!(rebuilt, "a_b%5B%5D=1&a_b%5B%5D=2");
    assert_eq!(parse_with(&rebuilt, None, &options), parsed);
}
