//! Tests for URL resolution.

#[macro_use]
mod utils;

use net_url::{Config, Url};

/// Test cases for resolution.
// [(base, [(input, output)])]
const TEST_CASES: &[(&str, &[(&str, &str)])] = &[
    // RFC 3986, section 5.2.4.
    ("scheme:///a/b/c/./../../", &[("g", "scheme:///a/g")]),
    ("scheme:///a/b/c/./../", &[("../g", "scheme:///a/g")]),
    ("scheme:///a/b/c/./", &[("../../g", "scheme:///a/g")]),
    ("scheme:///a/b/c/", &[("./../../g", "scheme:///a/g")]),
    ("scheme:///a/b/", &[("c/./../../g", "scheme:///a/g")]),
    ("scheme:///a/", &[("b/c/./../../g", "scheme:///a/g")]),
    ("scheme:///", &[("a/b/c/./../../g", "scheme:///a/g")]),
    ("scheme:mid/content=5/../", &[("6", "scheme:mid/6")]),
    ("scheme:mid/content=5/", &[("../6", "scheme:mid/6")]),
    ("scheme:mid/", &[("content=5/../6", "scheme:mid/6")]),
    ("scheme:", &[("mid/content=5/../6", "scheme:mid/6")]),
    // RFC 3986, section 5.4.1.
    (
        "http://a/b/c/d;p?q",
        &[
            ("g:h", "g:h"),
            ("g", "http://a/b/c/g"),
            ("./g", "http://a/b/c/g"),
            ("g/", "http://a/b/c/g/"),
            ("/g", "http://a/g"),
            ("//g", "http://g"),
            ("?y", "http://a/b/c/d;p?y"),
            ("g?y", "http://a/b/c/g?y"),
            ("#s", "http://a/b/c/d;p?q#s"),
            ("g#s", "http://a/b/c/g#s"),
            ("g?y#s", "http://a/b/c/g?y#s"),
            (";x", "http://a/b/c/;x"),
            ("g;x", "http://a/b/c/g;x"),
            ("g;x?y#s", "http://a/b/c/g;x?y#s"),
            ("", "http://a/b/c/d;p?q"),
            (".", "http://a/b/c/"),
            ("./", "http://a/b/c/"),
            ("..", "http://a/b/"),
            ("../", "http://a/b/"),
            ("../g", "http://a/b/g"),
            ("../..", "http://a/"),
            ("../../", "http://a/"),
            ("../../g", "http://a/g"),
        ],
    ),
    // RFC 3986, section 5.4.2.
    (
        "http://a/b/c/d;p?q",
        &[
            ("../../../g", "http://a/g"),
            ("../../../../g", "http://a/g"),
            ("/./g", "http://a/g"),
            ("/../g", "http://a/g"),
            ("g.", "http://a/b/c/g."),
            (".g", "http://a/b/c/.g"),
            ("g..", "http://a/b/c/g.."),
            ("..g", "http://a/b/c/..g"),
            ("./../g", "http://a/b/g"),
            ("./g/.", "http://a/b/c/g/"),
            ("g/./h", "http://a/b/c/g/h"),
            ("g/../h", "http://a/b/c/h"),
            ("g;x=1/./y", "http://a/b/c/g;x=1/y"),
            ("g;x=1/../y", "http://a/b/c/y"),
            ("g?y/./x", "http://a/b/c/g?y/./x"),
            ("g?y/../x", "http://a/b/c/g?y/../x"),
            ("g#s/./x", "http://a/b/c/g#s/./x"),
            ("g#s/../x", "http://a/b/c/g#s/../x"),
            ("http:g", "http:g"),
        ],
    ),
    // Base with an empty path.
    ("http://example.com", &[("a/b", "http://example.com/a/b")]),
    // Default port of the reference is removed since it is normalized.
    ("http://a/b", &[("HTTPS://Example.com:443/./x", "https://example.com/x")]),
];

#[test]
fn resolve_reference_table() {
    let config = Config::default();
    for (base, pairs) in TEST_CASES {
        let base_url = Url::parse_with(base, &config);
        for (input, expected) in pairs.iter() {
            let reference = Url::parse_with(input, &config);
            let resolved = base_url.resolve_with(&reference, &config);
            assert_eq!(
                resolved.build_with(&config),
                *expected,
                "base={base:?}, reference={input:?}"
            );
        }
    }
}

#[test]
fn base_is_not_mutated() {
    let config = Config::default();
    let base = Url::parse_with("http://u@a/b/c?q=1#frag", &config);
    let before = base.clone();

    let mut resolved = base.resolve_with(&Url::parse_with("d?x=2", &config), &config);
    resolved.query_mut().insert("y", "3");
    resolved.set_host(Some("other"));

    assert_eq!(base, before);
    assert_eq!(resolved.user(), Some("u"));
    assert_eq!(resolved.authority(), Some("u@other"));
}

#[test]
fn fragment_is_not_inherited() {
    let config = Config::default();
    let base = Url::parse_with("http://a/b#frag", &config);
    let resolved = base.resolve_with(&Url::parse_with("c", &config), &config);
    assert_eq!(resolved.fragment(), None);
    assert_eq_display!(resolved.build_with(&config), "http://a/c");
}

#[test]
fn resolve_with_string_uses_global_config() {
    let base = Url::parse("http://a/b/c/d;p?q");
    assert_eq!(base.resolve_str("g?y#s").build(), "http://a/b/c/g?y#s");
}
