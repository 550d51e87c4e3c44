//! Tests for the process-wide configuration.
//!
//! The global configuration is shared by every test in this binary, so all
//! checks live in a single test function.

use net_url::{build_query, parse, parse_query, Config, Options, QueryValue};

#[test]
fn global_options_apply_to_later_calls() {
    let url = parse("http://h/?a=1&a=2");
    assert_eq!(url.query().get("a"), Some(&QueryValue::from("2")));
    assert_eq!(url.build(), "http://h/?a=2");

    Config::update_global(|config| {
        config.options.set_cumulative_parameters(true);
        config
            .options
            .set_separator(";")
            .expect("non-empty separator");
    });

    // Already parsed URLs are built with the new options.
    assert_eq!(url.build(), "http://h/?a=2");
    let query = parse_query("a=1;a=2", None);
    assert_eq!(query.get("a"), Some(&QueryValue::from(vec!["1", "2"])));
    assert_eq!(build_query(&query, None, None), "a%5B%5D=1;a%5B%5D=2");
    assert_eq!(build_query(&query, Some("&"), Some("p")), "p%5Ba%5D%5B%5D=1&p%5Ba%5D%5B%5D=2");

    let mut url = parse("HTTPS://h:443/x/../y?k=v;k=w");
    url.normalize();
    assert_eq!(url.to_string(), "https://h/y?k%5B%5D=v;k%5B%5D=w");

    Config::update_global(|config| {
        config
            .services
            .insert("https", 8443)
            .expect("valid scheme name");
    });
    assert_eq!(parse("https://h:443/").build(), "https://h:443/");

    Config::set_global(Config::new(Options::default(), Default::default()));
    assert_eq!(*Config::global(), Config::default());
    assert_eq!(parse("https://h:443/").build(), "https://h/");
}
