use serde::Deserialize;
use serde_json::json;
use serde_props::{
    from_str, parse, parse_reader, parse_str, props, to_json_string, to_json_value, Decimal,
    Error, Number, ParseOptions, Value,
};

#[derive(Deserialize, Debug, PartialEq)]
struct Http {
    host: String,
    port: u16,
    methods: Vec<String>,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Service {
    name: String,
    enabled: bool,
    http: Http,
}

fn json_of(input: &str) -> serde_json::Value {
    let doc = parse(false, input.as_bytes()).unwrap();
    to_json_value(&doc).unwrap()
}

#[test]
fn test_disjoint_keys_any_order() {
    assert_eq!(json_of("a=1\nb=2"), json!({"a": 1, "b": 2}));
    assert_eq!(json_of("b=2\na=1"), json!({"a": 1, "b": 2}));
}

#[test]
fn test_dot_path_nesting_yields_integer() {
    let doc = parse(false, b"a.b.c=5").unwrap();
    let leaf = doc
        .get("a")
        .and_then(|a| a.get("b"))
        .and_then(|b| b.get("c"))
        .unwrap();
    assert_eq!(leaf, &Value::Number(Number::from(5)));
    assert_eq!(to_json_string(&doc).unwrap(), r#"{"a":{"b":{"c":5}}}"#);
}

#[test]
fn test_sibling_merge() {
    assert_eq!(json_of("a.b=1\na.c=2"), json!({"a": {"b": 1, "c": 2}}));
}

#[test]
fn test_last_write_wins() {
    assert_eq!(json_of("a=1\na=2"), json!({"a": 2}));
}

#[test]
fn test_type_inference_table() {
    let doc = parse(
        false,
        b"t=true\nf=false\ni=42\nd=3.14\nl=1,2,3\nm=1,foo,true\ns=hello",
    )
    .unwrap();

    assert_eq!(doc.get("t"), Some(&Value::Bool(true)));
    assert_eq!(doc.get("f"), Some(&Value::Bool(false)));
    assert_eq!(doc.get("i"), Some(&props!(42)));
    assert_eq!(
        doc.get("d"),
        Some(&Value::from("3.14".parse::<Decimal>().unwrap()))
    );
    assert_eq!(doc.get("l"), Some(&props!([1, 2, 3])));
    assert_eq!(doc.get("m"), Some(&props!([1, "foo", true])));
    assert_eq!(doc.get("s"), Some(&props!("hello")));

    assert_eq!(
        to_json_value(&doc).unwrap(),
        json!({
            "t": true,
            "f": false,
            "i": 42,
            "d": 3.14,
            "l": [1, 2, 3],
            "m": [1, "foo", true],
            "s": "hello"
        })
    );
}

#[test]
fn test_raw_mode_bypass() {
    assert_eq!(
        to_json_value(&parse(true, b"a.b.c=5").unwrap()).unwrap(),
        json!({"a": "5"})
    );
}

#[test]
fn test_comment_and_blank_line_skipping() {
    let input = "# comment\n! comment\n\n   \r\na=1\n";
    assert_eq!(json_of(input), json!({"a": 1}));
}

#[test]
fn test_empty_input() {
    assert!(parse(false, b"").unwrap().is_empty());
    assert_eq!(json_of(""), json!({}));
}

#[test]
fn test_malformed_line_failure() {
    let result = parse(false, b"a=1\nthis line has no separator\nb=2");
    match result {
        Err(Error::MalformedEntry { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "this line has no separator");
        }
        other => panic!("Expected MalformedEntry, got {:?}", other),
    }
}

#[test]
fn test_line_terminators() {
    assert_eq!(
        json_of("a=1\r\nb=2\rc=3\nd=4"),
        json!({"a": 1, "b": 2, "c": 3, "d": 4})
    );
}

#[test]
fn test_key_order_follows_first_insertion() {
    let doc = parse(false, b"z=1\na.y=2\nm=3\na.b=4\nz=5").unwrap();
    assert_eq!(
        to_json_string(&doc).unwrap(),
        r#"{"z":5,"a":{"y":2,"b":4},"m":3}"#
    );
}

#[test]
fn test_big_numbers_survive_json() {
    let doc = parse(
        false,
        b"big=123456789012345678901234567890\nprecise=0.1000000000000000000000000001\nsci=1e400",
    )
    .unwrap();
    assert_eq!(
        to_json_string(&doc).unwrap(),
        r#"{"big":123456789012345678901234567890,"precise":0.1000000000000000000000000001,"sci":1e+400}"#
    );
}

#[test]
fn test_realistic_file() {
    let input = "\
# Service configuration
name = orders
enabled = true

! HTTP listener
http.host = 0.0.0.0
http.port = 8443
http.methods = GET,POST
";
    let service: Service = from_str(input).unwrap();
    assert_eq!(
        service,
        Service {
            name: "orders".to_string(),
            enabled: true,
            http: Http {
                host: "0.0.0.0".to_string(),
                port: 8443,
                methods: vec!["GET".to_string(), "POST".to_string()],
            },
        }
    );
}

#[test]
fn test_single_element_list_needs_comma() {
    #[derive(Deserialize)]
    struct Only {
        methods: Vec<String>,
    }
    assert!(from_str::<Only>("methods=GET").is_err());
    let only: Only = from_str("methods=GET,").unwrap();
    assert_eq!(only.methods, vec!["GET"]);
}

#[test]
fn test_parse_reader_matches_parse() {
    let input = "a.b=1\na.c=two";
    let from_reader = parse_reader(input.as_bytes(), &ParseOptions::hierarchical()).unwrap();
    let from_str = parse_str(input, &ParseOptions::hierarchical()).unwrap();
    assert_eq!(from_reader, from_str);
    assert_eq!(from_reader, parse(false, input.as_bytes()).unwrap());
}

#[test]
fn test_concurrent_parses_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("worker.id={}\nworker.tags=a,b", i);
                parse(false, input.as_bytes()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let doc = handle.join().unwrap();
        let id = doc.get("worker").and_then(|w| w.get("id")).unwrap();
        assert_eq!(id.as_i64(), Some(i as i64));
    }
}
