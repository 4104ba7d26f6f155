use json_pointer_resolver::{parse_json_pointer, Resolver, ValueExt};
use serde_json::{json, Value};

fn library() -> Value {
    json!({
        "library": {
            "name": "library of congress",
            "section": [{
                "name": "sci-fi",
                "title": [{
                    "book": {
                        "name": "Mote in Gods Eye",
                        "author": ["Larry Niven", "Jerry Pournelle"]
                    }
                }, {
                    "book": {
                        "name": "Ringworld",
                        "author": ["Larry Niven"]
                    }
                }]
            }]
        }
    })
}

fn rfc6901() -> Value {
    serde_json::from_str(
        r#"{
            "foo": ["bar", "baz"],
            "": 0,
            "a/b": 1,
            "c%d": 2,
            "e^f": 3,
            "g|h": 4,
            "i\\j": 5,
            "k\"l": 6,
            " ": 7,
            "m~n": 8
        }"#,
    )
    .expect("valid document")
}

#[test]
fn rfc6901_examples() {
    let doc = rfc6901();
    let pointer = doc.resolver();

    assert_eq!(pointer.dereference(""), Some(&doc));
    assert_eq!(pointer.dereference("/foo"), Some(&json!(["bar", "baz"])));
    assert_eq!(pointer.dereference("/foo/0"), Some(&json!("bar")));
    assert_eq!(pointer.dereference("/"), Some(&json!(0)));
    assert_eq!(pointer.dereference("/a~1b"), Some(&json!(1)));
    assert_eq!(pointer.dereference("/c%d"), Some(&json!(2)));
    assert_eq!(pointer.dereference("/e^f"), Some(&json!(3)));
    assert_eq!(pointer.dereference("/g|h"), Some(&json!(4)));
    assert_eq!(pointer.dereference("/i\\j"), Some(&json!(5)));
    assert_eq!(pointer.dereference("/k\"l"), Some(&json!(6)));
    assert_eq!(pointer.dereference("/ "), Some(&json!(7)));
    assert_eq!(pointer.dereference("/m~0n"), Some(&json!(8)));
}

#[test]
fn root_returns_whole_document() {
    let doc = library();
    assert_eq!(Resolver::new(&doc).dereference(""), Some(&library()));
    assert_eq!(Resolver::new(&doc).root(), &library());
}

#[test]
fn nested_lookups() {
    let doc = library();
    let pointer = doc.resolver();
    assert_eq!(
        pointer.dereference("/library/name"),
        Some(&json!("library of congress"))
    );
    assert_eq!(
        pointer.dereference("/library/section/0/name"),
        Some(&json!("sci-fi"))
    );
    assert_eq!(
        pointer.dereference("/library/section/0/title/0/book/author/1"),
        Some(&json!("Jerry Pournelle"))
    );
}

#[test]
fn matches_manual_walk() {
    let doc = library();
    let pointer = doc.resolver();
    for p in [
        "/library",
        "/library/section/0/title/1/book",
        "/library/section/0/title/1/book/author/0",
    ] {
        let mut manual = &doc;
        for token in parse_json_pointer(p) {
            manual = match manual {
                Value::Array(arr) => &arr[token.parse::<usize>().unwrap()],
                other => &other[token.as_str()],
            };
        }
        assert_eq!(pointer.dereference(p), Some(manual), "{p}");
    }
}

#[test]
fn missing_is_none() {
    let doc = json!({});
    let pointer = doc.resolver();
    assert_eq!(pointer.dereference("/x/y"), None);
    assert_eq!(pointer.dereference("/x"), None);

    let doc = library();
    let pointer = doc.resolver();
    assert_eq!(pointer.dereference("/library/section/5/name"), None);
    assert_eq!(pointer.dereference("/library/section/name"), None);
    assert_eq!(pointer.dereference("/library/name/0"), None);
    assert_eq!(pointer.dereference("/library/section/-"), None);
    assert_eq!(pointer.dereference("/library/section/-1"), None);
}

#[test]
fn lenient_index_tokens() {
    let doc = json!(["a", "b"]);
    let pointer = doc.resolver();
    assert_eq!(pointer.dereference("/01"), Some(&json!("b")));
    assert_eq!(pointer.dereference("/+1"), Some(&json!("b")));
    assert_eq!(pointer.dereference("/00"), Some(&json!("a")));
    assert_eq!(pointer.dereference("/1.0"), None);

    let doc = library();
    assert_eq!(
        doc.resolver().dereference("/library/section/00/name"),
        Some(&json!("sci-fi"))
    );
}

#[test]
fn generation_offsets() {
    let doc = json!({"a": {"b": "leaf"}});
    let pointer = doc.resolver();
    assert_eq!(pointer.dereference_generation("/a/b", 0), Some(&json!("leaf")));
    assert_eq!(pointer.dereference_generation("/a/b", 1), Some(&json!({"b": "leaf"})));
    assert_eq!(pointer.dereference_generation("/a/b", 2), Some(&doc));
    assert_eq!(pointer.dereference_generation("/a/b", 3), None);
    assert_eq!(pointer.dereference_generation("", 1), None);
}

#[test]
fn generation_past_a_missing_segment() {
    let doc = json!({"a": {"b": 1}});
    let pointer = doc.resolver();
    // "/a/x/y" fails at x: ancestors above the failure still resolve
    assert_eq!(pointer.dereference_generation("/a/x/y", 0), None);
    assert_eq!(pointer.dereference_generation("/a/x/y", 1), None);
    assert_eq!(pointer.dereference_generation("/a/x/y", 2), Some(&json!({"b": 1})));
}

#[test]
fn trail_records_visited_nodes() {
    let doc = json!({"a": [{"b": 1}]});
    let pointer = doc.resolver();
    let trail = pointer.trail("/a/0/c").expect("well-formed");
    assert_eq!(trail.token_count(), 4);
    assert_eq!(trail.nodes().len(), 3);
    assert!(!trail.is_complete());
}

#[test]
fn dereference_does_not_mutate() {
    let doc = json!({"list": [1, 2]});
    let before = doc.clone();
    let pointer = doc.resolver();
    let _ = pointer.dereference("/list/-");
    let _ = pointer.dereference("/list/9/x");
    assert_eq!(pointer.root(), &before);
}
