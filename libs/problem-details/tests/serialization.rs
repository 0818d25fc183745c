use problem_details::{ProblemDetails, status_reference};
use serde_json::Value;

fn as_object(p: &ProblemDetails) -> serde_json::Map<String, Value> {
    let bytes = p.to_json_bytes().unwrap();
    match serde_json::from_slice(&bytes).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[test]
fn fresh_problem_has_only_type_and_title() {
    let cases = [
        ("about:blank", "Not Found"),
        ("", ""),
        ("urn:x", "\u{fc}n\u{ef}c\u{f8}d\u{e9}"),
    ];

    for (t, title) in cases {
        let obj = as_object(&ProblemDetails::new(t, title));
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["type"], t);
        assert_eq!(obj["title"], title);
        for absent in ["status", "detail", "instance"] {
            assert!(!obj.contains_key(absent), "{absent} should be omitted");
        }
    }
}

#[test]
fn absent_members_are_never_null() {
    let json = String::from_utf8(
        ProblemDetails::new("about:blank", "x")
            .with_detail("d")
            .to_json_bytes()
            .unwrap(),
    )
    .unwrap();
    assert!(!json.contains("null"));
    assert!(!json.contains("status"));
    assert!(!json.contains("instance"));
}

#[test]
fn status_is_a_json_number() {
    for s in [100, 404, 599, 0, -1, i32::MAX] {
        let obj = as_object(&ProblemDetails::new("about:blank", "x").with_status(s));
        assert_eq!(obj["status"], Value::from(s));
    }
}

#[test]
fn detail_presence_round_trips() {
    let variants = [
        ProblemDetails::new("about:blank", "x"),
        ProblemDetails::new("about:blank", "x").with_detail(""),
        ProblemDetails::new("about:blank", "x").with_detail("oops"),
        ProblemDetails::new("about:blank", "x").with_instance(""),
        ProblemDetails::new("about:blank", "x").with_status(0),
        ProblemDetails::new("about:blank", "x")
            .with_status(422)
            .with_detail("bad")
            .with_instance("/orders/7"),
    ];

    for original in variants {
        let bytes = original.to_json_bytes().unwrap();
        let decoded: ProblemDetails = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(decoded, original);
        assert_eq!(decoded.status().is_some(), original.status().is_some());
        assert_eq!(decoded.detail().is_some(), original.detail().is_some());
        assert_eq!(decoded.instance().is_some(), original.instance().is_some());
    }
}

#[test]
fn deserializes_payload_with_missing_optionals() {
    let p: ProblemDetails =
        serde_json::from_str(r#"{"type":"about:blank","title":"Gone"}"#).unwrap();
    assert_eq!(p.type_url(), "about:blank");
    assert_eq!(p.title(), "Gone");
    assert_eq!(p.status(), None);
    assert_eq!(p.detail(), None);
    assert_eq!(p.instance(), None);
}

#[test]
fn from_status_embeds_reference() {
    let p = ProblemDetails::from_status(429).with_detail("slow down");
    let obj = as_object(&p);
    assert_eq!(obj["type"], status_reference(429));
    assert_eq!(obj["title"], "Too Many Requests");
    assert_eq!(obj["status"], 429);
}

#[test]
fn reference_lookup_examples() {
    assert_eq!(
        status_reference(200),
        "https://tools.ietf.org/html/rfc9110#section-15.3.1"
    );
    assert_eq!(
        status_reference(404),
        "https://tools.ietf.org/html/rfc9110#section-15.5.5"
    );
    assert_eq!(status_reference(999), "");
    assert_eq!(status_reference(-1), "");
}
