// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Standard catalog contents and introspection.

use wamp_proto::{catalog, Catalog, Codec, FieldDescriptor, FieldKind, WampError};

#[test]
fn request_id_usage() {
    let usages = catalog().types_with_field("request_id");
    let names: Vec<&str> = usages.iter().map(|u| u.type_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Error",
            "Publish",
            "Published",
            "Subscribe",
            "Subscribed",
            "Unsubscribe",
            "Unsubscribed",
            "Call",
            "Cancel",
            "Result",
            "Register",
            "Registered",
            "Unregister",
            "Unregistered",
            "Invocation",
            "Interrupt",
            "Yield",
        ]
    );
    // request_id sits right after the code everywhere except ERROR
    for usage in &usages {
        let expected = if usage.type_name == "Error" { 1 } else { 0 };
        assert_eq!(usage.position, expected, "{}", usage.type_name);
        assert!(usage.required);
    }
}

#[test]
fn field_positions() {
    let catalog = catalog();
    assert_eq!(catalog.field_position("Hello", "realm"), Some(0));
    assert_eq!(catalog.field_position("Call", "procedure"), Some(2));
    assert_eq!(catalog.field_position("Error", "error"), Some(3));
    assert_eq!(catalog.field_position("Event", "publication_id"), Some(1));
    assert_eq!(catalog.field_position("Register", "options"), Some(1));
    assert_eq!(catalog.field_position("Hello", "procedure"), None);
    assert_eq!(catalog.field_position("NoSuchType", "realm"), None);
}

#[test]
fn field_names_are_sorted_and_distinct() {
    let names = catalog().field_names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
    for expected in ["args", "kwargs", "realm", "signature", "request_code", "topic"] {
        assert!(names.contains(&expected), "{expected}");
    }
}

#[test]
fn field_index_report() {
    let report = catalog().field_index().to_string();
    assert!(report.starts_with("realm\n - Hello: 1\n"), "{report}");
    assert!(report.contains("signature\n - Authenticate: 1 !\n"));
    assert!(report.contains(" - Hello: 2 *\n"));
    assert!(report.contains("request_code\n - Error: 1\n"));
}

#[test]
fn every_optional_field_is_trailing() {
    for desc in catalog().iter() {
        let first_optional = desc.fields.iter().position(|f| !f.required);
        if let Some(start) = first_optional {
            assert!(
                desc.fields[start..].iter().all(|f| !f.required),
                "{}",
                desc.type_name
            );
        }
        assert_eq!(desc.min_wire_len(), 1 + desc.required_count());
    }
}

#[test]
fn fresh_catalog_matches_global() {
    let fresh = Catalog::wamp().expect("standard table");
    assert_eq!(fresh.len(), catalog().len());
    for (a, b) in fresh.iter().zip(catalog().iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn extended_catalog() {
    let mut extended = Catalog::wamp().expect("standard table");

    // Standard codes and names are taken.
    assert_eq!(
        extended.register("Ping", 1, vec![]).unwrap_err(),
        WampError::DuplicateCode(1)
    );
    assert_eq!(
        extended.register("Hello", 1000, vec![]).unwrap_err(),
        WampError::DuplicateName("Hello".into())
    );

    extended
        .register(
            "Ping",
            1000,
            vec![
                FieldDescriptor::new("request_id", FieldKind::Id),
                FieldDescriptor::new("payload", FieldKind::List).optional(),
            ],
        )
        .expect("register Ping");
    assert_eq!(extended.len(), catalog().len() + 1);

    let codec = Codec::with_catalog(&extended);
    let ping = codec
        .decode(&wamp_proto::wamp_value!([1000, 12]))
        .expect("decode ping");
    assert_eq!(ping.get("payload"), Some(&wamp_proto::Value::list()));

    // Standard messages still decode through the extended catalog.
    assert!(codec.decode(&wamp_proto::wamp_value!([1, "realm1"])).is_ok());
}
