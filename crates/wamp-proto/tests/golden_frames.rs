// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Golden frames: WAMP v2 JSON messages as they appear on the wire.
//
// Each frame is parsed, decoded, converted to its typed form and back, then
// re-encoded and re-serialized. The output must match the input byte for
// byte. Frames are written compact with sorted dict keys, which is what
// serde_json emits for a BTreeMap.

#![allow(clippy::unreadable_literal)]

use wamp_proto::{Codec, CodecConfig, Message, MessageType, Serializer};

const FULL_FRAMES: &[(MessageType, &str)] = &[
    (
        MessageType::Hello,
        r#"[1,"somerealm",{"roles":{"publisher":{},"subscriber":{}}}]"#,
    ),
    (MessageType::Welcome, r#"[2,9129137332,{"roles":{"broker":{}}}]"#),
    (
        MessageType::Abort,
        r#"[3,{"message":"The realm does not exist."},"wamp.error.no_such_realm"]"#,
    ),
    (MessageType::Challenge, r#"[4,"ticket",{}]"#),
    (MessageType::Authenticate, r#"[5,"secret!!!",{}]"#),
    (MessageType::Goodbye, r#"[6,{},"wamp.close.system_shutdown"]"#),
    (
        MessageType::Error,
        r#"[8,34,713845233,{},"wamp.error.no_such_subscription",[],{}]"#,
    ),
    (
        MessageType::Publish,
        r#"[16,239714735,{},"com.myapp.mytopic1",["Hello, world!"],{}]"#,
    ),
    (MessageType::Published, r#"[17,239714735,4429313566]"#),
    (MessageType::Subscribe, r#"[32,713845233,{},"com.myapp.mytopic1"]"#),
    (MessageType::Subscribed, r#"[33,713845233,5512315355]"#),
    (MessageType::Unsubscribe, r#"[34,85346237,5512315355]"#),
    (MessageType::Unsubscribed, r#"[35,85346237]"#),
    (
        MessageType::Event,
        r#"[36,5512315355,4429313566,{},[],{"color":"orange","sizes":[23,42,7]}]"#,
    ),
    (
        MessageType::Call,
        r#"[48,7814135,{},"com.myapp.echo",["Hello, world!"],{}]"#,
    ),
    (MessageType::Cancel, r#"[49,7814135,{"mode":"kill"}]"#),
    (MessageType::Result, r#"[50,7814135,{},[30],{}]"#),
    (MessageType::Register, r#"[64,25349185,{},"com.myapp.myprocedure1"]"#),
    (MessageType::Registered, r#"[65,25349185,2103333224]"#),
    (MessageType::Unregister, r#"[66,788923562,2103333224]"#),
    (MessageType::Unregistered, r#"[67,788923562]"#),
    (
        MessageType::Invocation,
        r#"[68,6131533,9823526,{},["Hello, world!"],{}]"#,
    ),
    (MessageType::Interrupt, r#"[69,6131533,{"mode":"kill"}]"#),
    (MessageType::Yield, r#"[70,6131533,{},["Hello, world!"],{}]"#),
];

const SHORT_FRAMES: &[&str] = &[
    r#"[1,"somerealm"]"#,
    r#"[8,48,7814135,{},"wamp.error.no_such_procedure"]"#,
    r#"[16,239714735,{},"com.myapp.mytopic1"]"#,
    r#"[48,7814135,{},"com.myapp.ping"]"#,
    r#"[49,7814135]"#,
    r#"[50,7814135,{}]"#,
    r#"[70,6131533,{},[],{"k":1}]"#,
];

fn round_trip(codec: &Codec<'_>, frame: &str) -> (Message, String) {
    let json = Serializer::Json;
    let wire = json.deserialize(frame.as_bytes()).expect("parse frame");
    let typed = codec.decode_message(&wire).expect("decode frame");
    let encoded = codec.encode_message(&typed).expect("encode frame");
    let bytes = json.serialize(&encoded).expect("serialize frame");
    (typed, String::from_utf8(bytes).expect("utf-8"))
}

#[test]
fn golden_full_frames() {
    let codec = Codec::new();
    for (expected_type, frame) in FULL_FRAMES {
        let (typed, out) = round_trip(&codec, frame);
        assert_eq!(typed.message_type(), *expected_type, "{frame}");
        assert_eq!(out, *frame);
    }
}

#[test]
fn golden_frames_cover_every_type() {
    let mut seen: Vec<MessageType> = FULL_FRAMES.iter().map(|(t, _)| *t).collect();
    seen.sort();
    assert_eq!(seen, MessageType::ALL);
}

#[test]
fn golden_short_frames() {
    let codec = Codec::new()
        .with_config(CodecConfig::new().omit_trailing_defaults(true))
        .expect("config");
    for frame in SHORT_FRAMES {
        let (_, out) = round_trip(&codec, frame);
        assert_eq!(out, *frame);
    }
}

#[test]
fn golden_short_frames_expand_under_strict_encoding() {
    let (typed, out) = round_trip(&Codec::new(), r#"[1,"somerealm"]"#);
    assert_eq!(out, r#"[1,"somerealm",{}]"#);
    assert_eq!(typed.request_id(), None);

    let (typed, out) = round_trip(&Codec::new(), r#"[49,7814135]"#);
    assert_eq!(out, r#"[49,7814135,{}]"#);
    assert_eq!(typed.request_id(), Some(7814135));
}

#[test]
fn golden_authenticate_signature_hidden() {
    let (typed, _) = round_trip(&Codec::new(), r#"[5,"secret!!!",{}]"#);
    let rendered = format!("{typed:?}");
    assert!(!rendered.contains("secret!!!"), "{rendered}");
}
