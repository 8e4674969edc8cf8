// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use wamp_proto::{Codec, Serializer};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = Serializer::MsgPack.deserialize(data) else {
        return;
    };

    // Anything that decodes must re-encode, and survive a second decode.
    let codec = Codec::new();
    if let Ok(message) = codec.decode(&value) {
        let wire = codec.encode(&message).expect("decoded message must re-encode");
        let again = codec.decode(&wire).expect("re-encoded message must decode");
        assert_eq!(again.code(), message.code());
        let _ = Serializer::MsgPack.serialize(&wire);
    }

    let _ = codec.decode_message(&value);
});
