//! Envelope vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use pushprism_core::{assemble_envelope, PlatformLimits};

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn envelope_vectors() {
    let files = [
        "envelope_min.json",
        "envelope_full.json",
        "localized_no_args.json",
        "adm_custom_flatten.json",
        "too_large_apns.json",
        "empty_message.json",
    ];

    for f in files {
        let v = load(f);
        let msg = v.message.build();
        let res = assemble_envelope(&msg, &PlatformLimits::default());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.kind().as_str(), err.code, "vector={}", v.description);
            if let Some(name) = err.platform {
                let blamed = e.platform().map(|p| p.as_str());
                assert_eq!(blamed, Some(name.as_str()), "vector={}", v.description);
            }
            continue;
        }

        let env = res.expect("expected ok envelope");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(env.default, ex.default, "vector={}", v.description);

        for (name, expected) in &ex.platforms {
            let payload = env
                .payload(vector_loader::platform(name))
                .unwrap_or_else(|| panic!("platform {name} missing, vector={}", v.description));
            let actual: serde_json::Value = serde_json::from_str(payload).unwrap();
            assert_eq!(&actual, expected, "vector={} platform={name}", v.description);
        }
    }
}
