//! Envelope shape tests: key set, double encoding, family mirroring, and
//! the fixed payload layouts.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeSet;

use serde_json::Value;

use pushprism_core::{assemble, assemble_envelope, GcmPriority, Message, Platform, PlatformLimits};

fn parse(s: &str) -> Value {
    serde_json::from_str(s).unwrap()
}

/// Inner payload of one envelope entry, after undoing the double encoding.
fn inner(envelope: &Value, key: &str) -> Value {
    let s = envelope[key].as_str().expect("platform entry must be a JSON string");
    parse(s)
}

#[test]
fn envelope_has_default_and_every_platform_key() {
    let mut msg = Message::new("some text");
    msg.title = Some("some title".to_string());

    let wire = assemble(&msg, &PlatformLimits::default()).unwrap();
    let env = parse(&wire);

    let obj = env.as_object().unwrap();
    assert_eq!(obj.len(), 7);
    assert_eq!(env["default"], "some text");
    for platform in Platform::ALL {
        assert!(obj.contains_key(platform.as_str()), "missing {platform}");
        assert!(obj[platform.as_str()].is_string(), "{platform} entry must be double-encoded");
    }
}

#[test]
fn apns_payload_is_aps_alert_with_body_and_title() {
    let mut msg = Message::new("some text");
    msg.title = Some("some title".to_string());

    let wire = assemble(&msg, &PlatformLimits::default()).unwrap();
    let apns = inner(&parse(&wire), "APNS");

    assert_eq!(apns.as_object().unwrap().len(), 1);
    assert_eq!(apns["aps"].as_object().unwrap().len(), 1);
    let alert = &apns["aps"]["alert"];
    assert_eq!(alert.as_object().unwrap().len(), 2);
    assert_eq!(alert["body"], "some text");
    assert_eq!(alert["title"], "some title");
}

#[test]
fn apns_variants_share_one_payload() {
    let env = assemble_envelope(&Message::new("mirror me"), &PlatformLimits::default()).unwrap();

    let apns = env.payload(Platform::Apns).unwrap();
    for variant in [
        Platform::ApnsVoip,
        Platform::ApnsSandbox,
        Platform::ApnsVoipSandbox,
    ] {
        assert_eq!(env.payload(variant).unwrap(), apns, "{variant} drifted from APNS");
    }
}

#[test]
fn gcm_payload_has_fixed_five_keys_with_nulls() {
    let wire = assemble(&Message::new("some text"), &PlatformLimits::default()).unwrap();
    let gcm = inner(&parse(&wire), "GCM");

    let obj = gcm.as_object().unwrap();
    assert_eq!(obj.len(), 5);
    assert_eq!(gcm["data"].as_object().unwrap().len(), 1);
    assert_eq!(gcm["data"]["message"], "some text");
    assert_eq!(gcm["collapse_key"], "do_not_collapse");
    assert!(gcm["time_to_live"].is_null());
    assert_eq!(gcm["delay_while_idle"], false);
    assert!(gcm["priority"].is_null());
}

#[test]
fn gcm_delivery_options_pass_through() {
    let mut msg = Message::new("build ready");
    msg.collapse_key = "builds".to_string();
    msg.delay_while_idle = true;
    msg.priority = Some(GcmPriority::High);

    let wire = assemble(&msg, &PlatformLimits::default()).unwrap();
    let gcm = inner(&parse(&wire), "GCM");

    assert_eq!(gcm["collapse_key"], "builds");
    assert_eq!(gcm["delay_while_idle"], true);
    assert_eq!(gcm["priority"], "high");
}

#[test]
fn adm_payload_has_two_keys() {
    let wire = assemble(&Message::new("some text"), &PlatformLimits::default()).unwrap();
    let adm = inner(&parse(&wire), "ADM");

    let obj = adm.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(adm["data"].as_object().unwrap().len(), 1);
    assert_eq!(adm["data"]["message"], "some text");
    assert!(adm["expiresAfter"].is_null());
}

#[test]
fn unselected_platforms_are_omitted() {
    let mut msg = Message::new("android only");
    msg.platforms = BTreeSet::from([Platform::Gcm]);

    let wire = assemble(&msg, &PlatformLimits::default()).unwrap();
    let env = parse(&wire);

    let obj = env.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert!(obj.contains_key("default"));
    assert!(obj.contains_key("GCM"));
}

#[test]
fn envelope_key_order_is_canonical() {
    let wire = assemble(&Message::new("ordered"), &PlatformLimits::default()).unwrap();

    let mut last = 0;
    for key in [
        "default",
        "APNS",
        "APNS_VOIP",
        "APNS_SANDBOX",
        "APNS_VOIP_SANDBOX",
        "GCM",
        "ADM",
    ] {
        let pos = wire.find(&format!("\"{key}\":")).expect("key missing");
        assert!(pos > last, "{key} out of order");
        last = pos;
    }
}

#[test]
fn assembly_is_deterministic() {
    let mut msg = Message::new("same in, same out");
    msg.ttl = Some(300);
    msg.custom.insert("k".to_string(), Value::String("v".to_string()));

    let limits = PlatformLimits::default();
    assert_eq!(assemble(&msg, &limits).unwrap(), assemble(&msg, &limits).unwrap());
}

#[test]
fn struct_serialization_matches_assemble() {
    let msg = Message::new("two roads");
    let limits = PlatformLimits::default();

    let env = assemble_envelope(&msg, &limits).unwrap();
    assert_eq!(env.to_json().unwrap(), assemble(&msg, &limits).unwrap());
}

#[test]
fn contentless_message_is_rejected_eagerly() {
    let limits = PlatformLimits::default();

    let err = assemble_envelope(&Message::default(), &limits).unwrap_err();
    assert_eq!(err.kind().as_str(), "EMPTY_MESSAGE");

    let err = assemble_envelope(&Message::new(""), &limits).unwrap_err();
    assert_eq!(err.kind().as_str(), "EMPTY_MESSAGE");
}

#[test]
fn custom_only_message_gets_empty_default() {
    let mut msg = Message::default();
    msg.custom.insert("badge".to_string(), Value::from(3));

    let env = assemble_envelope(&msg, &PlatformLimits::default()).unwrap();
    assert_eq!(env.default, "");
}

#[test]
fn empty_platform_selection_is_rejected() {
    let mut msg = Message::new("nowhere to go");
    msg.platforms.clear();

    let err = assemble_envelope(&msg, &PlatformLimits::default()).unwrap_err();
    assert_eq!(err.kind().as_str(), "NO_PLATFORMS");
}
