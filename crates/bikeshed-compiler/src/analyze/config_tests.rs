use bikeshed_core::ExtendedAttribute;

use super::config::{ExposurePolicy, LinkConfig, MemberCollision};
use crate::test_utils::{expect_model, expect_model_with};

#[test]
fn default_exposure_attributes() {
    let policy = ExposurePolicy::default();

    assert_eq!(policy.attributes().collect::<Vec<_>>(), ["Exposed", "Global"]);
    assert!(policy.is_global(&[ExtendedAttribute::named("Exposed")]));
    assert!(!policy.is_global(&[ExtendedAttribute::named("SecureContext")]));
    assert!(!ExposurePolicy::empty().is_global(&[ExtendedAttribute::named("Exposed")]));
}

#[test]
fn default_link_config() {
    let config = LinkConfig::default();

    assert_eq!(config.collision, MemberCollision::LastWins);
    assert!(config.is_external("BufferSource"));
    assert!(config.is_external("ArrayBufferView"));
    assert!(!config.is_external("Ghost"));
}

#[test]
fn custom_exposure_attribute() {
    let idl = "[LegacyWindowAlias=Foo] interface Aliased {}; interface Plain {};";

    let model = expect_model(idl);
    assert_eq!(model.globals().count(), 0);

    let model = expect_model_with(idl, LinkConfig::new().global_attribute("LegacyWindowAlias"));
    assert_eq!(model.globals().collect::<Vec<_>>(), ["Aliased"]);
}

#[test]
fn empty_policy_makes_nothing_global() {
    let model = expect_model_with(
        "[Exposed=Window] interface A {};",
        LinkConfig::new().exposure(ExposurePolicy::empty()),
    );

    assert!(!model.is_global("A"));
}

#[test]
fn extra_external_names_resolve() {
    let model = expect_model_with(
        "interface A { attribute WindowProxy w; };",
        LinkConfig::new().external("WindowProxy"),
    );

    assert!(model.get("WindowProxy").is_none());
    assert!(model.get("A").is_some());
}
