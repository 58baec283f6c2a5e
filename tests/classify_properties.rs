//! Property tests for response classification.

use kong_admin::clients::check_status;
use proptest::prelude::*;
use serde_json::json;

fn non_success_status() -> impl Strategy<Value = u16> {
    prop_oneof![100u16..200, 300u16..600]
}

proptest! {
    #[test]
    fn test_any_2xx_is_not_an_error(
        status in 200u16..300,
        body in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        prop_assert!(check_status(status, &body).is_none());
    }

    #[test]
    fn test_message_field_is_extracted(
        status in non_success_status(),
        message in ".*",
        extra in any::<i64>(),
    ) {
        let body = serde_json::to_vec(&json!({"message": message, "extra": extra})).unwrap();

        let error = check_status(status, &body).unwrap();

        prop_assert_eq!(error.code(), status);
        prop_assert_eq!(error.message(), message.as_str());
        prop_assert_eq!(error.raw(), body.as_slice());
    }

    #[test]
    fn test_object_without_message_gives_empty_message(
        status in non_success_status(),
        key in "[a-z]{1,10}".prop_filter("not message", |k| k.as_str() != "message"),
        value in any::<u32>(),
    ) {
        let mut object = serde_json::Map::new();
        object.insert(key, json!(value));
        let body = serde_json::to_vec(&object).unwrap();

        let error = check_status(status, &body).unwrap();

        prop_assert_eq!(error.message(), "");
        prop_assert_eq!(error.raw(), body.as_slice());
    }

    #[test]
    fn test_plain_text_gives_parse_diagnostic(
        status in non_success_status(),
        text in "[g-zG-Z][a-zA-Z ]{0,40}",
    ) {
        let error = check_status(status, text.as_bytes()).unwrap();

        prop_assert!(error.message().starts_with("<failed to parse response body: "));
        prop_assert!(error.message().ends_with('>'));
        prop_assert_eq!(error.raw(), text.as_bytes());
    }
}
