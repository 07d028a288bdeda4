use tests::prelude::*;
use vizkit_core::Error;

async fn missing_indices(test: LookupTest) {
    let body = json!({ "code": "no_matching_indices", "message": "m" });
    test.reply(404, body);

    let options = FieldsForWildcard::new("nothing-*");
    let err = test.client.get_fields_for_wildcard(&options).await;
    let err = err.unwrap_err();

    assert!(err.is_missing_indices());
    assert!(!err.is_http_status());
    assert_eq!(err.to_string(), "m");
}

async fn other_404_is_generic(test: LookupTest) {
    let body = json!({ "statusCode": 404, "error": "Not Found", "message": "Not Found" });
    test.reply(404, body.clone());

    let options = FieldsForWildcard::new("logs-*");
    let err = test.client.get_fields_for_wildcard(&options).await;
    let err = err.unwrap_err();

    assert!(!err.is_missing_indices());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body(), Some(&body));
}

async fn message_falls_back_to_error_then_status(test: LookupTest) {
    test.reply(500, json!({ "error": "Internal Server Error" }));
    test.reply_raw(502, "<html>Bad Gateway</html>");

    let options = FieldsForWildcard::new("logs-*");
    let client = &test.client;

    let err = client.get_fields_for_wildcard(&options).await.unwrap_err();
    assert_eq!(err.to_string(), "Internal Server Error");

    let err = client.get_fields_for_wildcard(&options).await.unwrap_err();
    assert_eq!(err.to_string(), "502 Response");
    assert_eq!(err.body(), Some(&Value::Null));
}

async fn transport_failure_propagates(test: LookupTest) {
    let kind = std::io::ErrorKind::ConnectionRefused;
    let io = std::io::Error::new(kind, "connection refused");
    test.fail(Error::transport(io));

    let options = FieldsForWildcard::new("logs-*");
    let err = test.client.get_fields_for_wildcard(&options).await;
    let err = err.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

async fn missing_indices_can_be_treated_as_empty(test: LookupTest) {
    let body = json!({ "code": "no_matching_indices", "message": "none" });
    test.reply(404, body);

    let options = FieldsForTimePattern::new("[logs-]YYYY");
    let fields = match test.client.get_fields_for_time_pattern(&options).await {
        Err(err) if err.is_missing_indices() => vec![],
        other => other.unwrap(),
    };

    assert!(fields.is_empty());
}

tests!(
    missing_indices,
    other_404_is_generic,
    message_falls_back_to_error_then_status,
    transport_failure_propagates,
    missing_indices_can_be_treated_as_empty,
);
