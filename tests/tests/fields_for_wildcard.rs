use pretty_assertions::assert_eq;
use tests::prelude::*;

async fn untyped_pattern_sends_one_request(test: LookupTest) {
    let field = json!({ "name": "@timestamp", "type": "date" });
    test.reply(200, json!({ "fields": [field.clone()] }));

    let options = FieldsForWildcard::new("logs-*");
    let fields = test.client.get_fields_for_wildcard(&options).await;

    assert_eq!(fields.unwrap(), [field]);

    let log = test.log();
    assert_eq!(log.len(), 1);
    assert_eq!(
        log.request(0).url.as_str(),
        "http://localhost:5601/s/marketing/api/index_patterns/_fields_for_wildcard?pattern=logs-*"
    );
}

async fn meta_fields_are_json_text(test: LookupTest) {
    test.reply(200, json!({ "fields": [] }));

    let options = FieldsForWildcard::new("logs-*").meta_fields(["_id", "_source"]);
    test.client.get_fields_for_wildcard(&options).await.unwrap();

    let request = test.log().request(0);
    assert_eq!(request.query_param("pattern").as_deref(), Some("logs-*"));
    assert_eq!(
        request.query_param("meta_fields").as_deref(),
        Some(r#"["_id","_source"]"#)
    );
}

async fn typed_pattern_sends_dependent_request(test: LookupTest) {
    let first = json!([
        { "name": "@timestamp", "type": "date", "aggregatable": true },
        { "name": "bytes", "type": "number", "aggregatable": true },
    ]);
    let second = json!([{ "name": "bytes", "type": "number", "aggregatable": false }]);

    test.reply(200, json!({ "fields": first.clone() }));
    test.reply(200, json!({ "fields": second.clone() }));

    let mut params = serde_json::Map::new();
    params.insert("rollup_index".to_string(), json!("rollup-logs"));

    let options = FieldsForWildcard::new("logs-*")
        .meta_fields(["_id"])
        .type_name("rollup")
        .params(params);
    let fields = test.client.get_fields_for_wildcard(&options).await;

    assert_eq!(Value::Array(fields.unwrap()), second);

    let log = test.log();
    assert_eq!(log.len(), 2);
    assert_eq!(
        log.paths(),
        [
            "/s/marketing/api/index_patterns/_fields_for_wildcard",
            "/s/marketing/api/index_patterns/rollup/_fields_for_wildcard",
        ]
    );

    let request = log.request(1);
    let sent_fields = request.query_param("fields").unwrap();
    let sent_fields: Value = serde_json::from_str(&sent_fields).unwrap();
    assert_eq!(sent_fields, first);
    assert_eq!(request.query_param("pattern").as_deref(), Some("logs-*"));

    let meta_fields = request.query_param("meta_fields");
    assert_eq!(meta_fields.as_deref(), Some(r#"["_id"]"#));
    assert_eq!(
        request.query_param("params").as_deref(),
        Some(r#"{"rollup_index":"rollup-logs"}"#)
    );
}

async fn typed_pattern_without_params_omits_them(test: LookupTest) {
    test.reply(200, json!({ "fields": [] }));
    test.reply(200, json!({ "fields": [] }));

    let options = FieldsForWildcard::new("logs-*").type_name("rollup");
    test.client.get_fields_for_wildcard(&options).await.unwrap();

    let request = test.log().request(1);
    assert_eq!(request.query_param("params"), None);
    assert_eq!(request.query_param("meta_fields"), None);
    assert_eq!(request.query_param("fields").as_deref(), Some("[]"));
}

async fn empty_type_name_is_untyped(test: LookupTest) {
    test.reply(200, json!({ "fields": [{ "name": "a" }] }));

    let options = FieldsForWildcard::new("logs-*").type_name("");
    let fields = test.client.get_fields_for_wildcard(&options).await;

    assert_eq!(fields.unwrap(), [json!({ "name": "a" })]);
    assert_eq!(test.log().len(), 1);
}

async fn type_name_is_one_encoded_segment(test: LookupTest) {
    test.reply(200, json!({ "fields": [] }));
    test.reply(200, json!({ "fields": [] }));

    let options = FieldsForWildcard::new("logs-*").type_name("my/type");
    test.client.get_fields_for_wildcard(&options).await.unwrap();

    assert_eq!(
        test.log().request(1).url.path(),
        "/s/marketing/api/index_patterns/my%2Ftype/_fields_for_wildcard"
    );
}

async fn first_failure_skips_dependent_request(test: LookupTest) {
    let message = "No indices match pattern \"logs-*\"";
    let body = json!({ "code": "no_matching_indices", "message": message });
    test.reply(404, body);
    test.reply(200, json!({ "fields": [] }));

    let options = FieldsForWildcard::new("logs-*").type_name("rollup");
    let err = test.client.get_fields_for_wildcard(&options).await;

    assert!(err.unwrap_err().is_missing_indices());
    assert_eq!(test.log().len(), 1);
    assert_eq!(test.pending_replies(), 1);
}

async fn dependent_failure_is_returned(test: LookupTest) {
    let body = json!({ "error": "Bad Request", "message": "[rollup_index] is required" });
    test.reply(200, json!({ "fields": [] }));
    test.reply(400, body);

    let options = FieldsForWildcard::new("logs-*").type_name("rollup");
    let err = test.client.get_fields_for_wildcard(&options).await;
    let err = err.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "[rollup_index] is required");
}

tests!(
    untyped_pattern_sends_one_request,
    meta_fields_are_json_text,
    typed_pattern_sends_dependent_request,
    typed_pattern_without_params_omits_them,
    empty_type_name_is_untyped,
    type_name_is_one_encoded_segment,
    first_failure_skips_dependent_request,
    dependent_failure_is_returned,
);
