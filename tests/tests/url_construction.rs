use tests::prelude::*;

async fn null_query_values_are_dropped(test: LookupTest) {
    let query = Query::new()
        .param("pattern", "logs-*")
        .param("meta_fields", Value::Null);
    let url = test.client.url(&["_fields_for_wildcard"], &query).unwrap();

    assert_eq!(url.query(), Some("pattern=logs-*"));
    assert!(!url.as_str().contains("meta_fields"));
}

async fn empty_segments_are_dropped(test: LookupTest) {
    let query = Query::new();
    let segments = ["", "_fields_for_wildcard", ""];
    let url = test.client.url(&segments, &query).unwrap();

    assert_eq!(
        url.as_str(),
        "http://localhost:5601/s/marketing/api/index_patterns/_fields_for_wildcard"
    );
}

async fn segments_are_encoded_independently(test: LookupTest) {
    let query = Query::new();
    let segments = ["a b", "c/d", "_fields_for_wildcard"];
    let url = test.client.url(&segments, &query).unwrap();

    assert_eq!(
        url.path(),
        "/s/marketing/api/index_patterns/a%20b/c%2Fd/_fields_for_wildcard"
    );
}

async fn query_values_are_encoded(test: LookupTest) {
    let query = Query::new().param("meta_fields", vec!["_id", "_source"]);
    let url = test.client.url(&["_fields_for_wildcard"], &query).unwrap();

    let expected = "meta_fields=%5B%22_id%22%2C%22_source%22%5D";
    assert_eq!(url.query(), Some(expected));
}

async fn no_request_is_sent(test: LookupTest) {
    let query = Query::new();
    test.client.url(&["_fields_for_wildcard"], &query).unwrap();
    assert!(test.log().is_empty());
}

tests!(
    null_query_values_are_dropped,
    empty_segments_are_dropped,
    segments_are_encoded_independently,
    query_values_are_encoded,
    no_request_is_sent,
);

#[test]
fn api_base_url_keeps_base_path() {
    let client = IndexPatternsApiClient::builder()
        .base_path("https://kibana.example.com:5601/")
        .transport(tests::RecordingTransport::new())
        .build()
        .unwrap();

    assert_eq!(
        client.api_base_url().as_str(),
        "https://kibana.example.com:5601/api/index_patterns/"
    );
}

#[test]
fn missing_base_path_is_an_error() {
    let err = IndexPatternsApiClient::builder()
        .transport(tests::RecordingTransport::new())
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "index patterns client requires a base path"
    );
}
