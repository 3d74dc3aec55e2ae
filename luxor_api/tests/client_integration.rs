use luxor_api::types::{GroupListGetRequest, ThemeGetRequest, ThemeListGetRequest};
use luxor_api::{methods, CallContext, Controller, DeviceStatus, Error};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

async fn theme_get(server_url: &str) -> Result<luxor_api::types::ThemeGetResponse, Error> {
    let controller = Controller::with_base_url(server_url).unwrap();
    controller
        .theme_get(&CallContext::new(), &ThemeGetRequest { theme_index: 0 })
        .await
}

#[tokio::test]
async fn theme_get_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"ThemeIndex":0}"#))
        .respond_with(json_response(&load_fixture("theme_get.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resp = theme_get(&mock_server.uri()).await.unwrap();
    assert_eq!(resp.groups.len(), 2);
    assert_eq!(resp.groups[0].group_number, 0);
    assert_eq!(resp.groups[0].intensity, 26);
    assert_eq!(resp.groups[1].group_number, 1);
    assert_eq!(resp.groups[1].intensity, 42);
}

#[tokio::test]
async fn trailing_slash_on_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GroupListGet.json"))
        .respond_with(json_response(&load_fixture("group_list_get.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = Controller::with_base_url(&format!("{}/", mock_server.uri())).unwrap();
    let resp = controller
        .group_list_get(&CallContext::new(), &GroupListGetRequest {})
        .await
        .unwrap();
    assert_eq!(resp.group_list.len(), 3);
}

#[tokio::test]
async fn bad_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Horrible problem\n"))
        .mount(&mock_server)
        .await;

    let err = theme_get(&mock_server.uri()).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { .. }), "{err}");
    let msg = err.to_string();
    assert!(msg.contains("Horrible problem"), "{msg}");
    assert!(msg.contains("500"), "{msg}");
    assert!(msg.contains("ThemeGet"), "{msg}");
}

#[tokio::test]
async fn bad_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(load_fixture("theme_get.json"), "text/plain"),
        )
        .mount(&mock_server)
        .await;

    let err = theme_get(&mock_server.uri()).await.unwrap_err();
    assert!(matches!(err, Error::ContentType { .. }), "{err}");
    assert!(err.to_string().contains("text/plain"), "{err}");
}

#[tokio::test]
async fn content_type_parameters_are_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(load_fixture("theme_get.json"), "application/json; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let err = theme_get(&mock_server.uri()).await.unwrap_err();
    assert!(matches!(err, Error::ContentType { .. }), "{err}");
}

#[tokio::test]
async fn bad_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .respond_with(json_response("asdf"))
        .mount(&mock_server)
        .await;

    let err = theme_get(&mock_server.uri()).await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }), "{err}");
    assert!(err.to_string().contains("asdf"), "{err}");
}

#[tokio::test]
async fn wrong_shape_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .respond_with(json_response(r#"{"Groups":"nope"}"#))
        .mount(&mock_server)
        .await;

    let err = theme_get(&mock_server.uri()).await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }), "{err}");
    assert!(err.to_string().contains("nope"), "{err}");
}

#[tokio::test]
async fn bad_application_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .respond_with(json_response(r#"{"Status":1}"#))
        .mount(&mock_server)
        .await;

    let err = theme_get(&mock_server.uri()).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.status()), Some(DeviceStatus::UnknownMethod));
    assert!(err.to_string().contains("unknown method"), "{err}");
}

#[tokio::test]
async fn unrecognized_application_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .respond_with(json_response(r#"{"Status":999}"#))
        .mount(&mock_server)
        .await;

    let err = theme_get(&mock_server.uri()).await.unwrap_err();
    assert!(err.to_string().contains("unknown status 999"), "{err}");
}

#[tokio::test]
async fn status_reply_keeps_response_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeListGet.json"))
        .respond_with(json_response(
            r#"{"Status":102,"Restricted":1,"ThemeList":[{"Name":"Evening","ThemeIndex":0,"OnOff":0}]}"#,
        ))
        .mount(&mock_server)
        .await;

    let controller = Controller::with_base_url(&mock_server.uri()).unwrap();
    let reply = controller
        .call_with_status::<methods::ThemeListGet>(&CallContext::new(), &ThemeListGetRequest {})
        .await
        .unwrap();
    assert_eq!(reply.method, "ThemeListGet");
    assert_eq!(reply.status, DeviceStatus::InvalidRequest);
    assert!(reply.response.is_restricted());
    assert_eq!(reply.response.theme_list[0].name, "Evening");

    let err = reply.into_result().unwrap_err();
    assert_eq!(err.to_string(), "ThemeListGet: invalid request");
}

#[tokio::test]
async fn post_failed_on_bad_scheme() {
    let controller = Controller::with_base_url("badscheme://").unwrap();
    let err = controller
        .theme_get(&CallContext::new(), &ThemeGetRequest { theme_index: 0 })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport { .. }), "{err}");
    assert!(err.to_string().contains("badscheme"), "{err}");
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = Controller::with_base_url(&format!("http://{}", addr)).unwrap();
    let err = controller
        .theme_get(&CallContext::new(), &ThemeGetRequest { theme_index: 0 })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport { .. }), "{err}");
    assert!(err.to_string().contains(&addr.to_string()), "{err}");
}

#[tokio::test]
async fn concurrent_calls_share_one_controller() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .respond_with(json_response(&load_fixture("theme_get.json")))
        .expect(8)
        .mount(&mock_server)
        .await;

    let controller = Controller::with_base_url(&mock_server.uri()).unwrap();
    let mut handles = Vec::new();
    for index in 0..8u8 {
        let controller = controller.clone();
        handles.push(tokio::spawn(async move {
            controller
                .theme_get(&CallContext::new(), &ThemeGetRequest { theme_index: index })
                .await
        }));
    }
    for handle in handles {
        let resp = handle.await.unwrap().unwrap();
        assert_eq!(resp.groups.len(), 2);
    }
}
