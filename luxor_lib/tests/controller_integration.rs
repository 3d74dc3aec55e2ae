use luxor_lib::lists::{add_group, rename_group, reorder_groups, reorder_themes, set_group_intensity};
use luxor_lib::registry::{DispatchError, Registry};
use luxor_lib::scenes::{illuminate_all_themes, set_theme};
use luxor_lib::{CallContext, Config, LuxorError};
use wiremock::matchers::{body_json, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

fn controller_for(server: &MockServer) -> luxor_lib::Controller {
    Config::default()
        .with_base_url(&server.uri())
        .controller()
        .unwrap()
}

#[tokio::test]
async fn dispatch_by_name_with_request_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeGet.json"))
        .and(body_string(r#"{"ThemeIndex":3}"#))
        .respond_with(json_response(
            r#"{"Status":0,"Groups":[{"GroupNumber":2,"Intensity":50}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = Registry::with_all_methods();
    let value = registry
        .dispatch(
            &controller_for(&mock_server),
            &CallContext::new(),
            "ThemeGet",
            Some(r#"{"ThemeIndex":3}"#),
        )
        .await
        .unwrap();
    assert_eq!(value["Status"], 0);
    assert_eq!(value["Groups"][0]["GroupNumber"], 2);
    assert_eq!(value["Groups"][0]["Intensity"], 50);
}

#[tokio::test]
async fn dispatch_without_request_sends_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/IlluminateGroup.json"))
        .and(body_json(serde_json::json!({"GroupNumber": 0, "Intensity": 0})))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = Registry::with_all_methods();
    let value = registry
        .dispatch(
            &controller_for(&mock_server),
            &CallContext::new(),
            "IlluminateGroup",
            None,
        )
        .await
        .unwrap();
    assert_eq!(value, serde_json::json!({"Status": 0}));
}

#[tokio::test]
async fn dispatch_surfaces_application_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GroupListAdd.json"))
        .respond_with(json_response(r#"{"Status":205}"#))
        .mount(&mock_server)
        .await;

    let registry = Registry::with_all_methods();
    let err = registry
        .dispatch(
            &controller_for(&mock_server),
            &CallContext::new(),
            "GroupListAdd",
            Some(r#"{"GroupNumber":1,"Name":"Pool"}"#),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Call(_)), "{err}");
    assert!(err.to_string().contains("group number in use"), "{err}");
}

#[tokio::test]
async fn bad_request_text_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let registry = Registry::with_all_methods();
    let err = registry
        .dispatch(
            &controller_for(&mock_server),
            &CallContext::new(),
            "ThemeGet",
            Some(r#"{"ThemeIndex":"A"}"#),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::BadRequest { .. }), "{err}");
}

#[tokio::test]
async fn illuminates_every_theme_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeListGet.json"))
        .respond_with(json_response(
            r#"{"Status":0,"Restricted":0,"ThemeList":[
                {"Name":"Evening","ThemeIndex":0,"OnOff":0},
                {"Name":"Party","ThemeIndex":3,"OnOff":0}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/IlluminateTheme.json"))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    let themes = illuminate_all_themes(&controller_for(&mock_server), &CallContext::new())
        .await
        .unwrap();
    assert_eq!(themes.len(), 2);

    let requests = mock_server.received_requests().await.unwrap();
    let illuminated: Vec<serde_json::Value> = requests
        .iter()
        .filter(|r| r.url.path() == "/IlluminateTheme.json")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert_eq!(
        illuminated,
        vec![
            serde_json::json!({"ThemeIndex": 0, "OnOff": 1}),
            serde_json::json!({"ThemeIndex": 3, "OnOff": 1}),
        ]
    );
}

#[tokio::test]
async fn illuminate_all_stops_on_first_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeListGet.json"))
        .respond_with(json_response(
            r#"{"ThemeList":[{"Name":"A","ThemeIndex":0},{"Name":"B","ThemeIndex":1}]}"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/IlluminateTheme.json"))
        .respond_with(json_response(r#"{"Status":243}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = illuminate_all_themes(&controller_for(&mock_server), &CallContext::new())
        .await
        .unwrap_err();
    assert!(matches!(err, LuxorError::Api(_)), "{err}");
    assert!(err.to_string().contains("theme index out of range"), "{err}");
}

#[tokio::test]
async fn set_theme_by_letter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/IlluminateTheme.json"))
        .and(body_json(serde_json::json!({"ThemeIndex": 2, "OnOff": 0})))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let index = set_theme(&controller_for(&mock_server), &CallContext::new(), "c", false)
        .await
        .unwrap();
    assert_eq!(index, 2);
}

#[tokio::test]
async fn set_theme_rejects_bad_letter_before_calling() {
    let controller = Config::default()
        .with_base_url("http://127.0.0.1:9")
        .controller()
        .unwrap();
    let err = set_theme(&controller, &CallContext::new(), "27", true)
        .await
        .unwrap_err();
    assert!(matches!(err, LuxorError::InvalidInput(_)), "{err}");
}

#[tokio::test]
async fn canceled_scene_reports_cancellation() {
    let controller = Config::default()
        .with_base_url("http://127.0.0.1:9")
        .controller()
        .unwrap();
    let ctx = CallContext::new();
    ctx.cancel();
    let err = illuminate_all_themes(&controller, &ctx).await.unwrap_err();
    assert!(err.is_canceled(), "{err}");
}

#[tokio::test]
async fn add_group_sends_trimmed_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GroupListAdd.json"))
        .and(body_json(serde_json::json!({"GroupNumber": 4, "Name": "Pool"})))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let name = add_group(&controller_for(&mock_server), &CallContext::new(), 4, "  Pool ")
        .await
        .unwrap();
    assert_eq!(name, "Pool");
}

#[tokio::test]
async fn long_names_are_rejected_before_calling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    let long = "x".repeat(20);
    let err = add_group(&controller, &CallContext::new(), 1, &long)
        .await
        .unwrap_err();
    assert!(matches!(err, LuxorError::InvalidInput(_)), "{err}");
    let err = rename_group(&controller, &CallContext::new(), "Pool", &long)
        .await
        .unwrap_err();
    assert!(matches!(err, LuxorError::InvalidInput(_)), "{err}");
}

#[tokio::test]
async fn rename_group_reports_name_in_use() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GroupListRename.json"))
        .and(body_json(serde_json::json!({"OldName": "Pool", "NewName": "Spa"})))
        .respond_with(json_response(r#"{"Status":202}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = rename_group(&controller_for(&mock_server), &CallContext::new(), "Pool", "Spa")
        .await
        .unwrap_err();
    assert!(matches!(err, LuxorError::Api(_)), "{err}");
    assert!(err.to_string().contains("group name in use"), "{err}");
}

#[tokio::test]
async fn intensity_above_maximum_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/IlluminateGroup.json"))
        .and(body_json(serde_json::json!({"GroupNumber": 3, "Intensity": 100})))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    set_group_intensity(&controller, &CallContext::new(), 3, 100)
        .await
        .unwrap();
    let err = set_group_intensity(&controller, &CallContext::new(), 3, 101)
        .await
        .unwrap_err();
    assert!(matches!(err, LuxorError::InvalidInput(_)), "{err}");
}

#[tokio::test]
async fn reorder_groups_checks_current_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GroupListGet.json"))
        .respond_with(json_response(
            r#"{"Status":0,"GroupList":[
                {"GroupNumber":1,"Intensity":0,"Name":"Pool"},
                {"GroupNumber":2,"Intensity":0,"Name":"Path"}]}"#,
        ))
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/GroupListReorder.json"))
        .and(body_json(serde_json::json!({"GroupNumbers": [2, 1]})))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    reorder_groups(&controller, &CallContext::new(), &[2, 1])
        .await
        .unwrap();
    let err = reorder_groups(&controller, &CallContext::new(), &[2, 2])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("more than once"), "{err}");
}

#[tokio::test]
async fn reorder_themes_rejects_unknown_index() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ThemeListGet.json"))
        .respond_with(json_response(
            r#"{"ThemeList":[{"Name":"A","ThemeIndex":0},{"Name":"B","ThemeIndex":1}]}"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ThemeListReorder.json"))
        .respond_with(json_response(r#"{"Status":0}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = reorder_themes(&controller_for(&mock_server), &CallContext::new(), &[1, 0, 5])
        .await
        .unwrap_err();
    assert!(matches!(err, LuxorError::InvalidInput(_)), "{err}");
    assert!(err.to_string().contains("5 does not exist"), "{err}");
}
