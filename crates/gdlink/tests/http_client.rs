//! Full client flows against a local mock of the database server.
//!
//! Response bodies come from `tests/fixtures/`, shaped like real captures.

use gdlink::prelude::*;
use gdlink::{Copyable, PropertyValue, ProtocolError};
use wiremock::matchers::{body_string_contains, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH: &str = include_str!("fixtures/search_levels.txt");
const DOWNLOAD: &str = include_str!("fixtures/download_level.txt");
const COMMENTS: &str = include_str!("fixtures/level_comments.txt");
const USER: &str = include_str!("fixtures/user_info.txt");
const MESSAGES: &str = include_str!("fixtures/messages.txt");
const MESSAGE: &str = include_str!("fixtures/message.txt");

async fn serve(server: &MockServer, endpoint: &str, body: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/database/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> Client {
    Client::new(ClientConfig::default().base_url(format!("{}/database/", server.uri())))
}

// =========================================================================
// Anonymous endpoints
// =========================================================================

#[tokio::test]
async fn test_user_info_fixture() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/database/getGJUserInfo20.php"))
        .and(body_string_contains("targetAccountID=71"))
        .and(body_string_contains("secret=Wmfd2893gb7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USER))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).user_info(71).await.unwrap();
    assert_eq!(user.username(), Some("RobTop"));
    assert_eq!(user.user_id(), Some(16));
    assert_eq!(user.account_id(), Some(71));
}

#[tokio::test]
async fn test_search_levels_fixture() {
    let server = MockServer::start().await;
    serve(&server, "getGJLevels21.php", SEARCH).await;

    let result = client_for(&server)
        .search_levels("", SearchType::MostLiked, 0)
        .await
        .unwrap();

    assert_eq!(result.levels.len(), 2);
    assert_eq!(result.levels[1].get("2"), Some("Bloodbath"));
    assert_eq!(result.creators.len(), 2);
    assert_eq!(
        result.creator_of(&result.levels[1]).map(|c| c.name.as_str()),
        Some("Riot")
    );
    assert_eq!(result.songs.len(), 1);
    assert_eq!(result.songs[0].get("2"), Some("At the Speed of Light"));
    assert_eq!(result.page.total, 9999);
    assert!(result.page.has_more());
}

#[tokio::test]
async fn test_download_level_fixture() {
    let server = MockServer::start().await;
    serve(&server, "downloadGJLevel22.php", DOWNLOAD).await;

    let level = client_for(&server).download_level(128).await.unwrap();
    assert_eq!(level.level_id().unwrap(), 128);
    assert_eq!(level.name(), Some("1st level"));
    assert_eq!(level.description().unwrap().as_deref(), Some("my first level"));
    assert_eq!(level.password().unwrap(), Copyable::Password("123456".into()));
}

#[tokio::test]
async fn test_level_comments_fixture() {
    let server = MockServer::start().await;
    serve(&server, "getGJComments21.php", COMMENTS).await;

    let result = client_for(&server)
        .level_comments(128, CommentSort::MostLiked, 0)
        .await
        .unwrap();

    assert_eq!(result.comments.len(), 2);
    let first = &result.comments[0];
    assert_eq!(first.text().unwrap(), "GG first try");
    assert_eq!(first.author_name(), Some("RobTop"));
    assert_eq!(first.author_account_id(), Some(71));
    assert_eq!(first.comment_id(), Some(98765));
    assert_eq!(result.comments[1].text().unwrap(), "how?");
    assert_eq!(result.comments[1].likes(), Some(-2));
    assert_eq!(result.page.total, 2);
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).user_info(71).await.unwrap_err();
    assert!(matches!(err, GdlinkError::Transport(_)), "{err}");
}

#[tokio::test]
async fn test_cors_prefix_routes_through_relay() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/relay/http:/+www\.boomlings\.com/database/getGJUserInfo20\.php$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USER))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::default().cors_prefix(format!("{}/relay/", server.uri()));
    let client = Client::new(config);
    let user = client.user_info(71).await.unwrap();
    assert_eq!(user.username(), Some("RobTop"));
}

// =========================================================================
// Logged-in flows
// =========================================================================

#[tokio::test]
async fn test_login_then_read_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/database/accounts/loginGJAccount.php"))
        .and(body_string_contains("userName=RobTop"))
        .respond_with(ResponseTemplate::new(200).set_body_string("71,16"))
        .mount(&server)
        .await;
    serve(&server, "getGJMessages20.php", MESSAGES).await;
    Mock::given(method("POST"))
        .and(path("/database/downloadGJMessage20.php"))
        .and(body_string_contains("messageID=777"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MESSAGE))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let account = client
        .login(&Credentials::new("RobTop", "hunter2"))
        .await
        .unwrap();

    let inbox = account.messages(0, false).await.unwrap();
    assert_eq!(inbox.messages.len(), 2);
    let first = &inbox.messages[0];
    assert_eq!(first.subject().unwrap(), "hello there");
    assert_eq!(first.username(), Some("Riot"));
    assert!(!first.is_read());

    let message = account.read_message(first.message_id().unwrap(), false).await.unwrap();
    assert_eq!(message.body, "see you there");
    assert_eq!(message.summary.subject().unwrap(), "hello there");
}

#[tokio::test]
async fn test_login_bad_password() {
    let server = MockServer::start().await;
    serve(&server, "accounts/loginGJAccount.php", "-1").await;

    let err = client_for(&server)
        .login(&Credentials::new("RobTop", "wrong"))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, GdlinkError::Session(gdlink::SessionError::InvalidCredentials)));
}

// =========================================================================
// Search → geometry
// =========================================================================

#[tokio::test]
async fn test_search_result_geometry_end_to_end() {
    let server = MockServer::start().await;
    serve(&server, "getGJLevels21.php", SEARCH).await;
    let client = client_for(&server);

    let result = client.search_levels("1st level", SearchType::Query, 0).await.unwrap();
    let level = gdlink::LevelDownload::from(result.levels[0].clone());
    let geometry = client.decode_geometry(&level).await.unwrap();

    assert_eq!(geometry.objects.len(), 12);
    let channels: Vec<_> = geometry
        .color_channels()
        .iter()
        .filter_map(|channel| channel.parse_field::<u32>("6"))
        .collect();
    assert_eq!(channels, vec![1000, 1001, 1004]);
    assert_eq!(geometry.objects[0].number(2), Some(15.0));
    assert_eq!(
        geometry.objects[3].get(31),
        Some(&PropertyValue::Text("aGVsbG8=".into()))
    );
}

#[tokio::test]
async fn test_download_geometry_bad_blob_is_protocol_error() {
    let server = MockServer::start().await;
    serve(&server, "downloadGJLevel22.php", "1:128:2:broken:4:H4sI@@@@:").await;
    let client = client_for(&server);

    let level = client.download_level(128).await.unwrap();
    let err = client.decode_geometry(&level).await.unwrap_err();
    assert!(matches!(err, GdlinkError::Protocol(ProtocolError::Codec(_))));
    assert_eq!(err.sentinel(), None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_download_geometry_offloaded_matches_inline() {
    let server = MockServer::start().await;
    serve(&server, "downloadGJLevel22.php", DOWNLOAD).await;

    let inline = client_for(&server);
    let offloaded = Client::new(inline.config().clone().offload_threshold(0));

    let level = inline.download_level(128).await.unwrap();
    let a = inline.decode_geometry(&level).await.unwrap();
    let b = offloaded.decode_geometry(&level).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.objects.len(), 12);
}
