//! Integration tests for the HTTP transport.
//!
//! Each test starts a wiremock server on a random local port and points
//! the transport at it, so requests really go over the network.

#[cfg(feature = "http")]
mod http {
    use gdlink_transport::{HttpTransport, Transport, TransportError};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_form_sends_body_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/database/getGJUserInfo20.php"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("targetAccountID=71"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1:RobTop:2:16"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new();
        let url = format!("{}/database/getGJUserInfo20.php", server.uri());
        let text = transport
            .post_form(&url, "targetAccountID=71".into())
            .await
            .expect("request should succeed");

        assert_eq!(text, "1:RobTop:2:16");
    }

    #[tokio::test]
    async fn test_post_form_sentinel_body_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("-1"))
            .mount(&server)
            .await;

        let text = HttpTransport::new()
            .post_form(&server.uri(), String::new())
            .await
            .expect("sentinels are the protocol layer's business");
        assert_eq!(text, "-1");
    }

    #[tokio::test]
    async fn test_post_form_non_success_status_returns_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = HttpTransport::new()
            .post_form(&server.uri(), String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }), "{err}");
    }

    #[tokio::test]
    async fn test_post_form_unreachable_host_returns_request_error() {
        // Grab a free port, then release it so nothing is listening.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("should bind");
            format!("http://{}", listener.local_addr().expect("bound address"))
        };

        let err = HttpTransport::new()
            .post_form(&addr, String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Request { .. }), "{err}");
    }
}
