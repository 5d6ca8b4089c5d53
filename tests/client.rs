use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use quickstack::contract::{CreateUserRequest, RandomIdGenerator, UpdateUserRequest};
use quickstack::infrastructure::http::{AppState, HttpServer};
use quickstack::infrastructure::{
    ClientError, HttpApiClient, HttpApiClientConfig, InMemoryUserDirectory, SystemProcessInfo,
};
use tokio::net::TcpListener;

/// 在随机端口启动真实服务端，返回监听地址
async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let state = AppState::new(
        Arc::new(InMemoryUserDirectory::new()),
        Arc::new(SystemProcessInfo::new(
            "QS_CLIENT_TEST_UNSET_ENV",
            "development",
        )),
        Arc::new(RandomIdGenerator),
    );
    let server = HttpServer::with_default_config(state);
    tokio::spawn(server.serve(listener, std::future::pending::<()>()));

    addr
}

fn client_for(addr: SocketAddr) -> HttpApiClient {
    HttpApiClient::new(HttpApiClientConfig::new(format!("http://{addr}"))).unwrap()
}

#[tokio::test]
async fn check_health_against_live_server() {
    let client = client_for(spawn_server().await);

    let health = client.check_health().await.unwrap();
    assert!(health.success);
    assert_eq!(health.message, "Backend server is healthy");
    assert_eq!(health.environment, "development");
    assert!(health.uptime >= 0.0);
    assert!(health.timestamp.ends_with('Z'));
}

#[tokio::test]
async fn ping_against_live_server() {
    let client = client_for(spawn_server().await);

    let resp = client.ping().await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.data, "pong");
}

#[tokio::test]
async fn user_round_trip_through_client() {
    let client = client_for(spawn_server().await);

    assert!(client.get_users().await.unwrap().data.is_empty());

    let created = client
        .create_user(&CreateUserRequest::new("Grace", "grace@example.com"))
        .await
        .unwrap();
    assert!(created.success);
    let user = created.data;
    assert_eq!(user.name, "Grace");

    let fetched = client.get_user(&user.id).await.unwrap();
    assert_eq!(fetched.data, user);

    let updated = client
        .update_user(
            &user.id,
            &UpdateUserRequest {
                name: Some("Grace Hopper".to_string()),
                email: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.data.name, "Grace Hopper");
    assert_eq!(updated.data.email, "grace@example.com");

    let all = client.get_users().await.unwrap();
    assert_eq!(all.data.len(), 1);
    assert_eq!(all.data[0].id, user.id);
}

#[tokio::test]
async fn remote_errors_carry_envelope_message() {
    let client = client_for(spawn_server().await);

    let err = client.get_user("does-not-exist").await.unwrap_err();
    match err {
        ClientError::Remote {
            status,
            message,
            code,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "User not found: does-not-exist");
            assert_eq!(code.as_deref(), Some("NOT_FOUND"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = client
        .create_user(&CreateUserRequest::new("", "nope"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(
        matches!(err, ClientError::Remote { ref code, .. } if code.as_deref() == Some("VALIDATION_ERROR"))
    );
}

#[tokio::test]
async fn reserved_characters_in_id_stay_in_one_segment() {
    let client = client_for(spawn_server().await);

    let err = client.get_user("a/b?c#d").await.unwrap_err();
    match err {
        ClientError::Remote { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "User not found: a/b?c#d");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_is_reported_locally() {
    // 绑定后立即释放端口，连接会被拒绝
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpApiClient::new(
        HttpApiClientConfig::new(format!("http://{addr}")).with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    let err = client.check_health().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_) | ClientError::Timeout));
    assert_eq!(err.status(), None);
}
