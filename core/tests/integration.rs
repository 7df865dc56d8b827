//! Endpoint behavior against the live mock server.
//!
//! # Design
//! Each test starts its own mock server on a random port, then drives the
//! endpoints over real HTTP through the default ureq transport.

use std::net::SocketAddr;

use placeholder_core::{
    ApiError, Comment, CommentEndpoint, HttpStatus, RequestSpec, User, UserEndpoint,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Serve the mock API on a background thread and return its address.
fn start_server(seeded: bool) -> SocketAddr {
    init_tracing();
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            if seeded {
                mock_server::run_seeded(listener).await
            } else {
                mock_server::run(listener).await
            }
        })
        .unwrap();
    });

    addr
}

fn spec(addr: SocketAddr) -> RequestSpec {
    RequestSpec::new(&format!("http://{addr}"))
}

#[test]
fn user_lifecycle() {
    let users = UserEndpoint::new(spec(start_server(false)));

    // Step 1: empty collection.
    assert!(users.get_all().unwrap().is_empty());

    // Step 2: create.
    let created = users
        .create(&User::new("Ada Lovelace", "ada", "ada@example.com"))
        .unwrap();
    let id = created.id.clone().expect("server assigns an id");
    assert_eq!(created.name, "Ada Lovelace");

    // Step 3: fetch returns the same record.
    assert_eq!(users.get_by_id(&id).unwrap(), created);

    // Step 4: update.
    let updated = users
        .update(&id, &User::new("Ada King", "ada", "ada@analytical.engine"))
        .unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.email, "ada@analytical.engine");

    // Step 5: listing shows the replacement.
    assert_eq!(users.get_all().unwrap(), vec![updated]);
}

#[test]
fn comment_create_then_get_round_trips() {
    let comments = CommentEndpoint::new(spec(start_server(true)));

    let created = comments
        .create(&Comment::new("hello", "bob@example.com", "first!").on_post(2))
        .unwrap();
    assert_eq!(created.id, Some(4));
    assert_eq!(created.post_id, Some(2));

    let fetched = comments.get_by_id(&4).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn get_by_id_body_carries_requested_id() {
    let comments = CommentEndpoint::new(spec(start_server(true)));

    for id in [1u64, 2, 3] {
        let resp = comments.get_by_id_with_status(&id, HttpStatus::Ok).unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.json().unwrap()["id"], id);
    }
}

#[test]
fn get_all_matches_collection_size_and_order() {
    let addr = start_server(true);
    let comments = CommentEndpoint::new(spec(addr));

    comments
        .create(&Comment::new("late", "carol@example.com", "appended"))
        .unwrap();

    let all = comments.get_all().unwrap();
    let ids: Vec<u64> = all.iter().filter_map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let users = UserEndpoint::new(spec(addr));
    let raw = users.get_all_with_status(HttpStatus::Ok).unwrap();
    let reported = raw.json().unwrap().as_array().map(Vec::len);
    assert_eq!(reported, Some(users.get_all().unwrap().len()));
}

#[test]
fn create_with_unexpected_status_fails() {
    let users = UserEndpoint::new(spec(start_server(false)));

    let err = users
        .create_with_status(&User::new("Eve", "eve", "eve@example.com"), HttpStatus::Ok)
        .unwrap_err();
    match err {
        ApiError::UnexpectedStatus { expected, actual, .. } => {
            assert_eq!(expected, 200);
            assert_eq!(actual, 201);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn strict_get_of_missing_record_fails_on_status() {
    let users = UserEndpoint::new(spec(start_server(true)));

    let err = users.get_by_id(&"missing".to_string()).unwrap_err();
    assert_eq!(err.actual_status(), Some(404));
}

#[test]
fn flexible_operations_accept_requested_failure_status() {
    let addr = start_server(true);
    let users = UserEndpoint::new(spec(addr));
    let comments = CommentEndpoint::new(spec(addr));

    let resp = users
        .get_by_id_with_status(&"missing".to_string(), HttpStatus::NotFound)
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = comments
        .update_with_status(
            &Comment::new("x", "x@example.com", "x"),
            &404,
            HttpStatus::NotFound,
        )
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind and drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let users = UserEndpoint::new(spec(addr));

    let err = users.get_all().unwrap_err();
    assert!(matches!(err, ApiError::TransportError(_)));
}

#[test]
fn endpoints_are_usable_from_several_threads() {
    let comments = std::sync::Arc::new(CommentEndpoint::new(spec(start_server(true))));

    let handles: Vec<_> = (1..=3u64)
        .map(|id| {
            let comments = std::sync::Arc::clone(&comments);
            std::thread::spawn(move || comments.get_by_id(&id).unwrap())
        })
        .collect();

    for (expected, handle) in (1..=3u64).zip(handles) {
        assert_eq!(handle.join().unwrap().id, Some(expected));
    }
}

#[test]
fn reserved_characters_stay_inside_the_id_segment() {
    let users = UserEndpoint::new(spec(start_server(true)));

    // Each id must arrive as one encoded segment.
    for id in ["1?x=2", "../users/2", "a b"] {
        let resp = users
            .get_by_id_with_status(&id.to_string(), HttpStatus::NotFound)
            .unwrap();
        assert_eq!(resp.status(), 404, "{id}");
    }

    // A plain id still reaches its record.
    assert_eq!(users.get_by_id(&"1".to_string()).unwrap().username, "Bret");
}
