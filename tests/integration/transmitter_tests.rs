//! End-to-end sends through `CommandTransmitter` against a fake daemon socket.

use std::os::unix::net::UnixDatagram;

use sfptpdctl::{AppError, CommandPayload, CommandTransmitter, CtlConfig};

use super::test_helpers::{missing_socket, FakeDaemon};

#[test]
fn command_arrives_as_one_datagram() {
    let daemon = FakeDaemon::bind();
    let transmitter = CommandTransmitter::new(daemon.path());

    transmitter
        .send_command(["set", "priority", "10"])
        .expect("send succeeds");

    assert_eq!(daemon.recv(), b"set priority 10");
    daemon.assert_drained();
}

#[test]
fn empty_command_sends_zero_length_datagram() {
    let daemon = FakeDaemon::bind();
    let transmitter = CommandTransmitter::new(daemon.path());

    transmitter
        .send_command(Vec::<String>::new())
        .expect("empty send succeeds");

    assert!(daemon.recv().is_empty());
}

#[test]
fn repeated_sends_are_independent_and_ordered() {
    let daemon = FakeDaemon::bind();
    let transmitter = CommandTransmitter::new(daemon.path());

    transmitter.send_command(["status"]).expect("first send");
    transmitter.send_command(["status"]).expect("second send");
    transmitter.send_command(["exit"]).expect("third send");

    assert_eq!(daemon.recv(), b"status");
    assert_eq!(daemon.recv(), b"status");
    assert_eq!(daemon.recv(), b"exit");
    daemon.assert_drained();
}

#[test]
fn from_config_targets_configured_socket() {
    let daemon = FakeDaemon::bind();
    let config = CtlConfig::default()
        .with_socket_path(daemon.path())
        .expect("valid path");

    CommandTransmitter::from_config(&config)
        .send_payload(&CommandPayload::from_tokens(["logrotate"]))
        .expect("send succeeds");

    assert_eq!(daemon.recv(), b"logrotate");
}

#[test]
fn missing_endpoint_is_connection_error() {
    let (_dir, path) = missing_socket();
    let transmitter = CommandTransmitter::new(&path);

    for tokens in [vec![], vec!["status"], vec!["set", "priority", "10"]] {
        match transmitter.send_command(tokens) {
            Err(AppError::Connection(msg)) => {
                assert!(msg.contains(&*path.to_string_lossy()), "{msg}");
            }
            other => panic!("expected connection error, got {other:?}"),
        }
    }
}

#[test]
fn stale_socket_without_listener_is_connection_error() {
    let (_dir, path) = missing_socket();
    drop(UnixDatagram::bind(&path).expect("bind then close"));
    assert!(path.exists(), "socket file outlives its listener");

    let result = CommandTransmitter::new(&path).send_command(["status"]);
    assert!(matches!(result, Err(AppError::Connection(_))), "{result:?}");
}

#[test]
fn regular_file_endpoint_is_connection_error() {
    let (_dir, path) = missing_socket();
    std::fs::write(&path, b"not a socket").expect("write file");

    let result = CommandTransmitter::new(&path).send_command(["status"]);
    assert!(matches!(result, Err(AppError::Connection(_))), "{result:?}");
}

#[test]
fn oversized_payload_is_transmission_error() {
    let daemon = FakeDaemon::bind();
    let huge = "x".repeat(4 * 1024 * 1024);

    let result = CommandTransmitter::new(daemon.path()).send_command([huge.as_str()]);
    assert!(matches!(result, Err(AppError::Transmission(_))), "{result:?}");
}

#[test]
fn client_creates_no_files() {
    let daemon = FakeDaemon::bind();
    let dir = daemon.path().parent().expect("socket dir").to_path_buf();

    CommandTransmitter::new(daemon.path())
        .send_command(["status"])
        .expect("send succeeds");

    let entries = std::fs::read_dir(&dir).expect("read dir").count();
    assert_eq!(entries, 1, "only the daemon's socket should exist");
}
