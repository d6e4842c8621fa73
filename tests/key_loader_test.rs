//! Tests for KeyLoader against the real filesystem

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use ssh_copy_id::application::services::KeyLoader;
use ssh_copy_id::application::ApplicationError;
use ssh_copy_id::infrastructure::traits::RealFileSystem;

fn loader() -> KeyLoader {
    KeyLoader::new(Arc::new(RealFileSystem))
}

#[test]
fn given_key_file_when_load_then_returns_trimmed_content() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("id_ed25519.pub");
    fs::write(&path, "ssh-ed25519 AAAA... comment\n").unwrap();

    // Act
    let key = loader().load(&path).unwrap();

    // Assert
    assert_eq!(key.as_str(), "ssh-ed25519 AAAA... comment");
}

#[test]
fn given_arbitrary_content_when_load_then_accepted_verbatim() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("weird.pub");
    fs::write(&path, "  not a key at all, it's fine  ").unwrap();

    // Act
    let key = loader().load(&path).unwrap();

    // Assert
    assert_eq!(key.as_str(), "not a key at all, it's fine");
}

#[test]
fn given_missing_file_when_load_then_key_not_found() {
    // Act
    let err = loader().load(Path::new("/nonexistent/id.pub")).unwrap_err();

    // Assert
    match err {
        ApplicationError::KeyNotFound(path) => assert_eq!(path, Path::new("/nonexistent/id.pub")),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

#[test]
fn given_directory_when_load_then_read_error_with_path_context() {
    // Arrange
    let temp = TempDir::new().unwrap();

    // Act
    let err = loader().load(temp.path()).unwrap_err();

    // Assert
    match err {
        ApplicationError::OperationFailed { context, .. } => {
            assert!(context.starts_with("read public key:"), "context: {context}")
        }
        other => panic!("expected OperationFailed, got {other:?}"),
    }
}
