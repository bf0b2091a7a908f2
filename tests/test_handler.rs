use std::fs;
use std::path::PathBuf;

use staticd::files::StaticHandler;
use staticd::http::response::StatusCode;

fn test_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "staticd-handler-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();
    root
}

#[tokio::test]
async fn test_root_route_serves_index() {
    let root = test_root("index");
    fs::write(root.join("index.html"), "<h1>home</h1>").unwrap();

    let handler = StaticHandler::new(&root).unwrap();
    let response = handler.serve("/").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"<h1>home</h1>".to_vec());
    assert_eq!(
        response.headers.get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_about_route_serves_about_page() {
    let root = test_root("about");
    fs::write(root.join("about.html"), "<h1>about</h1>").unwrap();

    let handler = StaticHandler::new(&root).unwrap();
    let response = handler.serve("/about").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"<h1>about</h1>".to_vec());

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_fixed_route_with_missing_file_is_500() {
    // Fixed routes skip the existence check, so a missing index.html is a
    // read failure rather than a 404
    let root = test_root("missing-index");

    let handler = StaticHandler::new(&root).unwrap();
    let response = handler.serve("/").await;

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert_eq!(response.body, b"Failed to read file".to_vec());

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_static_fallthrough_serves_other_files() {
    let root = test_root("fallthrough");
    fs::write(root.join("notes.txt"), "plain text").unwrap();

    let handler = StaticHandler::new(&root).unwrap();
    let response = handler.serve("/notes.txt").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"plain text".to_vec());
    assert_eq!(
        response.headers.get("Content-Type").unwrap(),
        "text/plain; charset=utf-8"
    );

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_unresolved_path_is_404() {
    let root = test_root("unresolved");

    let handler = StaticHandler::new(&root).unwrap();
    let response = handler.serve("/missing.xyz").await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"Page Not Found".to_vec());

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_directory_path_is_404() {
    let root = test_root("dir");
    fs::create_dir_all(root.join("images")).unwrap();

    let handler = StaticHandler::new(&root).unwrap();
    let response = handler.serve("/images").await;

    assert_eq!(response.status, StatusCode::NotFound);

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_content_length_matches_body() {
    let root = test_root("length");
    fs::write(root.join("index.html"), "0123456789").unwrap();

    let handler = StaticHandler::new(&root).unwrap();
    let response = handler.serve("/").await;

    assert_eq!(
        response.headers.get("Content-Length").unwrap(),
        &response.body.len().to_string()
    );

    let _ = fs::remove_dir_all(&root);
}
