use super::Router;

#[test]
fn test_root_path() {
    let (re, params) = Router::path_to_regex("/");
    assert!(re.is_match("/"));
    assert!(params.is_empty());
}

#[test]
fn test_parameterized_path() {
    let (re, params) = Router::path_to_regex("/items/{id}");
    assert!(re.is_match("/items/123"));
    assert!(!re.is_match("/items/123/extra"));
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].as_ref(), "id");
}

#[test]
fn test_nested_path() {
    let (re, params) = Router::path_to_regex("/a/{b}/c");
    assert!(re.is_match("/a/1/c"));
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].as_ref(), "b");
}

#[test]
fn test_rest_of_path() {
    let (re, params) = Router::path_to_regex("/files/{file_path:path}");
    let caps = re.captures("/files/home/johndoe/notes.txt").expect("match");
    assert_eq!(caps.get(1).map(|m| m.as_str()), Some("home/johndoe/notes.txt"));
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].as_ref(), "file_path");
}

#[test]
fn test_single_segment_does_not_cross_separator() {
    let (re, _) = Router::path_to_regex("/users/{id}");
    assert!(!re.is_match("/users/1/posts"));
}
