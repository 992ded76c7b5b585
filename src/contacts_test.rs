// Unit tests for contact table loading

use std::io::Write;
use std::path::Path;

use pretty_assertions::assert_eq;

use super::*;

fn write_csv(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("contacts.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "name,whatsapp_number,url,caption\n\
         Alice,15551234567,https://example.com,Hi\n\
         Bob,15557654321,https://example.org,Check this out\n",
    );

    let contacts = load_contacts(&path).unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "Alice");
    assert_eq!(contacts[0].whatsapp_number, "15551234567");
    assert_eq!(contacts[0].url, "https://example.com");
    assert_eq!(contacts[0].caption.as_deref(), Some("Hi"));
    assert_eq!(contacts[1].name, "Bob");
}

#[test]
fn test_blank_caption_becomes_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "name,whatsapp_number,url,caption\n\
         Alice,15551234567,https://example.com,\n\
         Bob,15557654321,https://example.org,   \n",
    );

    let contacts = load_contacts(&path).unwrap();
    assert_eq!(contacts[0].caption, None);
    assert_eq!(contacts[1].caption, None);
}

#[test]
fn test_input_order_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "name,whatsapp_number,url,caption\n\
         Charlie,3,https://example.com/3,\n\
         Alice,1,https://example.com/1,\n\
         Bob,2,https://example.com/2,\n",
    );

    let contacts = load_contacts(&path).unwrap();
    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_contacts(&dir.path().join("nope.csv")).unwrap_err();
    assert!(err.to_string().contains("Contacts file not found"));
}

#[test]
fn test_malformed_row_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "name,whatsapp_number,url,caption\n\
         Alice,15551234567\n",
    );

    let err = load_contacts(&path).unwrap_err();
    assert!(err.to_string().contains("Malformed row 1"));
}
