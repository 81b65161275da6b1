use super::*;
use crate::net::transport::MultipartPart;

fn record(json: serde_json::Value) -> FileRecord {
    serde_json::from_value(json).unwrap()
}

#[test]
fn rows_format_size_and_date() {
    let files = [record(serde_json::json!({
        "id": 3,
        "original_name": "rapport.pdf",
        "file_size": 1536,
        "created_at": "2024-01-05T09:05:00",
        "download_url": "/api/files/3/download"
    }))];
    let rows = file_rows(&files, &ClientConfig::default());
    assert_eq!(
        rows,
        vec![FileRow {
            name: "rapport.pdf".to_owned(),
            size: "1,5 Ko".to_owned(),
            uploaded: "5 janvier 2024 à 09:05".to_owned(),
            download_url: "/api/files/3/download".to_owned(),
        }]
    );
}

#[test]
fn rows_fall_back_to_conventional_download_endpoint() {
    let files = [record(serde_json::json!({ "id": 9, "original_name": "photo.png" }))];
    let rows = file_rows(&files, &ClientConfig::default());
    assert_eq!(rows[0].download_url, "/api/v1/files/9/download");
    assert_eq!(rows[0].size, "");
    assert_eq!(rows[0].uploaded, "");
}

#[test]
fn upload_body_puts_file_under_file_field() {
    let body = upload_body("notes.txt", "text/plain", b"hello".to_vec());
    assert_eq!(
        body.parts,
        vec![MultipartPart::File {
            name: "file".to_owned(),
            filename: "notes.txt".to_owned(),
            content_type: "text/plain".to_owned(),
            bytes: b"hello".to_vec(),
        }]
    );
}

#[test]
fn upload_body_defaults_unknown_content_type() {
    let body = upload_body("blob.bin", "", vec![0, 1]);
    let MultipartPart::File { content_type, .. } = &body.parts[0] else {
        panic!("expected a file part");
    };
    assert_eq!(content_type, "application/octet-stream");
}
