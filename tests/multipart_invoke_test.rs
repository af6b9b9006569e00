use regolo_invoke::{FilePart, Invoker, MultipartPayload, TranscriptionRequest};
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Split a received multipart body into `(part headers, part content)` pairs.
fn split_parts(content_type: &str, body: &[u8]) -> Vec<(String, Vec<u8>)> {
    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .expect("boundary in content-type")
        .trim_matches('"');
    let delimiter = format!("--{boundary}").into_bytes();

    let mut starts = Vec::new();
    let mut i = 0;
    while i + delimiter.len() <= body.len() {
        if body[i..i + delimiter.len()] == delimiter[..] {
            starts.push(i);
            i += delimiter.len();
        } else {
            i += 1;
        }
    }

    starts
        .windows(2)
        .map(|w| {
            // Skip the delimiter and its CRLF; drop the CRLF before the next one.
            let segment = &body[w[0] + delimiter.len() + 2..w[1] - 2];
            let split = segment
                .windows(4)
                .position(|win| win == b"\r\n\r\n")
                .expect("header/content separator");
            let headers = String::from_utf8_lossy(&segment[..split]).into_owned();
            (headers, segment[split + 4..].to_vec())
        })
        .collect()
}

fn sample_audio(len: usize) -> Vec<u8> {
    // Every byte value, including CR/LF and non-UTF-8 sequences.
    (0..len).map(|i| (i * 7 % 256) as u8).collect()
}

#[tokio::test]
async fn file_part_bytes_arrive_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/models/whisper-large-v3/transcriptions"))
        .and(header("authorization", "Bearer k"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "ciao"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let audio_path = dir.path().join("sample.mp3");
    let audio = sample_audio(70_000);
    std::fs::File::create(&audio_path)
        .unwrap()
        .write_all(&audio)
        .unwrap();

    let invoker = Invoker::builder()
        .endpoint(format!(
            "{}/v1/models/whisper-large-v3/transcriptions",
            server.uri()
        ))
        .credential("k")
        .build()
        .unwrap();

    let reply = invoker
        .invoke_json(TranscriptionRequest::new("whisper-1", &audio_path))
        .await
        .expect("invoke ok");
    assert_eq!(reply.json["text"], "ciao");

    let received = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let parts = split_parts(&content_type, &received[0].body);
    assert_eq!(parts.len(), 2);

    let (model_headers, model_value) = &parts[0];
    assert!(model_headers.contains(r#"name="model""#));
    assert!(!model_headers.contains("filename="));
    assert_eq!(model_value, b"whisper-1");

    let (file_headers, file_bytes) = &parts[1];
    assert!(file_headers.contains(r#"name="file""#));
    assert!(file_headers.contains(r#"filename="sample.mp3""#));
    assert!(file_headers.to_ascii_lowercase().contains("content-type: audio/mpeg"));
    assert_eq!(file_bytes.len(), audio.len());
    assert_eq!(file_bytes, &audio);
}

#[tokio::test]
async fn several_fields_and_files_keep_their_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("image.png");
    let mask = dir.path().join("mask.png");
    std::fs::write(&image, b"image-bytes").unwrap();
    std::fs::write(&mask, b"mask-bytes").unwrap();

    let payload = MultipartPayload::new()
        .text("prompt", "a cat")
        .text("n", "1")
        .file("image", &image)
        .file_part(FilePart::new("mask", &mask).with_mime("application/octet-stream"));

    let resp = Invoker::builder()
        .endpoint(server.uri())
        .credential("k")
        .build()
        .unwrap()
        .invoke(payload)
        .await
        .unwrap();
    assert_eq!(resp.text(), "ok");

    let received = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let parts = split_parts(&content_type, &received[0].body);
    let contents: Vec<&[u8]> = parts.iter().map(|(_, c)| c.as_slice()).collect();
    assert_eq!(
        contents,
        vec![&b"a cat"[..], &b"1"[..], &b"image-bytes"[..], &b"mask-bytes"[..]]
    );
    assert!(parts[3].0.contains(r#"name="mask""#));
}

#[tokio::test]
async fn missing_file_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("file.mp3");

    let err = Invoker::builder()
        .endpoint(server.uri())
        .credential("k")
        .build()
        .unwrap()
        .invoke(TranscriptionRequest::new("whisper-1", &missing))
        .await
        .unwrap_err();

    assert!(err.is_io(), "expected I/O error, got {err:?}");
    assert!(err.to_string().contains("file.mp3"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn directory_in_place_of_file_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();

    let err = Invoker::builder()
        .endpoint(server.uri())
        .credential("k")
        .build()
        .unwrap()
        .invoke(TranscriptionRequest::new("whisper-1", dir.path()))
        .await
        .unwrap_err();

    assert!(err.is_io(), "expected I/O error, got {err:?}");
    assert!(server.received_requests().await.unwrap().is_empty());
}
