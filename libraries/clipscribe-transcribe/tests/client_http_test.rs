//! HTTP round-trip tests for the transcription client
//!
//! Each test points the client at a local one-shot TCP stub that answers a
//! single canned HTTP response, covering the status check, the body
//! snippet truncation, and the parse-then-validate wiring.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;

use clipscribe_transcribe::{TranscribeError, TranscriptionClient};

/// Spawn a server that answers exactly one request with a canned response
///
/// Reads the full request (headers plus `Content-Length` body) before
/// replying, so the client never sees a reset mid-write.
fn one_shot_server(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some(value) = line
                .to_ascii_lowercase()
                .strip_prefix("content-length:")
                .map(str::trim)
            {
                content_length = value.parse().unwrap();
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        reader.get_mut().write_all(response.as_bytes()).unwrap();
    });

    format!("http://{addr}")
}

fn client_for(endpoint: String) -> TranscriptionClient {
    TranscriptionClient::new("test-key").with_endpoint(endpoint)
}

fn candidate_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
    .to_string()
}

#[tokio::test]
async fn non_2xx_status_surfaces_as_api_error() {
    // A long body checks the snippet truncation too: the sentinel sits
    // past the 200-character cut and must not survive
    let body = format!("{{\"error\": \"quota exceeded\"}}{}SENTINEL", "x".repeat(300));
    let endpoint = one_shot_server("429 Too Many Requests", body);

    let err = client_for(endpoint)
        .transcribe_audio(b"audio-bytes", "audio/wav")
        .await
        .unwrap_err();

    match err {
        TranscribeError::Api { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("quota exceeded"));
            assert!(body.chars().count() <= 200);
            assert!(!body.contains("SENTINEL"));
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn successful_response_parses_and_validates() {
    let text = "```json\n[{\"id\": 0, \"text\": \"hello\", \"start\": 0.0, \"end\": 1.25},\
                {\"id\": 1, \"text\": \"there\", \"start\": 1.25, \"end\": 2.0}]\n```";
    let endpoint = one_shot_server("200 OK", candidate_response(text));

    let segments = client_for(endpoint)
        .transcribe_audio(b"audio-bytes", "audio/wav")
        .await
        .unwrap();

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text, "hello");
    assert_eq!(segments[1].end, 2.0);
}

#[tokio::test]
async fn invalid_segments_fail_the_whole_call() {
    // Inverted times in the second segment: validation rejects everything
    let text = "[{\"id\": 0, \"text\": \"ok\", \"start\": 0.0, \"end\": 1.0},\
                {\"id\": 1, \"text\": \"bad\", \"start\": 3.0, \"end\": 2.0}]";
    let endpoint = one_shot_server("200 OK", candidate_response(text));

    let err = client_for(endpoint)
        .transcribe_audio(b"audio-bytes", "audio/wav")
        .await
        .unwrap_err();
    assert!(matches!(err, TranscribeError::InvalidSegment(_)));
}
