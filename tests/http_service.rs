use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::time::Duration;

use separator_viz::api::http::HttpService;
use separator_viz::api::{ComputeRequest, SeparatorService};
use separator_viz::data::store::COMPUTE_FAILED_MESSAGE;
use separator_viz::{Algorithm, ApiError, Point};

/// Serve exactly one request with a canned response and return the base URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });
    format!("http://{addr}")
}

fn request() -> ComputeRequest {
    ComputeRequest {
        red_points: vec![Point::new(100.0, 100.0)],
        blue_points: vec![],
        algorithm: Algorithm::TwoRectangles,
        save_to_db: false,
    }
}

#[tokio::test]
async fn server_error_detail_is_carried() {
    let url = serve_once("500 Internal Server Error", r#"{"detail":"internal error"}"#);
    let svc = HttpService::new(&url, Duration::from_secs(5)).unwrap();

    let err = svc.compute(request()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Service {
            status: 500,
            detail: Some("internal error".to_string()),
        }
    );
    assert_eq!(err.user_message(COMPUTE_FAILED_MESSAGE), "internal error");
}

#[tokio::test]
async fn validation_list_detail_is_dropped() {
    let url = serve_once(
        "422 Unprocessable Entity",
        r#"{"detail":[{"loc":["body","red_points"],"msg":"field required"}]}"#,
    );
    let svc = HttpService::new(&url, Duration::from_secs(5)).unwrap();

    let err = svc.compute(request()).await.unwrap_err();
    assert_eq!(err, ApiError::Service { status: 422, detail: None });
    assert_eq!(err.user_message(COMPUTE_FAILED_MESSAGE), COMPUTE_FAILED_MESSAGE);
}

#[tokio::test]
async fn undecodable_success_body_is_malformed() {
    let url = serve_once("200 OK", "<html>not json</html>");
    let svc = HttpService::new(&url, Duration::from_secs(5)).unwrap();

    let err = svc.compute(request()).await.unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn successful_compute_is_decoded() {
    let url = serve_once(
        "200 OK",
        r#"{"computation_id":7,"shapes":[{"x":90.0,"y":90.0,"width":20.0,"height":20.0}],"blue_covered":0,"red_covered":1,"total_red":1,"total_blue":0,"execution_time_ms":3.2,"algorithm":"rectangles","created_at":null}"#,
    );
    let svc = HttpService::new(&url, Duration::from_secs(5)).unwrap();

    let r = svc.compute(request()).await.unwrap();
    assert_eq!(r.computation_id, Some(7));
    assert_eq!(r.shapes.len(), 1);
    assert_eq!(r.red_covered, 1);
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        // Hold the connection open without answering.
        let (_stream, _) = listener.accept().unwrap();
        std::thread::sleep(Duration::from_secs(3));
    });
    let timeout = Duration::from_millis(200);
    let svc = HttpService::new(&format!("http://{addr}"), timeout).unwrap();

    let err = svc.health().await.unwrap_err();
    assert_eq!(err, ApiError::Timeout(timeout));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let svc = HttpService::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();

    let err = svc.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}
