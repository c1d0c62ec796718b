use super::*;

#[test]
fn check_status_accepts_2xx() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    assert!(check_status(299).is_ok());
}

#[test]
fn check_status_rejects_everything_else() {
    for status in [199, 301, 404, 500] {
        let err = check_status(status).unwrap_err();
        assert_eq!(err.status(), Some(status));
    }
}

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status { status: 503 }.to_string(), "server responded with status 503");
}

#[test]
fn decode_error_has_no_status() {
    let err = ApiError::from(DecodeError::NotAnObject);
    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "board payload must be a JSON object");
}

#[test]
fn client_keeps_config() {
    let cfg = ViewerConfig::new("http://10.0.0.5:8080/").unwrap();
    let client = ApiClient::new(cfg.clone()).unwrap();
    assert_eq!(client.config(), &cfg);
}
