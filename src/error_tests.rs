use super::*;

#[test]
fn test_invalid_config_message() {
    let err = PadError::InvalidConfig("missing endpoint".to_string());
    assert_eq!(err.to_string(), "Invalid config file: missing endpoint");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err: PadError = io.into();
    assert!(matches!(err, PadError::Io(_)));
    assert!(err.to_string().contains("no such file"));
}
