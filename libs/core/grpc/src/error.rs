use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while configuring a gRPC server
#[derive(Error, Debug)]
pub enum GrpcError {
    /// Bind address could not be parsed
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Turns a plain validation message into an INVALID_ARGUMENT status
///
/// # Example
/// ```ignore
/// use grpc_helpers::error::ToTonicResult;
///
/// fn required(value: &str) -> Result<&str, String> {
///     if value.is_empty() { Err("missing".into()) } else { Ok(value) }
/// }
///
/// let result = required("").to_tonic();
/// ```
pub trait ToTonicResult<T> {
    fn to_tonic(self) -> Result<T, tonic::Status>;
}

impl<T> ToTonicResult<T> for Result<T, String> {
    fn to_tonic(self) -> Result<T, tonic::Status> {
        self.map_err(tonic::Status::invalid_argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tonic_defaults_to_invalid_argument() {
        let status = Err::<(), _>("missing required argument: email".to_string())
            .to_tonic()
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "missing required argument: email");
    }

    #[test]
    fn test_invalid_address_names_the_input() {
        let err = "nowhere:1".parse::<std::net::SocketAddr>().unwrap_err();
        let err = GrpcError::InvalidAddress {
            addr: "nowhere:1".to_string(),
            source: err,
        };
        assert!(err.to_string().contains("nowhere:1"));
    }
}
