use std::fmt;
use serde::Deserialize;
use thiserror::Error;

/// Server error numbers as reported in the `errorNum` field of an error body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorCode {
    // General errors
    NoError = 0,
    Failed = 1,
    SystemError = 2,
    OutOfMemory = 3,
    Internal = 4,
    IllegalNumber = 5,
    IllegalOption = 7,
    NotImplemented = 9,
    BadParameter = 10,
    Forbidden = 11,
    TypeErrorName = 17,
    LockTimeout = 18,
    RequestCanceled = 21,
    ShuttingDown = 30,
    ResourceLimit = 32,
    SerializationError = 40,

    // HTTP errors
    HttpBadParameter = 400,
    HttpUnauthorized = 401,
    HttpForbidden = 403,
    HttpNotFound = 404,
    HttpMethodNotAllowed = 405,
    HttpNotAcceptable = 406,
    HttpRequestTimeout = 408,
    HttpPreconditionFailed = 412,
    HttpServerError = 500,
    HttpNotImplemented = 501,
    HttpServiceUnavailable = 503,
    HttpGatewayTimeout = 504,
    HttpCorruptedJson = 600,
    HttpSuperfluousSuffices = 601,

    // Document and collection errors
    ArangoConflict = 1200,
    ArangoDocumentNotFound = 1202,
    ArangoDataSourceNotFound = 1203,
    ArangoCollectionParameterMissing = 1204,
    ArangoDocumentHandleBad = 1205,
    ArangoDuplicateName = 1207,
    ArangoIllegalName = 1208,
    ArangoUniqueConstraintViolated = 1210,
    ArangoCrossCollectionRequest = 1213,
    ArangoDocumentKeyBad = 1221,
    ArangoDocumentKeyUnexpected = 1222,
    ArangoDocumentTypeInvalid = 1227,
    ArangoDatabaseNotFound = 1228,
    ArangoDatabaseNameInvalid = 1229,
    ArangoInvalidEdgeAttribute = 1233,
    ArangoCollectionTypeInvalid = 1237,

    // Graph errors
    GraphInvalidGraph = 1901,
    GraphCouldNotCreateGraph = 1902,
    GraphInvalidVertex = 1903,
    GraphCouldNotCreateVertex = 1904,
    GraphCouldNotChangeVertex = 1905,
    GraphInvalidEdge = 1906,
    GraphCouldNotCreateEdge = 1907,
    GraphCouldNotChangeEdge = 1908,
    GraphCollectionMultiUse = 1920,
    GraphCollectionUseInMultiGraphs = 1921,
    GraphCreateMissingName = 1922,
    GraphCreateMalformedEdgeDefinition = 1923,
    GraphNotFound = 1924,
    GraphDuplicate = 1925,
    GraphVertexColDoesNotExist = 1926,
    GraphWrongCollectionTypeVertex = 1927,
    GraphNotInOrphanCollection = 1928,
    GraphCollectionUsedInEdgeDef = 1929,
    GraphEdgeCollectionNotUsed = 1930,
    GraphNoGraphCollection = 1932,
    GraphInvalidNumberOfArguments = 1935,
    GraphInvalidParameter = 1936,
    GraphInvalidId = 1937,
    GraphCollectionUsedInOrphans = 1938,
    GraphEdgeColDoesNotExist = 1939,
    GraphEmpty = 1940,
}

impl ErrorCode {
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Map a raw `errorNum`; numbers this client does not know about yield `None`
    pub fn from_u32(value: u32) -> Option<Self> {
        let code = match value {
            0 => ErrorCode::NoError,
            1 => ErrorCode::Failed,
            2 => ErrorCode::SystemError,
            3 => ErrorCode::OutOfMemory,
            4 => ErrorCode::Internal,
            5 => ErrorCode::IllegalNumber,
            7 => ErrorCode::IllegalOption,
            9 => ErrorCode::NotImplemented,
            10 => ErrorCode::BadParameter,
            11 => ErrorCode::Forbidden,
            17 => ErrorCode::TypeErrorName,
            18 => ErrorCode::LockTimeout,
            21 => ErrorCode::RequestCanceled,
            30 => ErrorCode::ShuttingDown,
            32 => ErrorCode::ResourceLimit,
            40 => ErrorCode::SerializationError,
            400 => ErrorCode::HttpBadParameter,
            401 => ErrorCode::HttpUnauthorized,
            403 => ErrorCode::HttpForbidden,
            404 => ErrorCode::HttpNotFound,
            405 => ErrorCode::HttpMethodNotAllowed,
            406 => ErrorCode::HttpNotAcceptable,
            408 => ErrorCode::HttpRequestTimeout,
            412 => ErrorCode::HttpPreconditionFailed,
            500 => ErrorCode::HttpServerError,
            501 => ErrorCode::HttpNotImplemented,
            503 => ErrorCode::HttpServiceUnavailable,
            504 => ErrorCode::HttpGatewayTimeout,
            600 => ErrorCode::HttpCorruptedJson,
            601 => ErrorCode::HttpSuperfluousSuffices,
            1200 => ErrorCode::ArangoConflict,
            1202 => ErrorCode::ArangoDocumentNotFound,
            1203 => ErrorCode::ArangoDataSourceNotFound,
            1204 => ErrorCode::ArangoCollectionParameterMissing,
            1205 => ErrorCode::ArangoDocumentHandleBad,
            1207 => ErrorCode::ArangoDuplicateName,
            1208 => ErrorCode::ArangoIllegalName,
            1210 => ErrorCode::ArangoUniqueConstraintViolated,
            1213 => ErrorCode::ArangoCrossCollectionRequest,
            1221 => ErrorCode::ArangoDocumentKeyBad,
            1222 => ErrorCode::ArangoDocumentKeyUnexpected,
            1227 => ErrorCode::ArangoDocumentTypeInvalid,
            1228 => ErrorCode::ArangoDatabaseNotFound,
            1229 => ErrorCode::ArangoDatabaseNameInvalid,
            1233 => ErrorCode::ArangoInvalidEdgeAttribute,
            1237 => ErrorCode::ArangoCollectionTypeInvalid,
            1901 => ErrorCode::GraphInvalidGraph,
            1902 => ErrorCode::GraphCouldNotCreateGraph,
            1903 => ErrorCode::GraphInvalidVertex,
            1904 => ErrorCode::GraphCouldNotCreateVertex,
            1905 => ErrorCode::GraphCouldNotChangeVertex,
            1906 => ErrorCode::GraphInvalidEdge,
            1907 => ErrorCode::GraphCouldNotCreateEdge,
            1908 => ErrorCode::GraphCouldNotChangeEdge,
            1920 => ErrorCode::GraphCollectionMultiUse,
            1921 => ErrorCode::GraphCollectionUseInMultiGraphs,
            1922 => ErrorCode::GraphCreateMissingName,
            1923 => ErrorCode::GraphCreateMalformedEdgeDefinition,
            1924 => ErrorCode::GraphNotFound,
            1925 => ErrorCode::GraphDuplicate,
            1926 => ErrorCode::GraphVertexColDoesNotExist,
            1927 => ErrorCode::GraphWrongCollectionTypeVertex,
            1928 => ErrorCode::GraphNotInOrphanCollection,
            1929 => ErrorCode::GraphCollectionUsedInEdgeDef,
            1930 => ErrorCode::GraphEdgeCollectionNotUsed,
            1932 => ErrorCode::GraphNoGraphCollection,
            1935 => ErrorCode::GraphInvalidNumberOfArguments,
            1936 => ErrorCode::GraphInvalidParameter,
            1937 => ErrorCode::GraphInvalidId,
            1938 => ErrorCode::GraphCollectionUsedInOrphans,
            1939 => ErrorCode::GraphEdgeColDoesNotExist,
            1940 => ErrorCode::GraphEmpty,
            _ => return None,
        };
        Some(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::NoError => write!(f, "no error"),
            ErrorCode::Failed => write!(f, "failed"),
            ErrorCode::Internal => write!(f, "internal error"),
            ErrorCode::BadParameter => write!(f, "bad parameter"),
            ErrorCode::Forbidden => write!(f, "forbidden"),
            ErrorCode::HttpBadParameter => write!(f, "bad parameter"),
            ErrorCode::HttpUnauthorized => write!(f, "unauthorized"),
            ErrorCode::HttpForbidden => write!(f, "forbidden"),
            ErrorCode::HttpNotFound => write!(f, "not found"),
            ErrorCode::HttpPreconditionFailed => write!(f, "precondition failed"),
            ErrorCode::ArangoConflict => write!(f, "conflict"),
            ErrorCode::ArangoDocumentNotFound => write!(f, "document not found"),
            ErrorCode::ArangoDataSourceNotFound => write!(f, "collection or view not found"),
            ErrorCode::ArangoUniqueConstraintViolated => write!(f, "unique constraint violated"),
            ErrorCode::ArangoDatabaseNotFound => write!(f, "database not found"),
            ErrorCode::GraphInvalidGraph => write!(f, "invalid graph"),
            ErrorCode::GraphNotFound => write!(f, "graph not found"),
            ErrorCode::GraphDuplicate => write!(f, "graph already exists"),
            ErrorCode::GraphCreateMalformedEdgeDefinition => write!(f, "malformed edge definition"),
            ErrorCode::GraphEdgeCollectionNotUsed => write!(f, "edge collection not used in graph"),
            ErrorCode::GraphCollectionUsedInEdgeDef => write!(f, "collection already used in edge def"),
            _ => write!(f, "error code {}", self.as_u32()),
        }
    }
}

/// Error body sent by the server alongside a non-2xx status
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerErrorBody {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub code: Option<u16>,
    pub error_num: u32,
    #[serde(default)]
    pub error_message: String,
}

/// Main client error type
#[derive(Error, Debug)]
pub enum ArangoError {
    #[error("ArangoDB error {error_num} (HTTP {status}): {message}")]
    Server {
        status: u16,
        error_num: u32,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ArangoError {
    pub fn server(status: u16, code: ErrorCode, message: impl Into<String>) -> Self {
        ArangoError::Server {
            status,
            error_num: code.as_u32(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ArangoError::Validation(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        ArangoError::UnexpectedResponse(message.into())
    }

    /// Error for a response with the given status and error body
    pub(crate) fn from_body(status: u16, body: ServerErrorBody) -> Self {
        ArangoError::Server {
            status,
            error_num: body.error_num,
            message: body.error_message,
        }
    }

    /// HTTP status of the failed response, if the error came from the server
    pub fn status(&self) -> Option<u16> {
        match self {
            ArangoError::Server { status, .. } => Some(*status),
            ArangoError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw server error number, if any
    pub fn error_num(&self) -> Option<u32> {
        match self {
            ArangoError::Server { error_num, .. } => Some(*error_num),
            _ => None,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            ArangoError::Server { error_num, .. } => {
                ErrorCode::from_u32(*error_num).unwrap_or(ErrorCode::Failed)
            }
            ArangoError::Http(_) => ErrorCode::HttpServerError,
            ArangoError::Serde(_) => ErrorCode::SerializationError,
            ArangoError::Url(_) => ErrorCode::BadParameter,
            ArangoError::Config(_) => ErrorCode::BadParameter,
            ArangoError::Validation(_) => ErrorCode::BadParameter,
            ArangoError::UnexpectedResponse(_) => ErrorCode::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
            || matches!(self.error_code(),
                ErrorCode::ArangoDocumentNotFound |
                ErrorCode::ArangoDataSourceNotFound |
                ErrorCode::HttpNotFound |
                ErrorCode::GraphNotFound
            )
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
            || matches!(self.error_code(),
                ErrorCode::ArangoConflict |
                ErrorCode::ArangoUniqueConstraintViolated |
                ErrorCode::ArangoDuplicateName |
                ErrorCode::GraphDuplicate
            )
    }

    pub fn is_precondition_failed(&self) -> bool {
        self.status() == Some(412)
    }
}

impl From<config::ConfigError> for ArangoError {
    fn from(err: config::ConfigError) -> Self {
        ArangoError::Config(err.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ArangoError>;

/// Macro for creating a server-style error
#[macro_export]
macro_rules! arango_error {
    ($status:expr, $code:expr, $($arg:tt)*) => {
        $crate::common::error::ArangoError::server($status, $code, format!($($arg)*))
    };
}

/// Macro for early return on a validation failure
#[macro_export]
macro_rules! arango_bail {
    ($($arg:tt)*) => {
        return Err($crate::common::error::ArangoError::validation(format!($($arg)*)))
    };
}

/// Macro for ensuring a condition or returning a validation error
#[macro_export]
macro_rules! arango_ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::arango_bail!($($arg)*);
        }
    };
}
