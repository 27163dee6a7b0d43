pub mod network;
pub mod connection;

#[cfg(test)]
pub(crate) mod mock;

pub use network::{
    HttpMethod,
    Request,
    Response,
    ConnectionStats,
    StatsRecorder,
    RequestTimer,
};

pub use connection::{Connection, HttpConnection};
