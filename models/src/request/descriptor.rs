use crate::{HttpMethod, RequestOptions};

/// One logical call: a verb, an endpoint path and its options.
///
/// Created per call and consumed by the request builder.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub options: RequestOptions,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            method,
            path: path.into(),
            options,
        }
    }
}
