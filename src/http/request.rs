/// HTTP request methods.
///
/// The server intentionally supports GET and nothing else; request lines
/// carrying any other verb fail parsing before they get here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string is a supported verb, `None` otherwise.
    /// Matching is case-sensitive, as method tokens are in HTTP.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::Get));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Only the request line is retained; header lines are read off the stream
/// and discarded. Each connection produces at most one of these, consumes
/// it, and drops it when handling ends.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (always `Get` in the current grammar)
    pub method: Method,
    /// The request path, starting with `/` (e.g., "/index.html")
    pub path: String,
}
