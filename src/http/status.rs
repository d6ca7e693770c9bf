use std::num::NonZeroU16;

/// HTTP [Status Code][rfc].
///
/// Any three digit code, `100..=999`, can be represented. Codes outside the registered set have
/// the reason phrase `"Unspecified"`.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(NonZeroU16);

/// Reason phrase for codes without a registered one.
const UNSPECIFIED: &str = "Unspecified";

impl StatusCode {
    /// Number of digits in every valid status code.
    pub const DIGITS: usize = 3;

    /// Create [`StatusCode`] from integer.
    ///
    /// # Errors
    ///
    /// Returns error if `code` is not in `100..=999`.
    #[inline]
    pub const fn from_u16(code: u16) -> Result<Self, InvalidStatusCode> {
        match code {
            100..=999 => match NonZeroU16::new(code) {
                Some(ok) => Ok(Self(ok)),
                None => Err(InvalidStatusCode(code)),
            },
            _ => Err(InvalidStatusCode(code)),
        }
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0.get()
    }

    /// Returns `true` for `1xx` codes.
    #[inline]
    pub const fn is_informational(&self) -> bool {
        matches!(self.0.get(), 100..=199)
    }

    /// Returns `true` for `2xx` codes.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.0.get(), 200..=299)
    }

    /// Returns `true` for `3xx` codes.
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.0.get(), 300..=399)
    }

    /// Returns `true` for `4xx` codes.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.0.get(), 400..=499)
    }

    /// Returns `true` for `5xx` codes.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.0.get(), 500..=599)
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = InvalidStatusCode;

    #[inline]
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_u16(value)
    }
}

macro_rules! status_code {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            /// Returns the canonical reason phrase, e.g: `"OK"`.
            ///
            /// Codes without registered phrase returns `"Unspecified"`.
            #[inline]
            pub const fn reason(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => $msg,
                    )*
                    _ => UNSPECIFIED,
                }
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*
        }
    };
}

status_code! {
    /// `100`. The client should continue the request.
    100 CONTINUE "Continue";
    /// `101`. The server is switching to the protocol requested by an `Upgrade` header.
    101 SWITCHING_PROTOCOLS "Switching Protocols";
    /// `102`. The server has received and is processing the request.
    102 PROCESSING "Processing";
    /// `103`. Headers sent ahead of the final response.
    103 EARLY_HINTS "Early Hints";

    /// `200`. The request succeeded.
    200 OK "OK";
    /// `201`. The request succeeded, and a new resource was created as a result.
    201 CREATED "Created";
    /// `202`. The request has been received but not yet acted upon.
    202 ACCEPTED "Accepted";
    /// `203`. The returned metadata is from a copy rather than the origin server.
    203 NON_AUTHORITATIVE_INFORMATION "Non-Authoritative Information";
    /// `204`. There is no content to send for this request, but the headers are useful.
    204 NO_CONTENT "No Content";
    /// `205`. The client should reset the document which sent this request.
    205 RESET_CONTENT "Reset Content";
    /// `206`. Only part of the resource is sent, as requested by a `Range` header.
    206 PARTIAL_CONTENT "Partial Content";
    /// `207`. WebDAV, conveys information about multiple resources.
    207 MULTI_STATUS "Multi-Status";
    /// `208`. WebDAV, members already enumerated in a preceding part of the response.
    208 ALREADY_REPORTED "Already Reported";
    /// `226`. The response is a result of instance-manipulations applied to the resource.
    226 IM_USED "IM Used";

    /// `300`. The request has more than one possible response.
    300 MULTIPLE_CHOICES "Multiple Choices";
    /// `301`. The URL of the requested resource has been changed permanently.
    301 MOVED_PERMANENTLY "Moved Permanently";
    /// `302`. The URI of requested resource has been changed temporarily.
    302 FOUND "Found";
    /// `303`. Get the requested resource at another URI with a GET request.
    303 SEE_OTHER "See Other";
    /// `304`. The response has not been modified, the cached version can be used.
    304 NOT_MODIFIED "Not Modified";
    /// `305`. Deprecated, the response must be accessed by a proxy.
    305 USE_PROXY "Use Proxy";
    /// `306`. No longer used, reserved.
    306 UNUSED "Unused";
    /// `307`. Get the requested resource at another URI with the same method.
    307 TEMPORARY_REDIRECT "Temporary Redirect";
    /// `308`. The resource is now permanently located at another URI.
    308 PERMANENT_REDIRECT "Permanent Redirect";

    /// `400`. The server cannot process the request due to a client error.
    400 BAD_REQUEST "Bad Request";
    /// `401`. The client must authenticate itself.
    401 UNAUTHORIZED "Unauthorized";
    /// `402`. Reserved for future use.
    402 PAYMENT_REQUIRED "Payment Required";
    /// `403`. The client does not have access rights to the content.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `405`. The method is not supported by the target resource.
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    /// `406`. No content conforms to the criteria given by the user agent.
    406 NOT_ACCEPTABLE "Not Acceptable";
    /// `407`. Authentication is needed to be done by a proxy.
    407 PROXY_AUTHENTICATION_REQUIRED "Proxy Authentication Required";
    /// `408`. The server would like to shut down this unused connection.
    408 REQUEST_TIMEOUT "Request Timeout";
    /// `409`. The request conflicts with the current state of the server.
    409 CONFLICT "Conflict";
    /// `410`. The content has been permanently deleted from server.
    410 GONE "Gone";
    /// `411`. The `Content-Length` header field is required.
    411 LENGTH_REQUIRED "Length Required";
    /// `412`. The server does not meet the preconditions of the request.
    412 PRECONDITION_FAILED "Precondition Failed";
    /// `413`. The request body is larger than limits defined by server.
    413 CONTENT_TOO_LARGE "Content Too Large";
    /// `414`. The URI requested by the client is too long.
    414 URI_TOO_LONG "URI Too Long";
    /// `415`. The media format of the requested data is not supported.
    415 UNSUPPORTED_MEDIA_TYPE "Unsupported Media Type";
    /// `416`. The ranges specified by the `Range` header cannot be fulfilled.
    416 RANGE_NOT_SATISFIABLE "Range Not Satisfiable";
    /// `417`. The expectation in the `Expect` header cannot be met.
    417 EXPECTATION_FAILED "Expectation Failed";
    /// `418`. The server refuses the attempt to brew coffee with a teapot.
    418 IM_A_TEAPOT "I'm a teapot";
    /// `421`. The request was directed at a server unable to produce a response.
    421 MISDIRECTED_REQUEST "Misdirected Request";
    /// `422`. The request was well-formed but has semantic errors.
    422 UNPROCESSABLE_CONTENT "Unprocessable Content";
    /// `423`. WebDAV, the resource being accessed is locked.
    423 LOCKED "Locked";
    /// `424`. WebDAV, a previous request failed.
    424 FAILED_DEPENDENCY "Failed Dependency";
    /// `425`. The server is unwilling to process a request that might be replayed.
    425 TOO_EARLY "Too Early";
    /// `426`. The client should switch to a different protocol.
    426 UPGRADE_REQUIRED "Upgrade Required";
    /// `428`. The origin server requires the request to be conditional.
    428 PRECONDITION_REQUIRED "Precondition Required";
    /// `429`. The user has sent too many requests in a given amount of time.
    429 TOO_MANY_REQUESTS "Too Many Requests";
    /// `431`. The request header fields are too large.
    431 REQUEST_HEADER_FIELDS_TOO_LARGE "Request Header Fields Too Large";
    /// `451`. The resource cannot legally be provided.
    451 UNAVAILABLE_FOR_LEGAL_REASONS "Unavailable For Legal Reasons";

    /// `500`. The server has encountered a situation it does not know how to handle.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `501`. The request method is not supported by the server.
    501 NOT_IMPLEMENTED "Not Implemented";
    /// `502`. The server, working as a gateway, got an invalid response.
    502 BAD_GATEWAY "Bad Gateway";
    /// `503`. The server is not ready to handle the request.
    503 SERVICE_UNAVAILABLE "Service Unavailable";
    /// `504`. The server, working as a gateway, cannot get a response in time.
    504 GATEWAY_TIMEOUT "Gateway Timeout";
    /// `505`. The HTTP version used in the request is not supported by the server.
    505 HTTP_VERSION_NOT_SUPPORTED "HTTP Version Not Supported";
    /// `506`. The server has an internal configuration error.
    506 VARIANT_ALSO_NEGOTIATES "Variant Also Negotiates";
    /// `507`. WebDAV, the server is unable to store the representation.
    507 INSUFFICIENT_STORAGE "Insufficient Storage";
    /// `508`. WebDAV, the server detected an infinite loop.
    508 LOOP_DETECTED "Loop Detected";
    /// `510`. Further extensions to the request are required.
    510 NOT_EXTENDED "Not Extended";
    /// `511`. The client needs to authenticate to gain network access.
    511 NETWORK_AUTHENTICATION_REQUIRED "Network Authentication Required";
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.as_u16()).finish()
    }
}

// ===== Error =====

/// An error returned when a status code is outside `100..=999`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid status code: {0}")]
pub struct InvalidStatusCode(pub u16);
