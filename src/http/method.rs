/// HTTP Method.
///
/// This API follows the [RFC9110] and the PATCH method from [RFC5789].
///
/// Tokens outside the standard set are represented by [`Method::UNKNOWN`] rather than rejected,
/// a well formed request line is not an error solely because of its verb.
///
/// [RFC5789]: https://www.rfc-editor.org/rfc/rfc5789
/// [RFC9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-methods>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method(u8);

struct Props {
    safe: bool,
    idem: bool,
    value: &'static [u8],
}

props! {
    static PROPS: [10];

    /// The [GET] method requests transfer of a current selected representation for the target
    /// resource.
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    pub const GET = (0, b"GET", safe, idem);
    /// The [HEAD] method is identical to GET except that the server MUST NOT send content in the
    /// response.
    ///
    /// [HEAD]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-head>
    pub const HEAD = (1, b"HEAD", safe, idem);
    /// The [POST] method requests that the target resource process the representation enclosed
    /// in the request.
    ///
    /// [POST]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-post>
    pub const POST = (2, b"POST", , );
    /// The [PUT] method requests that the state of the target resource be created or replaced.
    ///
    /// [PUT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-put>
    pub const PUT = (3, b"PUT", , idem);
    /// The [DELETE] method requests that the origin server remove the target resource.
    ///
    /// [DELETE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-delete>
    pub const DELETE = (4, b"DELETE", , idem);
    /// The [CONNECT] method requests a tunnel to the destination origin server.
    ///
    /// [CONNECT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-connect>
    pub const CONNECT = (5, b"CONNECT", , );
    /// The [OPTIONS] method requests the communication options available for the target resource.
    ///
    /// [OPTIONS]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-options>
    pub const OPTIONS = (6, b"OPTIONS", safe, idem);
    /// The [TRACE] method requests a remote, application-level loop-back of the request message.
    ///
    /// [TRACE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-trace>
    pub const TRACE = (7, b"TRACE", safe, idem);
    /// The [PATCH] method requests that a set of changes be applied to the target resource.
    ///
    /// [PATCH]: <https://www.rfc-editor.org/rfc/rfc5789#section-2>
    pub const PATCH = (8, b"PATCH", , );
}

impl Method {
    /// Any method token outside the standard set.
    pub const UNKNOWN: Self = Self(9);

    /// Returns `true` if the method is [`Method::UNKNOWN`].
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    /// Returns `true` if method is considered ["safe"].
    ///
    /// ["safe"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-safe-methods>
    #[inline]
    pub const fn is_safe(&self) -> bool {
        PROPS[self.0 as usize].safe
    }

    /// Returns `true` if method is considered ["idempotent"].
    ///
    /// ["idempotent"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-idempotent-methods>
    #[inline]
    pub const fn is_idempotent(&self) -> bool {
        PROPS[self.0 as usize].idem
    }

    /// Returns string representation of the method, `"UNKNOWN"` for unknown method.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match std::str::from_utf8(PROPS[self.0 as usize].value) {
            Ok(s) => s,
            Err(_) => "UNKNOWN",
        }
    }
}

impl Default for Method {
    #[inline]
    fn default() -> Self {
        Self::GET
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Macros =====

macro_rules! props {
    (
        static $props:ident: [$len:literal];
        $(
           $(#[$doc:meta])*
           pub const $name:ident = ($idx:literal, $val:literal, $($safe:ident)?, $($idem:ident)?);
        )*
    ) => {
        impl Method {
            $(
               $(#[$doc])*
               pub const $name: Self = Self($idx);
            )*

            /// Create [`Method`] from the exact, case-sensitive, method token.
            ///
            /// Unrecognized tokens return [`Method::UNKNOWN`].
            #[inline]
            pub const fn from_bytes(src: &[u8]) -> Method {
                match src {
                    $(
                        $val => Self::$name,
                    )*
                    _ => Self::UNKNOWN,
                }
            }
        }

        static $props: [Props; $len] = [
            $(
                Props { value: $val, safe: prop!($($safe)?), idem: prop!($($idem)?) },
            )*
            Props { value: b"UNKNOWN", safe: false, idem: false },
        ];
    };
}

macro_rules! prop {
    (safe) => { true };
    (idem) => { true };
    () => { false };
}

use {props, prop};
