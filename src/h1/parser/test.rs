use crate::h1::parser::{Limits, ParseError, parse_header_line, parse_reqline, parse_request};
use crate::headers::{CapacityError, Header};
use crate::http::Method;
use crate::request::Request;

#[test]
fn test_parse_reqline() {
    macro_rules! test {
        (#[error($err:ident)] $input:expr) => {
            match parse_reqline($input, &Limits::DEFAULT) {
                Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
                Err(err) => assert_eq!(err, ParseError::$err, "input: {:?}", $input.escape_ascii().to_string()),
            }
        };
        {
            $input:expr;
            $m:ident, $target:expr;
            $consumed:expr
        } => {
            let (reqline, consumed) = parse_reqline($input, &Limits::DEFAULT).unwrap();
            assert_eq!(reqline.method, Method::$m);
            assert_eq!(reqline.target, $target);
            assert_eq!(reqline.version, "HTTP/1.1");
            assert_eq!(consumed, $consumed, "invalid consumed length");
        };
    }

    test! {
        b"GET /hello HTTP/1.1\r\n";
        GET, "/hello";
        21
    };
    test! {
        b"HEAD / HTTP/1.1\r\nHost: ex\r\n";
        HEAD, "/";
        17
    };
    test! {
        b"PUT /a/b HTTP/1.1\r\n";
        PUT, "/a/b";
        19
    };
    test! {
        b"DELETE /res?id=5 HTTP/1.1\r\n";
        DELETE, "/res?id=5";
        27
    };
    test! {
        b"OPTIONS * HTTP/1.1\r\n";
        OPTIONS, "*";
        20
    };
    test! {
        b"CONNECT example.com:443 HTTP/1.1\r\n";
        CONNECT, "example.com:443";
        34
    };
    test! {
        b"BADMETHOD / HTTP/1.1\r\n";
        UNKNOWN, "/";
        22
    };
    test! {
        b"ABCDEFGHIJ / HTTP/1.1\r\n";
        UNKNOWN, "/";
        23
    };
    test! {
        b"GET /docs#section1 HTTP/1.1\r\nReferer: https://example.com\r\n";
        GET, "/docs#section1";
        29
    };

    // Error
    test!(#[error(UnsupportedVersion)] b"GET / HTTP/1.0\r\n");
    test!(#[error(UnsupportedVersion)] b"GET / HTTP/2.0\r\n");
    test!(#[error(UnsupportedVersion)] b"GET / HTTP/1.1 \r\n");
    test!(#[error(UnsupportedVersion)] b"GET / HTTP/1.11\r\n");
    test!(#[error(UnsupportedVersion)] b"GET /a b HTTP/1.1\r\n");
    test!(#[error(UnterminatedLine)] b"GET / HTTP/1.1\r");
    test!(#[error(UnterminatedLine)] b"GET / HTTP/1.1\n");
    test!(#[error(UnterminatedLine)] b"GET / HTTP/1.1");
    test!(#[error(InvalidSeparator)] b"GET / HTTP/1.1\rContent-Ty");
    test!(#[error(MissingSeparator)] b"GET\r\n");
    test!(#[error(MissingSeparator)] b"GET /\r\n");
    test!(#[error(MissingSeparator)] b"GET/short HTTP/1.1\r\n");
    test!(#[error(MethodTooLong)] b"VERYLONGMETHOD / HTTP/1.1\r\n");
    test!(#[error(InvalidMethod)] b" / HTTP/1.1\r\n");
}

#[test]
fn test_parse_header_line() {
    macro_rules! test {
        (#[error($err:ident)] $input:expr) => {
            assert_eq!(parse_header_line($input), Err(ParseError::$err));
        };
        ($input:expr; $name:literal, $value:expr) => {
            let header = parse_header_line($input).unwrap();
            assert_eq!(header.name, $name);
            assert_eq!(header.value, $value);
        };
    }

    test!(b"Content-Length: 1224"; "Content-Length", "1224");
    test!(b"X-Custom:   value with leading spaces"; "X-Custom", "value with leading spaces");
    test!(b"X-Tab:\tvalue"; "X-Tab", "value");
    test!(b"X-Trailing: value  "; "X-Trailing", "value  ");
    test!(b"X-Empty:"; "X-Empty", "");
    test!(b"X-Blank:      "; "X-Blank", "");
    test!(b"X-Colons: a:b:c"; "X-Colons", "a:b:c");
    test!(b"X-Cr: a\rb"; "X-Cr", "a\rb");
    test!(b"NoSpace:value"; "NoSpace", "value");

    test!(#[error(LeadingWhitespace)] b" Host: ex");
    test!(#[error(LeadingWhitespace)] b"\tHost: ex");
    test!(#[error(MissingColon)] b"Host example");
    test!(#[error(MissingColon)] b"");
    test!(#[error(EmptyHeaderName)] b": value");
}

#[test]
fn test_parse_request() {
    macro_rules! test {
        {
            $input:expr;
            $m:ident, $route:expr, headers: $hlen:expr;
            $body:expr
        } => {
            let input: &[u8] = $input;
            let mut slots = Header::slots::<10>();
            let mut req = Request::new(&mut slots);

            let consumed = parse_request(input, &mut req).unwrap();

            assert_eq!(consumed, input.len());
            assert_eq!(req.method(), Method::$m);
            assert_eq!(req.route(), $route);
            assert_eq!(req.version(), "HTTP/1.1");
            assert_eq!(req.headers().len(), $hlen, "invalid header count");
            assert_eq!(req.body(), $body, "invalid body");
        };
    }

    test! {
        b"GET /hello HTTP/1.1\r\n\r\n";
        GET, "/hello", headers: 0;
        ""
    };
    test! {
        b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        GET, "/", headers: 1;
        ""
    };
    test! {
        b"POST /submit HTTP/1.1\r\n\
        Host: example.com\r\n\
        Content-Length: 13\r\n\
        Content-Type: text/plain\r\n\
        \r\n\
        Line1\r\nLine2";
        POST, "/submit", headers: 3;
        "Line1\r\nLine2"
    };
    test! {
        b"GET /search?q=this+is+a+long+query&sort=desc&page=2 HTTP/1.1\r\n\
        Host: search.example\r\n\
        Accept: */*\r\n\
        \r\n";
        GET, "/search?q=this+is+a+long+query&sort=desc&page=2", headers: 2;
        ""
    };
    test! {
        b"GET /cookies HTTP/1.1\r\nHost: ex\r\nCookie: a=1\r\nCookie: b=2\r\n\r\n";
        GET, "/cookies", headers: 3;
        ""
    };
    test! {
        b"HEAD /path/%7Euser/resource?id=10#frag HTTP/1.1\r\nHost: ex\r\n\r\n";
        HEAD, "/path/%7Euser/resource?id=10#frag", headers: 1;
        ""
    };
    test! {
        b"PATCH /a_b-c.123/~z HTTP/1.1\r\nHost: ex\r\nX-Flag: yes\r\n\r\n";
        PATCH, "/a_b-c.123/~z", headers: 2;
        ""
    };
    test! {
        b"GET /empty-header HTTP/1.1\r\nHost: ex\r\nX-Empty:\r\n\r\n";
        GET, "/empty-header", headers: 2;
        ""
    };
    test! {
        b"DELETE /res?id=5 HTTP/1.1\r\n\
        Host: ex\r\n\
        Connection: keep-alive\r\n\
        Accept-Encoding: gzip\r\n\
        User-Agent: test/1.0\r\n\
        \r\n";
        DELETE, "/res?id=5", headers: 4;
        ""
    };
    test! {
        b"BADMETHOD / HTTP/1.1\r\n\r\n";
        UNKNOWN, "/", headers: 0;
        ""
    };
    // start line only, nothing left for headers
    test! {
        b"GET /only HTTP/1.1\r\n";
        GET, "/only", headers: 0;
        ""
    };
    // no blank line, unterminated remainder is the body
    test! {
        b"GET / HTTP/1.1\r\nHost: ex\r\nleftover";
        GET, "/", headers: 1;
        "leftover"
    };
    // body is not framed by Content-Length
    test! {
        b"POST /upload HTTP/1.1\r\nContent-Length: 2\r\n\r\nmore than two";
        POST, "/upload", headers: 1;
        "more than two"
    };
}

#[test]
fn test_parse_request_error() {
    macro_rules! test {
        ($err:pat, $input:expr) => {
            let mut slots = Header::slots::<10>();
            let mut req = Request::new(&mut slots);
            let result = parse_request($input, &mut req);
            assert!(matches!(result, Err($err)), "unexpected {result:?}");
        };
    }

    test!(ParseError::EmptyInput, b"");
    test!(ParseError::MissingSeparator, b"GET/short HTTP/1.1\r\nHost: ex\r\n\r\n");
    test!(ParseError::UnsupportedVersion, b"GET /no-crlf HTTP/1.1Host: ex\r\n\r\n");
    test!(ParseError::MissingColon, b"GET /bad-header HTTP/1.1\r\nHost example\r\n\r\n");
    test!(ParseError::LeadingWhitespace, b"GET /leading-ws HTTP/1.1\r\n Host: ex\r\n\r\n");
    test!(
        ParseError::LeadingWhitespace,
        b"GET /folded HTTP/1.1\r\nHost: ex\r\nX-Long: part1\r\n continuation\r\n\r\n"
    );
    test!(ParseError::UnsupportedVersion, b"GET / HTTP/1.0\r\n\r\n");
    test!(ParseError::UnterminatedLine, b"GET / HTTP/1.1\r");
    test!(ParseError::UnterminatedLine, b"GET / HTTP/1.1\n");
}

#[test]
fn test_headers_and_body() {
    let raw = b"POST /upload HTTP/1.1\r\n\
        Host: example.com\r\n\
        X-Custom:   value with leading spaces\r\n\
        \r\n\
        BODY CONTENT";

    let mut slots = Header::slots::<10>();
    let mut req = Request::new(&mut slots);

    assert_eq!(req.parse(raw), Ok(raw.len()));
    assert_eq!(req.method(), Method::POST);

    let host = req.find_header("host").unwrap();
    assert_eq!(host.name, "Host");
    assert_eq!(host.value, "example.com");

    assert_eq!(req.find_header("x-custom").unwrap().value, "value with leading spaces");
    assert_eq!(req.body(), "BODY CONTENT");

    assert!(req.find_header("x-tes").is_none());
    assert!(req.find_header("x-customm").is_none());
}

#[test]
fn test_binary_body() {
    let mut raw = b"POST /binA HTTP/1.1\r\nHost: ex\r\nContent-Length: 6\r\n\r\n".to_vec();
    raw.extend_from_slice(&[b'A', 0, b'B', 0, b'C', 0]);

    let mut slots = Header::slots::<4>();
    let mut req = Request::new(&mut slots);

    assert_eq!(req.parse(&raw), Ok(raw.len()));
    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.body().len(), 6);
    assert_eq!(req.body(), b"A\0B\0C\0");
}

#[test]
fn test_whitespace_only_value() {
    let raw = b"GET / HTTP/1.1\r\n\
        X-Test:                                                                    \r\n\
        \r\n";

    let mut slots = Header::slots::<10>();
    let mut req = Request::new(&mut slots);

    assert!(req.parse(raw).is_ok());
    let x_test = req.find_header("x-test").unwrap();
    assert!(x_test.value.is_empty());
}

#[test]
fn test_header_capacity() {
    let raw = b"GET / HTTP/1.1\r\nHost: ex\r\nAccept: */*\r\nX-Third: 3\r\n\r\n";

    let mut slots = Header::slots::<2>();
    let mut req = Request::new(&mut slots);

    assert_eq!(
        req.parse(raw),
        Err(ParseError::TooManyHeaders(CapacityError { capacity: 2 }))
    );

    let headers = req.headers().as_slice();
    assert_eq!(headers.len(), 2);
    assert_eq!(headers[0], Header::new("Host", "ex"));
    assert_eq!(headers[1], Header::new("Accept", "*/*"));
}

#[test]
fn test_limits() {
    let mut slots = Header::slots::<4>();
    let mut req = Request::new(&mut slots);

    let limits = Limits::DEFAULT.with_max_line_len(16);
    assert_eq!(
        req.parse_with(b"GET /a-very-long-target-path HTTP/1.1\r\n\r\n", &limits),
        Err(ParseError::TooLong)
    );

    let limits = Limits::DEFAULT.with_max_line_len(32);
    let raw = b"GET / HTTP/1.1\r\nX-Long: aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\r\n\r\n";
    assert_eq!(req.parse_with(raw, &limits), Err(ParseError::TooLong));

    let raw = b"GET / HTTP/1.1\r\nX-Short: aaaa\r\n\r\n";
    assert_eq!(req.parse_with(raw, &limits), Ok(raw.len()));

    let limits = Limits::DEFAULT.with_max_method_len(3);
    assert_eq!(req.parse_with(b"GET / HTTP/1.1\r\n\r\n", &limits), Ok(18));
    assert_eq!(
        req.parse_with(b"POST / HTTP/1.1\r\n\r\n", &limits),
        Err(ParseError::MethodTooLong)
    );
}

#[test]
fn test_request_reuse() {
    let first = b"GET / HTTP/1.1\r\nHost: ex\r\nAccept: */*\r\n\r\n";
    let second = b"DELETE /item HTTP/1.1\r\n\r\nbody";

    let mut slots = Header::slots::<4>();
    let mut req = Request::new(&mut slots);

    assert!(req.parse(first).is_ok());
    assert_eq!(req.headers().len(), 2);

    assert!(req.parse(second).is_ok());
    assert_eq!(req.method(), Method::DELETE);
    assert_eq!(req.route(), "/item");
    assert!(req.headers().is_empty());
    assert!(req.find_header("host").is_none());
    assert_eq!(req.body(), "body");
}

#[test]
fn test_parsed_spans_borrow_input() {
    let raw = b"GET /hello HTTP/1.1\r\nHost: ex\r\n\r\nhi".to_vec();

    let mut slots = Header::slots::<4>();
    let mut req = Request::new(&mut slots);
    req.parse(&raw).unwrap();

    let range = raw.as_ptr_range();
    assert!(!req.route().is_owned());
    assert!(range.contains(&req.route().as_ptr()));
    assert!(range.contains(&req.body().as_ptr()));
    assert!(range.contains(&req.headers().as_slice()[0].value.as_ptr()));
}

#[test]
fn test_unterminated_long_tail_is_body() {
    let mut raw = b"POST /up HTTP/1.1\r\nHost: ex\r\n".to_vec();
    raw.extend(std::iter::repeat_n(b'x', 9000));

    let mut slots = Header::slots::<4>();
    let mut req = Request::new(&mut slots);

    assert_eq!(req.parse(&raw), Ok(9029));
    assert_eq!(req.headers().len(), 1);
    assert_eq!(req.body().len(), 9000);
    assert!(req.body().iter().all(|&b| b == b'x'));

    let limits = Limits::DEFAULT.with_max_line_len(32);
    let raw = b"GET / HTTP/1.1\r\nX-Long: aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    assert_eq!(req.parse_with(raw, &limits), Ok(raw.len()));
    assert!(req.headers().is_empty());
    assert_eq!(req.body(), &raw[16..]);

    let limits = Limits::DEFAULT.with_max_line_len(16);
    assert_eq!(
        req.parse_with(b"GET /a-very-long-target-path HTTP/1.1", &limits),
        Err(ParseError::UnterminatedLine)
    );
}

#[test]
fn test_failed_parse_resets_request() {
    let mut slots = Header::slots::<4>();
    let mut req = Request::new(&mut slots);
    assert_eq!(req.method(), Method::UNKNOWN);

    assert!(req.parse(b"DELETE /old HTTP/1.1\r\nHost: ex\r\n\r\nbody").is_ok());
    assert_eq!(req.method(), Method::DELETE);

    assert_eq!(
        req.parse(b"GET / HTTP/1.0\r\n\r\n"),
        Err(ParseError::UnsupportedVersion)
    );
    assert_eq!(req.method(), Method::UNKNOWN);
    assert!(req.route().is_empty());
    assert!(req.version().is_empty());
    assert!(req.headers().is_empty());
    assert!(req.body().is_empty());

    assert!(req.parse(b"PUT /x HTTP/1.1\r\n\r\n").is_ok());
    assert_eq!(req.parse(b""), Err(ParseError::EmptyInput));
    assert_eq!(req.method(), Method::UNKNOWN);
    assert!(req.route().is_empty());
}
