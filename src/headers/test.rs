use crate::headers::{CapacityError, Header, Headers};
use crate::span::Span;

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<Header<'static>>();
    is_send_sync::<Headers<'static, 'static>>();
    is_send_sync::<Span<'static>>();
};

#[test]
fn headers_find() {
    let mut slots = Header::slots::<5>();
    let mut hs = Headers::new(&mut slots);

    hs.append(Header::new("X-Test", "v")).unwrap();
    hs.append(Header::new("Content-Type", "text/html")).unwrap();

    let found = hs.find("x-test").unwrap();
    assert_eq!(found.name, "X-Test");
    assert_eq!(found.value, "v");

    assert!(hs.find("x-tes").is_none());
    assert!(hs.find("x-testt").is_none());
    assert!(hs.find("missing").is_none());

    assert_eq!(hs.get("CONTENT-TYPE").unwrap(), "text/html");
    assert!(hs.contains("content-type"));
}

#[test]
fn headers_find_first_in_order() {
    let mut slots = Header::slots::<4>();
    let mut hs = Headers::new(&mut slots);

    hs.append(Header::new("Cookie", "a=1")).unwrap();
    hs.append(Header::new("cookie", "b=2")).unwrap();

    assert_eq!(hs.get("COOKIE").unwrap(), "a=1");

    let values: Vec<_> = hs.iter().map(|h| h.value.as_slice()).collect();
    assert_eq!(values, [&b"a=1"[..], &b"b=2"[..]]);
}

#[test]
fn headers_capacity() {
    let mut slots = Header::slots::<2>();
    let mut hs = Headers::new(&mut slots);

    assert!(hs.append(Header::new("A", "1")).is_ok());
    assert!(hs.append(Header::new("B", "2")).is_ok());
    assert!(hs.is_full());

    let err = hs.append(Header::new("C", "3")).unwrap_err();
    assert_eq!(err, CapacityError { capacity: 2 });
    assert_eq!(err.capacity(), 2);

    assert_eq!(hs.len(), 2);
    assert_eq!(hs.as_slice()[0], Header::new("A", "1"));
    assert_eq!(hs.as_slice()[1], Header::new("B", "2"));
}

#[test]
fn headers_zero_capacity() {
    let mut slots = Header::slots::<0>();
    let mut hs = Headers::new(&mut slots);

    assert!(hs.is_empty());
    assert!(hs.append(Header::new("A", "1")).is_err());
}

#[test]
fn headers_clear_releases_owned() {
    let mut slots = Header::slots::<2>();
    let mut hs = Headers::new(&mut slots);

    hs.append(Header::copy_from_slice(b"Server", b"httpspan")).unwrap();
    assert!(hs.as_slice()[0].name.is_owned());

    hs.clear();
    assert!(hs.is_empty());
    assert!(hs.find("server").is_none());
    drop(hs);

    assert!(!slots[0].name.is_owned());
}
