use httpspan::{DEFAULT_HEADER_CAPACITY, Header, Request, Response, StatusCode};

const REQ: &[u8] = b"POST /api/items HTTP/1.1\r\n\
Host: api.example.com\r\n\
User-Agent: MyClient/1.0\r\n\
Content-Type: application/json\r\n\
Content-Length: 48\r\n\
\r\n\
{\"name\":\"Widget\",\"quantity\":10,\"price\":9.99}";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ===== Parse =====

    let mut slots = Header::slots::<DEFAULT_HEADER_CAPACITY>();
    let mut req = Request::new(&mut slots);
    req.parse(REQ)?;

    println!("> {} {:?} {:?}", req.method(), req.route(), req.version());
    println!("{}", req.body().escape_ascii());

    // spans borrow `REQ`, copy out for an owned C string
    if let Some(host) = req.find_header("Host") {
        let value = host.value.to_c_string()?;
        println!("host = {value:?}");
    }

    // ===== Serialize =====

    let mut slots = Header::slots::<2>();
    let mut res = Response::new(&mut slots);
    res.set_status(StatusCode::OK);
    res.add_header("Host", "somehost.some.where")?;
    res.add_header("Status", "ok")?;

    if let Err(err) = res.add_header("X-Extra", "rejected") {
        println!("third header rejected: {err}");
    }

    res.set_body(b"Some body");

    let raw = res.to_raw()?;

    println!("\nComposed response:");
    println!("----\n{}\n----", raw.escape_ascii());
    println!("Body length = {}", res.body().len());

    Ok(())
}
