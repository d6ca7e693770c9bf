use bytes::{BufMut, Bytes, BytesMut};

use super::{Response, SerializeError};
use crate::headers::Headers;
use crate::http::StatusCode;
use crate::log::{trace, warning};
use crate::{CRLF, SUPPORTED_VERSION};

const SP: &[u8] = b" ";
const COLON_SP: &[u8] = b": ";

/// Returns the exact serialized length of `res`.
///
/// # Errors
///
/// Returns [`SerializeError::StatusUnset`] if status is unset.
pub fn encoded_len(res: &Response) -> Result<usize, SerializeError> {
    let status = res.status.ok_or(SerializeError::StatusUnset)?;

    let mut len = SUPPORTED_VERSION.len()
        + SP.len()
        + StatusCode::DIGITS
        + SP.len()
        + status.reason().len()
        + CRLF.len();

    for header in &res.headers {
        len += header.name.len() + COLON_SP.len() + header.value.len() + CRLF.len();
    }

    Ok(len + CRLF.len() + res.body.len())
}

/// Write the complete response into `buf`, returning the number of bytes written.
///
/// Capacity is checked before anything is written.
///
/// # Errors
///
/// Returns [`SerializeError::StatusUnset`] if status is unset, or [`SerializeError::Overflow`]
/// if `buf` cannot hold the whole response.
pub fn write_response<B: BufMut>(res: &Response, buf: &mut B) -> Result<usize, SerializeError> {
    let status = res.status.ok_or(SerializeError::StatusUnset)?;
    let needed = encoded_len(res)?;
    let remaining = buf.remaining_mut();

    if remaining < needed {
        return Err(SerializeError::Overflow { needed, remaining });
    }

    write_head(status, &res.headers, buf);
    buf.put_slice(&res.body);

    let written = remaining - buf.remaining_mut();
    if written != needed {
        warning!("serialized length mismatch: expected {needed}, written {written}");
        return Err(SerializeError::LengthMismatch { expected: needed, written });
    }

    Ok(written)
}

/// Serialize `res` into exactly sized [`Bytes`], without a trailing `\0`.
pub fn to_raw(res: &Response) -> Result<Bytes, SerializeError> {
    let len = encoded_len(res)?;
    let mut buf = BytesMut::with_capacity(len);

    write_response(res, &mut buf)?;

    trace!("serialized response, {len} bytes");

    Ok(buf.freeze())
}

fn write_head<B: BufMut>(status: StatusCode, headers: &Headers, bufm: &mut B) {
    let mut code = itoa::Buffer::new();

    bufm.put_slice(SUPPORTED_VERSION);
    bufm.put_slice(SP);
    bufm.put_slice(code.format(status.as_u16()).as_bytes());
    bufm.put_slice(SP);
    bufm.put_slice(status.reason().as_bytes());
    bufm.put_slice(CRLF);

    for header in headers {
        bufm.put_slice(&header.name);
        bufm.put_slice(COLON_SP);
        bufm.put_slice(&header.value);
        bufm.put_slice(CRLF);
    }

    bufm.put_slice(CRLF);
}
