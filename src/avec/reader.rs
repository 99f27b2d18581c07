//! Reader-based request and reply exchange.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{ErrorKind, Read, Write},
    vec::Vec,
};

use log::debug;
use thiserror::Error;

extern crate std;

/// Errors occurring while exchanging messages with a device.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied transport.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Send a request, then collect the reply.
///
/// See [`read_reply`] for how the end of the reply is found.
pub fn exchange<P: Read + Write>(port: &mut P, request: &[u8]) -> Result<Vec<u8>, Error> {
    port.write_all(request)?;
    port.flush()?;

    read_reply(port)
}

/// Collect a reply until the transport has nothing more to give.
///
/// The device does not mark the end of a reply. Reading stops once the reader
/// reports end of data, or once it has been idle for longer than its own
/// timeout (surfacing as [`ErrorKind::TimedOut`] or [`ErrorKind::WouldBlock`]).
/// Configure that timeout on the transport, as for a serial port. A reply cut
/// short this way is normal, and the decoders end cleanly at the last
/// complete message.
pub fn read_reply(r: &mut impl Read) -> Result<Vec<u8>, Error> {
    let mut reply = Vec::new();
    let mut buf = [0; 512];

    loop {
        match r.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => reply.extend_from_slice(&buf[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => break,
            Err(err) => return Err(err.into()),
        }
    }

    debug!("Read {} byte reply.", reply.len());

    Ok(reply)
}
