use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

pub const PARQUET_MAGIC: &[u8] = b"PAR1";
pub const ARROW_MAGIC: &[u8] = b"ARROW1";

/// True if the file both starts and ends with `magic`.
///
/// A file shorter than two copies of the marker can't hold both, so it never matches.
pub fn magic_bytes_match_both_ends(file: &mut File, magic: &[u8]) -> io::Result<bool> {
    if file.metadata()?.len() < 2 * magic.len() as u64 {
        return Ok(false);
    }
    Ok(magic_bytes_match_start(file, magic)? && magic_bytes_match_end(file, magic)?)
}

const IPC_CONTINUATION: [u8; 4] = [0xFF; 4];

/// Cheap plausibility check for the Arrow IPC stream framing.
///
/// The stream format has no magic, it opens with an (optionally
/// continuation-prefixed) little-endian length of the schema message. The
/// length must be positive and fit inside the file, which keeps the real
/// decoder from sizing buffers off arbitrary bytes.
pub fn ipc_stream_prefix_fits(file: &mut File) -> io::Result<bool> {
    let file_len = file.metadata()?.len();
    if file_len < 8 {
        return Ok(false);
    }

    let start_pos = file.stream_position()?;
    let mut buf = [0u8; 8];
    file.seek(SeekFrom::Start(0))?;
    file.read_exact(&mut buf)?;
    file.seek(SeekFrom::Start(start_pos))?;

    let (prefix_len, len_bytes) = if buf[..4] == IPC_CONTINUATION {
        (8u64, [buf[4], buf[5], buf[6], buf[7]])
    } else {
        (4u64, [buf[0], buf[1], buf[2], buf[3]])
    };
    let meta_len = i32::from_le_bytes(len_bytes);

    Ok(meta_len > 0 && prefix_len + meta_len as u64 <= file_len)
}

pub fn magic_bytes_match_start(file: &mut File, expected: &[u8]) -> io::Result<bool> {
    if file.metadata()?.len() < expected.len() as u64 {
        return Ok(false);
    }

    let mut buf = vec![0u8; expected.len()];

    // save original position so we can return to it later
    let start_pos = file.stream_position()?;

    file.seek(SeekFrom::Start(0))?;
    file.read_exact(&mut buf)?;

    file.seek(SeekFrom::Start(start_pos))?;

    Ok(buf == expected)
}

pub fn magic_bytes_match_end(file: &mut File, expected: &[u8]) -> io::Result<bool> {
    if file.metadata()?.len() < expected.len() as u64 {
        return Ok(false);
    }

    let mut buf = vec![0u8; expected.len()];

    let start_pos = file.stream_position()?;

    let expected_len = i64::try_from(expected.len())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    file.seek(SeekFrom::End(-expected_len))?;
    file.read_exact(&mut buf)?;

    file.seek(SeekFrom::Start(start_pos))?;

    Ok(buf == expected)
}
