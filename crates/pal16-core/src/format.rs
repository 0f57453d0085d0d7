// crates/pal16-core/src/format.rs

use crate::error::{Pal16Error, Result};
use crate::palette::{hex16, palette_id_16};
use crate::stream::{pack_indices, unpack_indices};

const MAGIC: &[u8; 4] = b"P16Q";
pub const VERSION: u16 = 1;

/// Fixed bytes around the payload: magic + version + palette_id + count + crc.
const OVERHEAD: usize = 4 + 2 + 16 + 8 + 4;

/// Packed palette-index container.
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// palette_id:[16]    (palette::palette_id_16 of the table the indices refer to)
/// count:u64          (number of indices, not bytes)
/// packed[(count+1)/2]
/// crc32:u32          (over everything before crc32)
pub fn encode(indices: &[u8]) -> Result<Vec<u8>> {
    let packed = pack_indices(indices)?;

    let mut b = Vec::with_capacity(OVERHEAD + packed.len());
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    b.extend_from_slice(&palette_id_16());
    b.extend_from_slice(&(indices.len() as u64).to_le_bytes());
    b.extend_from_slice(&packed);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());
    Ok(b)
}

/// Decode a container back into indices. Verifies magic, version, palette id,
/// payload length and crc32.
pub fn decode(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.len() < OVERHEAD {
        return Err(Pal16Error::Format("container too small".into()));
    }
    if &bytes[0..4] != MAGIC {
        return Err(Pal16Error::Format("bad magic".into()));
    }

    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(fixed::<4>(&bytes[crc_off..])?);
    if crc_expected != crc32(&bytes[..crc_off]) {
        return Err(Pal16Error::Format("crc32 mismatch".into()));
    }

    let mut i = 4usize;
    let version = u16::from_le_bytes(read::<2>(bytes, &mut i)?);
    if version != VERSION {
        return Err(Pal16Error::Format(format!("unsupported version {version}")));
    }

    let id = read::<16>(bytes, &mut i)?;
    if id != palette_id_16() {
        return Err(Pal16Error::Format(format!(
            "palette id mismatch: file={} expected={}",
            hex16(&id),
            hex16(&palette_id_16())
        )));
    }

    let count = u64::from_le_bytes(read::<8>(bytes, &mut i)?);
    let count = usize::try_from(count)
        .map_err(|_| Pal16Error::Format(format!("count too large: {count}")))?;
    let payload = &bytes[i..crc_off];
    if payload.len() != count.div_ceil(2) {
        return Err(Pal16Error::Format(format!(
            "payload length mismatch: count={} bytes={}",
            count,
            payload.len()
        )));
    }

    let out = unpack_indices(payload, count)?;
    log::debug!("decoded p16q v{version}: {count} indices");
    Ok(out)
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn read<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    let end = *i + N;
    if bytes.len() < end {
        return Err(Pal16Error::Format("unexpected eof".into()));
    }
    let v = fixed::<N>(&bytes[*i..end])?;
    *i = end;
    Ok(v)
}

fn fixed<const N: usize>(slice: &[u8]) -> Result<[u8; N]> {
    slice
        .try_into()
        .map_err(|_| Pal16Error::Format(format!("expected {N} bytes, got {}", slice.len())))
}
