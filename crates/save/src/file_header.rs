// ---------------------------------------------------------------------------
// file_header – Session file header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (28 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "CYTO" (0x43 0x59 0x54 0x4F)
//   [4..8]   Header format version (u32)
//   [8..12]  Flags (u32: bit 0 = lz4-compressed payload)
//   [12..20] Timestamp (Unix epoch, u64)
//   [20..24] Payload size in bytes (u32)
//   [24..28] xxHash32 checksum of the payload (everything after the header)
//
// On save: encode SessionData -> compress -> prepend header (checksum of the
// compressed payload). On load: check magic -> validate checksum -> strip
// header -> decompress -> decode. There are no headerless legacy sessions;
// bytes without the magic are rejected outright.

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a Cytopia session file.
pub const MAGIC: [u8; 4] = *b"CYTO";

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 28;

/// Current header format version. Distinct from the SessionData version
/// (which tracks schema changes); this tracks the header layout itself.
pub const HEADER_FORMAT_VERSION: u32 = 1;

/// Flag bit: the payload is lz4-compressed.
pub const FLAG_COMPRESSED: u32 = 1;

/// Seed for the xxHash32 checksum.
const XXHASH_SEED: u32 = 0;

/// Parsed file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub flags: u32,
    pub timestamp: u64,
    pub payload_size: u32,
    pub checksum: u32,
}

impl FileHeader {
    /// Create a new header describing `payload`.
    pub fn new(payload: &[u8], flags: u32) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            format_version: HEADER_FORMAT_VERSION,
            flags,
            timestamp,
            payload_size: payload.len() as u32,
            checksum: xxh32(payload, XXHASH_SEED),
        }
    }
}

/// Wrap a payload with a session file header.
///
/// Returns bytes: [header (28 bytes)] ++ [payload].
pub fn wrap_with_header(payload: &[u8], flags: u32) -> Vec<u8> {
    let header = FileHeader::new(payload, flags);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());

    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.format_version.to_le_bytes());
    out.extend_from_slice(&header.flags.to_le_bytes());
    out.extend_from_slice(&header.timestamp.to_le_bytes());
    out.extend_from_slice(&header.payload_size.to_le_bytes());
    out.extend_from_slice(&header.checksum.to_le_bytes());

    out.extend_from_slice(payload);
    out
}

/// Parse and validate the file header, returning it and the payload bytes.
///
/// # Errors
///
/// - `Corrupted` if the magic bytes are missing, the file is shorter than a
///   header, the payload length disagrees with the header, or the checksum
///   does not match.
/// - `VersionMismatch` if the header format version is from a newer build.
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.len() < 4 || bytes[..4] != MAGIC {
        return Err(SaveError::Corrupted(
            "missing CYTO magic bytes (not a session file)".to_string(),
        ));
    }
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Corrupted(format!(
            "file is {} bytes, need at least {HEADER_SIZE} for the header",
            bytes.len()
        )));
    }

    let format_version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let flags = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    let timestamp = u64::from_le_bytes([
        bytes[12], bytes[13], bytes[14], bytes[15], bytes[16], bytes[17], bytes[18], bytes[19],
    ]);
    let payload_size = u32::from_le_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    let checksum = u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]);

    if format_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: HEADER_FORMAT_VERSION,
            found: format_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != payload_size as usize {
        return Err(SaveError::Corrupted(format!(
            "header says {payload_size} payload bytes, file carries {}",
            payload.len()
        )));
    }

    let computed = xxh32(payload, XXHASH_SEED);
    if computed != checksum {
        return Err(SaveError::Corrupted(format!(
            "checksum mismatch (expected {checksum:#010X}, got {computed:#010X})"
        )));
    }

    Ok((
        FileHeader {
            format_version,
            flags,
            timestamp,
            payload_size,
            checksum,
        },
        payload,
    ))
}
