//! Fixed-capacity name buffers.
//!
//! Names are stored in fixed-size byte arrays that are *not* guaranteed to
//! carry a terminator: a name that fills the whole buffer has no zero byte.

use std::borrow::Cow;

/// Logical bytes of a fixed-capacity name.
///
/// The length is the number of bytes before the first zero byte, or the
/// buffer capacity when no zero byte is present.
///
/// # Example
///
/// ```
/// use jam_common::fixed_name;
///
/// assert_eq!(fixed_name(b"DATA\0\0\0\0"), b"DATA");
/// assert_eq!(fixed_name(b"FULLNAME"), b"FULLNAME");
/// ```
#[inline]
pub fn fixed_name(buffer: &[u8]) -> &[u8] {
    let len = memchr::memchr(0, buffer).unwrap_or(buffer.len());
    &buffer[..len]
}

/// Decode a fixed-capacity name for display and path building.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
#[inline]
pub fn fixed_name_lossy(buffer: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(fixed_name(buffer))
}

/// Pack a name into a zero-padded fixed-capacity buffer.
///
/// Names longer than `N` bytes are cut at `N`, in which case the buffer
/// carries no terminator.
pub fn encode_fixed_name<const N: usize>(name: &[u8]) -> [u8; N] {
    let mut buffer = [0u8; N];
    let len = name.len().min(N);
    buffer[..len].copy_from_slice(&name[..len]);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_first_zero() {
        assert_eq!(fixed_name(b"ab\0cd\0\0\0"), b"ab");
    }

    #[test]
    fn test_unterminated_name_uses_full_capacity() {
        let buffer = *b"ABCDEFGHIJKL";
        assert_eq!(fixed_name(&buffer).len(), 12);
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(fixed_name(&[0u8; 12]), b"");
        assert_eq!(fixed_name(&[]), b"");
    }

    #[test]
    fn test_lossy_decoding() {
        assert_eq!(fixed_name_lossy(b"MENU.BMP\0\0\0\0"), "MENU.BMP");
        assert_eq!(fixed_name_lossy(&[0x41, 0xFF, 0x00]), "A\u{FFFD}");
    }

    #[test]
    fn test_encode_pads_and_truncates() {
        let padded: [u8; 8] = encode_fixed_name(b"ABC");
        assert_eq!(&padded, b"ABC\0\0\0\0\0");

        let truncated: [u8; 4] = encode_fixed_name(b"TOOLONG");
        assert_eq!(&truncated, b"TOOL");
        assert_eq!(fixed_name(&truncated), b"TOOL");
    }
}
