use encoding_rs::Encoding;
use std::io::Read;

pub const STDIN_ENCODING_ENV: &str = "BASH_HOOKS_STDIN_ENCODING";

pub fn read_stdin_text() -> Result<String, std::io::Error> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(decode_stdin_bytes(&buf))
}

/// Decodes the hook payload bytes: explicit label, then BOM, then UTF-8,
/// then lossy UTF-8.
pub fn decode_stdin_bytes(bytes: &[u8]) -> String {
    let label = std::env::var(STDIN_ENCODING_ENV).ok();
    decode_with_label(bytes, label.as_deref())
}

fn decode_with_label(bytes: &[u8], label: Option<&str>) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    if let Some(enc) = label.and_then(|l| Encoding::for_label(l.as_bytes())) {
        tracing::debug!(
            target: "bash_hooks.input",
            encoding = enc.name(),
            bytes = bytes.len(),
            "decoding stdin with configured encoding"
        );
        let (cow, _, _) = enc.decode(bytes);
        return cow.into_owned();
    }

    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        tracing::debug!(
            target: "bash_hooks.input",
            encoding = enc.name(),
            bytes = bytes.len(),
            "detected BOM on stdin"
        );
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        return cow.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            tracing::debug!(
                target: "bash_hooks.input",
                bytes = bytes.len(),
                "stdin is not valid UTF-8, decoding lossily"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_bytes() {
        assert_eq!(decode_with_label(&[], None), "");
    }

    #[test]
    fn test_decode_utf8() {
        let text = r#"{"tool_name":"Bash","tool_input":{"command":"echo héllo"}}"#;
        assert_eq!(decode_with_label(text.as_bytes(), None), text);
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"{}");
        assert_eq!(decode_with_label(&bytes, None), "{}");
    }

    #[test]
    fn test_configured_utf16le() {
        let bytes = vec![0x7B, 0x00, 0x7D, 0x00];
        assert_eq!(decode_with_label(&bytes, Some("utf-16le")), "{}");
    }

    #[test]
    fn test_unknown_label_falls_back_to_utf8() {
        assert_eq!(decode_with_label(b"{}", Some("no-such-encoding")), "{}");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let out = decode_with_label(&[b'{', 0xFF, b'}'], None);
        assert_eq!(out, "{\u{FFFD}}");
    }
}
