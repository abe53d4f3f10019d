//! Memo message encoding
//!
//! The memo program records raw bytes; the convention is UTF-8 text. No
//! length limit is enforced here. An oversized payload is rejected by the
//! network or the program and comes back as a submission error.

use std::string::FromUtf8Error;

/// Encode a human-readable message into the memo instruction payload.
pub fn encode_message(message: &str) -> Vec<u8> {
    message.as_bytes().to_vec()
}

/// Decode a memo payload back into text.
pub fn decode_message(payload: &[u8]) -> Result<String, FromUtf8Error> {
    String::from_utf8(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_hello() {
        let payload = encode_message("Hello Solana!");
        assert_eq!(payload, b"Hello Solana!".to_vec());
        assert_eq!(payload.len(), 13);
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode_message("").is_empty());
    }

    #[test]
    fn test_encode_multibyte() {
        // 2 + 3 + 4 byte code points
        let payload = encode_message("é€🦀");
        assert_eq!(payload.len(), 9);
        assert_eq!(decode_message(&payload).unwrap(), "é€🦀");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(decode_message(&[0xff, 0xfe]).is_err());
    }

    proptest! {
        #[test]
        fn prop_payload_is_utf8_bytes(text in any::<String>()) {
            let payload = encode_message(&text);
            prop_assert_eq!(payload.len(), text.len());
            prop_assert_eq!(decode_message(&payload).unwrap(), text);
        }
    }
}
