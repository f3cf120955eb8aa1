// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Character encoding detection for response bodies.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Decodes `bytes` using a BOM if present, otherwise a guessed encoding.
///
/// Any declared charset is ignored. Valid UTF-8 stays UTF-8; invalid
/// sequences become U+FFFD instead of failing.
pub(crate) fn decode_body(bytes: &[u8]) -> (String, &'static Encoding) {
    let guessed = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    let (text, encoding, _) = guessed.decode(bytes);
    (text.into_owned(), encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_body() {
        let body = r#"{"pnf":"Ładowanie zakończone"}"#;
        let (text, encoding) = decode_body(body.as_bytes());
        assert_eq!(text, body);
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(br#"{"prs":"Power ON."}"#);
        let (text, encoding) = decode_body(&bytes);
        assert_eq!(text, r#"{"prs":"Power ON."}"#);
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn utf16_bom_is_honoured() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "{}".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (text, encoding) = decode_body(&bytes);
        assert_eq!(text, "{}");
        assert_eq!(encoding, encoding_rs::UTF_16LE);
    }

    #[test]
    fn single_byte_body_keeps_ascii_intact() {
        // 0xB0 is a degree sign in Latin encodings and invalid as UTF-8.
        let bytes = b"{\"pnf\":\"Temp 25\xb0 C\"}";
        let (text, _) = decode_body(bytes);
        assert!(text.starts_with("{\"pnf\":\"Temp 25"));
        assert!(text.ends_with(" C\"}"));
        assert!(!text.contains('\u{FFFD}'));
    }
}
