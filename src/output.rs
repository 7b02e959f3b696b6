use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// Single-line JSON with `", "` and `": "` separators and every
/// non-ASCII or non-printable character written as a `\uXXXX` escape.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    #[inline]
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.bytes().all(|b| (0x20..0x7f).contains(&b)) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` to `writer` as one line of JSON
pub fn write_json<W, T>(writer: W, value: &T) -> io::Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::with_formatter(writer, SpacedAsciiFormatter);
    value.serialize(&mut serializer).map_err(io::Error::from)
}

/// Serialize `value` to a string as one line of JSON
pub fn to_json_string<T>(value: &T) -> io::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::new();
    write_json(&mut buffer, value)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchResponse;
    use serde_json::json;

    #[test]
    fn test_separators() {
        let rendered = to_json_string(&MatchResponse::no_internships()).unwrap();
        assert_eq!(rendered, r#"{"matches": [], "error": "No internships found"}"#);
    }

    #[test]
    fn test_nested_arrays() {
        let rendered = to_json_string(&json!([1, [2, 3], {"a": null}])).unwrap();
        assert_eq!(rendered, r#"[1, [2, 3], {"a": null}]"#);
    }

    #[test]
    fn test_non_ascii_escaped() {
        let rendered = to_json_string(&json!("overlap → +40.0")).unwrap();
        assert_eq!(rendered, r#""overlap \u2192 +40.0""#);
    }

    #[test]
    fn test_astral_plane_uses_surrogates() {
        let rendered = to_json_string(&json!("🚀")).unwrap();
        assert_eq!(rendered, r#""\ud83d\ude80""#);
    }

    #[test]
    fn test_control_characters_keep_short_escapes() {
        let rendered = to_json_string(&json!("a\"b\\c\nd\u{7f}")).unwrap();
        assert_eq!(rendered, r#""a\"b\\c\nd\u007f""#);
    }
}
