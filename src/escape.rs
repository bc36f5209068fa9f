//! バックスラッシュエスケープの解釈

use thiserror::Error;

/// エスケープ解釈のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EscapeError {
    /// 入力末尾の孤立したバックスラッシュ
    #[error("trailing backslash at end of input")]
    TrailingBackslash,
    /// 未対応のエスケープ文字
    #[error("unknown escape sequence: \\{0}")]
    UnknownEscape(char),
    /// \xHH の16進数部分が不正
    #[error("invalid hex escape: \\x{0}")]
    InvalidHexEscape(String),
}

/// エスケープシーケンスを展開した文字列を返す
///
/// 対応するエスケープ: `\\` `\'` `\"` `\n` `\t` `\r` `\0` `\xHH`
/// `\xHH` は0x80以上も受け付ける（ASCII範囲チェックはエンコード側で行う）
pub fn unescape(input: &str) -> Result<String, EscapeError> {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.next() {
            None => return Err(EscapeError::TrailingBackslash),
            Some('\\') => result.push('\\'),
            Some('\'') => result.push('\''),
            Some('"') => result.push('"'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some('x') => {
                // 直後の2文字を16進数として読む
                let rest = chars.as_str();
                let hex = rest
                    .get(..2)
                    .ok_or_else(|| EscapeError::InvalidHexEscape(rest.to_string()))?;
                let byte = u8::from_str_radix(hex, 16)
                    .map_err(|_| EscapeError::InvalidHexEscape(hex.to_string()))?;
                result.push(char::from(byte));
                chars.next();
                chars.next();
            }
            Some(other) => return Err(EscapeError::UnknownEscape(other)),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(unescape("hello world").unwrap(), "hello world");
        assert_eq!(unescape("").unwrap(), "");
    }

    #[test]
    fn named_escapes() {
        assert_eq!(unescape(r"a\nb").unwrap(), "a\nb");
        assert_eq!(unescape(r"a\tb").unwrap(), "a\tb");
        assert_eq!(unescape(r"a\rb").unwrap(), "a\rb");
        assert_eq!(unescape(r"a\0b").unwrap(), "a\0b");
        assert_eq!(unescape(r"a\\b").unwrap(), r"a\b");
        assert_eq!(unescape(r#"\'\""#).unwrap(), "'\"");
    }

    #[test]
    fn hex_escapes() {
        assert_eq!(unescape(r"\x41").unwrap(), "A");
        assert_eq!(unescape(r"\x0a").unwrap(), "\n");
        assert_eq!(unescape(r"\x41\x42C").unwrap(), "ABC");
        // 0x80以上もここでは通る（エンコード時に弾かれる）
        assert_eq!(unescape(r"\xff").unwrap(), "\u{ff}");
    }

    #[test]
    fn trailing_backslash_is_an_error() {
        assert_eq!(unescape(r"abc\"), Err(EscapeError::TrailingBackslash));
    }

    #[test]
    fn unknown_escape_is_an_error() {
        assert_eq!(unescape(r"\q"), Err(EscapeError::UnknownEscape('q')));
    }

    #[test]
    fn malformed_hex_escape_is_an_error() {
        assert!(matches!(
            unescape(r"\x4"),
            Err(EscapeError::InvalidHexEscape(_))
        ));
        assert!(matches!(
            unescape(r"\xzz"),
            Err(EscapeError::InvalidHexEscape(_))
        ));
        assert!(matches!(
            unescape(r"\x"),
            Err(EscapeError::InvalidHexEscape(_))
        ));
    }
}
