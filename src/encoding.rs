//! 7bit ASCIIへのエンコード

use thiserror::Error;

/// ASCII範囲外の文字を検出したときのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("character {ch:?} at position {position} is not representable in ASCII")]
pub struct EncodingError {
    /// 問題の文字
    pub ch: char,
    /// 文字単位の位置（0始まり）
    pub position: usize,
}

/// 文字列を1文字1バイトのASCIIバイト列へ変換する
///
/// U+0080以上の文字が含まれる場合はエラー。置換や切り捨ては行わない。
pub fn encode_ascii(text: &str) -> Result<Vec<u8>, EncodingError> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            if ch.is_ascii() {
                Ok(ch as u8)
            } else {
                Err(EncodingError { ch, position })
            }
        })
        .collect()
}
