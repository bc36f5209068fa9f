//! HEXトークン化とグループ整形

/// 1グループあたりのトークン数（トークンは2桁なので1行8桁）
pub const GROUP_SIZE: usize = 4;

/// バイト列を2桁大文字HEXトークン列へ変換する
pub fn hex_tokens(data: &[u8]) -> Vec<String> {
    data.iter().map(|b| format!("{:02X}", b)).collect()
}

/// トークン列を4個ずつのグループに区切り、各グループ内だけを逆順に
/// 連結して "0x" を付けた行を返す
///
/// グループ同士の順序は元のまま。最終グループは1〜4トークンの端数になる。
pub fn reversed_group_lines(tokens: &[String]) -> Vec<String> {
    tokens
        .chunks(GROUP_SIZE)
        .map(|group| {
            let mut line = String::with_capacity(2 + group.len() * 2);
            line.push_str("0x");
            for token in group.iter().rev() {
                line.push_str(token);
            }
            line
        })
        .collect()
}
