//! 行扫描器：按 [`Boundaries`] 规则把文本切分为借用的行切片。
//!
//! 语义与常见的行扫描器一致：
//! - 末行不要求以分隔符结尾；
//! - 结尾的单个分隔符不会产生额外的空行，连续分隔符之间的空行会被保留；
//! - 空字符串不产生任何行。

use serde::{Deserialize, Serialize};

/// 行边界识别规则。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundaries {
    /// 仅识别 `\n` 与 `\r\n`，与 [`str::lines`] 相同。
    Newline,
    /// 识别 `\r\n`、`\n`、`\r`、U+0085、U+2028、U+2029。
    #[default]
    Unicode,
}

impl Boundaries {
    /// 判断 `ch` 是否为当前规则下的分隔字符。
    ///
    /// `Newline` 模式下 `\r` 本身不单独成界，但若出现在行尾会被 `\r\n` 吞掉，
    /// 因此编码端同样视其为非法字符。
    pub fn is_separator(self, ch: char) -> bool {
        match self {
            Boundaries::Newline => matches!(ch, '\n' | '\r'),
            Boundaries::Unicode => {
                matches!(ch, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
            }
        }
    }

    /// 返回 `line` 中首个分隔字符的字节偏移。
    pub fn find_separator(self, line: &str) -> Option<usize> {
        line.char_indices()
            .find(|&(_, ch)| self.is_separator(ch))
            .map(|(offset, _)| offset)
    }
}

/// 借用输入文本的行迭代器，由 [`crate::LineCodec::lines`] 构造。
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    inner: Scanner<'a>,
}

#[derive(Clone, Debug)]
enum Scanner<'a> {
    Newline(core::str::Lines<'a>),
    Unicode { rest: &'a str },
}

impl<'a> Lines<'a> {
    pub(crate) fn new(text: &'a str, boundaries: Boundaries) -> Self {
        let inner = match boundaries {
            Boundaries::Newline => Scanner::Newline(text.lines()),
            Boundaries::Unicode => Scanner::Unicode { rest: text },
        };
        Self { inner }
    }
}

/// 取出 `rest` 的首行并推进；`\r\n` 视为单个边界。
fn next_unicode_line<'a>(rest: &mut &'a str) -> Option<&'a str> {
    if rest.is_empty() {
        return None;
    }
    let text: &'a str = *rest;
    let boundary = text
        .char_indices()
        .find(|&(_, ch)| Boundaries::Unicode.is_separator(ch));
    match boundary {
        Some((end, ch)) => {
            let width = if ch == '\r' && text[end + 1..].starts_with('\n') {
                2
            } else {
                ch.len_utf8()
            };
            *rest = &text[end + width..];
            Some(&text[..end])
        }
        None => {
            *rest = "";
            Some(text)
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Scanner::Newline(lines) => lines.next(),
            Scanner::Unicode { rest } => next_unicode_line(rest),
        }
    }
}

impl core::iter::FusedIterator for Lines<'_> {}
