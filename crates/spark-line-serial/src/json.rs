//! JSON Lines 适配层（`json` 特性）。
//!
//! 每个元素渲染为一行紧凑 JSON。`serde_json` 的紧凑输出已转义 `\n` 与 `\r`，但会原样保留
//! U+0085、U+2028、U+2029；这三个字符只可能出现在 JSON 字符串内部，渲染后统一改写为
//! `\uXXXX` 转义，解析结果不变。

use core::fmt;
use core::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::LineCodec;
use crate::contract::LineDecoder;
use crate::error::JsonLinesError;

/// 以 `serde_json` 解析单行的解码器。
pub struct JsonLines<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> JsonLines<T> {
    /// 构造解码器。
    pub const fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<T> Default for JsonLines<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonLines<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonLines<T> {}

impl<T> fmt::Debug for JsonLines<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonLines")
    }
}

impl<T: DeserializeOwned> LineDecoder<T> for JsonLines<T> {
    type Error = serde_json::Error;

    fn decode(&self, line: &str) -> Result<T, Self::Error> {
        serde_json::from_str(line)
    }
}

/// 以默认配置把 `items` 渲染为 JSON Lines 文本。
pub fn encode_json_lines<'a, T, I>(items: I) -> Result<String, JsonLinesError>
where
    T: Serialize + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    encode_json_lines_with(&LineCodec::default(), items)
}

/// 使用指定的 [`LineCodec`] 渲染 JSON Lines 文本。
///
/// 先逐个渲染全部元素，`Serialize` 失败时携带元素序号返回；随后交由工厂拼接并做单行校验。
pub fn encode_json_lines_with<'a, T, I>(
    codec: &LineCodec,
    items: I,
) -> Result<String, JsonLinesError>
where
    T: Serialize + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let rendered = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match serde_json::to_string(item) {
            Ok(json) => Ok(escape_line_separators(json)),
            Err(source) => Err(JsonLinesError::Json { index, source }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(codec.serialize(&rendered, String::clone)?)
}

/// 把 JSON 文本中未转义的 Unicode 行分隔字符改写为 `\uXXXX`。
fn escape_line_separators(json: String) -> String {
    if !json.contains(['\u{0085}', '\u{2028}', '\u{2029}']) {
        return json;
    }
    let mut escaped = String::with_capacity(json.len() + 8);
    for ch in json.chars() {
        match ch {
            '\u{0085}' => escaped.push_str("\\u0085"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// 以默认配置解析 JSON Lines 文本，首个无法解析的行即返回错误。
pub fn decode_json_lines<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, serde_json::Error> {
    crate::codec::deserialize(text, JsonLines::new())
}
