//! 行序列化工厂。
//!
//! [`LineCodec`] 持有一份 [`LineCodecConfig`]，负责把元素序列逐行写成文本、把文本逐行读回元素；
//! 同名自由函数 [`serialize`]、[`deserialize`]、[`deserialize_lenient`] 是默认配置下的简写。

use core::fmt;

use crate::config::LineCodecConfig;
use crate::contract::{Lenient, LineDecoder, LineEncoder};
use crate::error::InvalidEncodingError;
use crate::scan::Lines;

/// 无状态的行编解码器。
///
/// # 教案式说明
/// - **意图 (Why)**：把“元素如何成行”与“行如何组织成文本”拆开；后者只有终止符与边界两项变化，
///   用一个 `Copy` 的小结构承载，可在多线程间自由复制；
/// - **执行 (How)**：`serialize` 单遍迭代，逐元素编码并校验分隔符，命中即整体失败；
///   `deserialize` 借用输入构造 [`Lines`]，逐行调用解码器，首个错误即短路返回；
/// - **契约 (What)**：
///   - 输出行数等于输入元素数，行序等于迭代顺序；
///   - 解码器错误原样返回，出错行之后的行不会被解码；
///   - 失败时不返回任何部分结果。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LineCodec {
    config: LineCodecConfig,
}

impl LineCodec {
    /// 以给定配置构造编解码器。
    pub fn new(config: LineCodecConfig) -> Self {
        Self { config }
    }

    /// 当前配置。
    pub fn config(&self) -> &LineCodecConfig {
        &self.config
    }

    /// 按迭代顺序把 `collection` 中的元素逐个编码为一行并拼接。
    ///
    /// 每一行（包括最后一行）之后都写入配置的终止符；空集合得到空字符串。
    /// 编码结果若含有当前边界规则下的分隔字符，返回 [`InvalidEncodingError`]。
    pub fn serialize<'a, E, I, Enc>(
        &self,
        collection: I,
        encoder: Enc,
    ) -> Result<String, InvalidEncodingError>
    where
        E: ?Sized + 'a,
        I: IntoIterator<Item = &'a E>,
        Enc: LineEncoder<E>,
    {
        let terminator = self.config.terminator.as_str();
        let mut text = String::new();
        let mut count = 0usize;

        for (index, element) in collection.into_iter().enumerate() {
            let line = encoder.encode(element);
            if let Some(offset) = self.config.boundaries.find_separator(&line) {
                tracing::debug!(
                    index,
                    offset,
                    "encoder output contains a line separator, aborting serialization"
                );
                return Err(InvalidEncodingError {
                    index,
                    line,
                    offset,
                });
            }
            text.push_str(&line);
            text.push_str(terminator);
            count = index + 1;
        }

        tracing::trace!(elements = count, bytes = text.len(), "serialized lines");
        Ok(text)
    }

    /// 按行切分 `text`，逐行解码为元素序列。
    ///
    /// 解码器的错误不经包装直接返回，剩余行不再处理。
    pub fn deserialize<E, D>(&self, text: &str, decoder: D) -> Result<Vec<E>, D::Error>
    where
        D: LineDecoder<E>,
    {
        let elements = self
            .lines(text)
            .map(|line| decoder.decode(line))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(elements = elements.len(), "deserialized lines");
        Ok(elements)
    }

    /// 宽松反序列化：无法解码的行被记录并跳过，永不失败。
    pub fn deserialize_lenient<E, D>(&self, text: &str, decoder: D) -> Vec<E>
    where
        D: LineDecoder<E>,
        D::Error: fmt::Display,
    {
        let lenient: Lenient<D, E> = Lenient::new(decoder);
        let Ok(decoded) = self.deserialize::<Option<E>, _>(text, lenient);
        decoded.into_iter().flatten().collect()
    }

    /// 借用 `text` 的行迭代器，边界规则取自配置。
    pub fn lines<'a>(&self, text: &'a str) -> Lines<'a> {
        Lines::new(text, self.config.boundaries)
    }
}

impl From<LineCodecConfig> for LineCodec {
    fn from(config: LineCodecConfig) -> Self {
        Self::new(config)
    }
}

/// 以默认配置（`\n` 终止、Unicode 行边界）序列化，见 [`LineCodec::serialize`]。
pub fn serialize<'a, E, I, Enc>(collection: I, encoder: Enc) -> Result<String, InvalidEncodingError>
where
    E: ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
    Enc: LineEncoder<E>,
{
    LineCodec::default().serialize(collection, encoder)
}

/// 以默认配置反序列化，见 [`LineCodec::deserialize`]。
pub fn deserialize<E, D>(text: &str, decoder: D) -> Result<Vec<E>, D::Error>
where
    D: LineDecoder<E>,
{
    LineCodec::default().deserialize(text, decoder)
}

/// 以默认配置宽松反序列化，见 [`LineCodec::deserialize_lenient`]。
pub fn deserialize_lenient<E, D>(text: &str, decoder: D) -> Vec<E>
where
    D: LineDecoder<E>,
    D::Error: fmt::Display,
{
    LineCodec::default().deserialize_lenient(text, decoder)
}
