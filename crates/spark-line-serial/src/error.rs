//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中声明行序列化链路上由本 crate 自身产生的错误：编码器违反“单行”契约、配置解析失败、
//!   JSON Lines 适配层的序列化失败；
//! - 解码错误不在此列：[`crate::LineDecoder::Error`] 由调用方定义，工厂原样透传，不做包装。
//!
//! ## 设计要求（What）
//! - 所有错误类型派生 `thiserror::Error`，可直接交给 `anyhow` 等上层框架处理；
//! - 错误携带足够的定位信息（元素序号、偏移），便于排障时直接定位到出错元素。

use thiserror::Error;

/// 编码器输出中包含行分隔符，违反“一元素一行”的契约。
///
/// # 教案式说明
/// - **契约 (What)**：`index` 为出错元素在迭代顺序中的零基序号；`line` 为编码器的完整输出；
///   `offset` 为首个分隔符在 `line` 中的字节偏移；
/// - **语义**：序列化整体失败，已累积的部分输出被丢弃，调用方不会拿到残缺文本；
/// - **风险 (Trade-offs)**：`line` 保存完整副本，超长行会放大错误对象体积，但排障时可直接复现。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("encoded element #{index} contains a line separator at byte {offset}: {line:?}")]
pub struct InvalidEncodingError {
    /// 出错元素在输入迭代顺序中的零基序号。
    pub index: usize,
    /// 编码器返回的原始文本。
    pub line: String,
    /// 首个分隔符字符的字节偏移。
    pub offset: usize,
}

/// [`crate::LineCodecConfig`] 加载失败。
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML 文本无法解析，或包含未知字段/非法取值。
    #[error("invalid line codec configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// JSON Lines 编码失败。
///
/// - `Json`：元素的 `Serialize` 实现报错（例如以复合类型作键的映射）；
/// - `InvalidEncoding`：序列化工厂拒绝了某一行。适配层会转义全部分隔字符，
///   正常情况下不会走到该分支。
#[cfg(feature = "json")]
#[derive(Debug, Error)]
pub enum JsonLinesError {
    /// `serde_json` 序列化失败。
    #[error("failed to render element #{index} as JSON: {source}")]
    Json {
        /// 出错元素的零基序号。
        index: usize,
        /// 底层 `serde_json` 错误。
        #[source]
        source: serde_json::Error,
    },
    /// 渲染结果违反单行契约。
    #[error(transparent)]
    InvalidEncoding(#[from] InvalidEncodingError),
}
