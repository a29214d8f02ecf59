//! 行编解码配置。
//!
//! # 教案级说明
//! - **What**：[`LineCodecConfig`] 描述两项可调行为：写出时使用的行终止符、读入时识别的行边界；
//! - **How**：通过 `serde` 派生，可直接嵌入宿主的配置结构，或经 [`LineCodecConfig::from_toml_str`]
//!   从独立的 TOML 片段加载；未出现的字段取默认值，未知字段视为错误；
//! - **Trade-offs**：默认值为 `lf` + `unicode`：写出最常见的 `\n`，读入时识别通用行扫描器
//!   认可的全部行边界。

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scan::Boundaries;

/// 序列化时追加在每行之后的终止符。
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terminator {
    /// `"\n"`
    #[default]
    Lf,
    /// `"\r\n"`
    #[serde(rename = "crlf")]
    CrLf,
}

impl Terminator {
    /// 终止符的文本形式。
    pub const fn as_str(self) -> &'static str {
        match self {
            Terminator::Lf => "\n",
            Terminator::CrLf => "\r\n",
        }
    }
}

/// [`crate::LineCodec`] 的配置。
///
/// ```toml
/// terminator = "crlf"
/// boundaries = "unicode"
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineCodecConfig {
    /// 写出时的行终止符。
    pub terminator: Terminator,
    /// 读入时识别的行边界，同时决定编码端拒绝哪些字符。
    pub boundaries: Boundaries,
}

impl LineCodecConfig {
    /// 从 TOML 文本解析配置。
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// 设置行终止符。
    pub fn with_terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// 设置行边界规则。
    pub fn with_boundaries(mut self, boundaries: Boundaries) -> Self {
        self.boundaries = boundaries;
        self
    }
}
