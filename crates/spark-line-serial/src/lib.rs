#![warn(missing_docs)]

//! `spark-line-serial` 把元素序列写成“一元素一行”的文本，并能按行读回。
//!
//! # 教案背景（Why）
//! - 行分隔文本是日志、快照、测试夹具中最朴素的持久形态；元素如何成行因业务而异，
//!   行如何组织却总是一致，本 crate 只承担后者；
//! - 编码器与解码器由调用方以闭包、函数项或单方法 trait 实现提供，工厂本身无状态。
//!
//! # 使用概览（How）
//! ```
//! use spark_line_serial::{deserialize, serialize};
//!
//! let text = serialize(&[1, 2, 3], |n: &i32| n.to_string()).unwrap();
//! assert_eq!(text, "1\n2\n3\n");
//!
//! let numbers: Vec<i32> = deserialize(&text, str::parse::<i32>).unwrap();
//! assert_eq!(numbers, [1, 2, 3]);
//! ```
//!
//! # 合约说明（What）
//! - [`serialize`]：按迭代顺序逐元素编码，每行之后写入终止符；任一编码结果含分隔字符时以
//!   [`InvalidEncodingError`] 整体失败，不返回部分文本；
//! - [`deserialize`]：按行边界切分（默认识别 `\r\n`、`\n`、`\r`、U+0085、U+2028、U+2029；
//!   末行可无终止符，空文本无行），逐行解码；解码器错误原样透传，
//!   出错行之后的行不会被解码；
//! - 需要“跳过坏行”时使用 [`Lenient`] 适配器或 [`deserialize_lenient`]；
//! - 终止符与边界规则可经 [`LineCodecConfig`] 调整，见 [`LineCodec`]。
//!
//! # 风险提示（Trade-offs）
//! - 协议不包含转义策略：需要承载多行内容的元素应由编码器自行转义（例如 `json` 特性下的
//!   [`encode_json_lines`] 借助 JSON 字符串转义）。

mod codec;
mod config;
mod contract;
mod error;
#[cfg(feature = "json")]
mod json;
mod scan;

pub use crate::codec::{LineCodec, deserialize, deserialize_lenient, serialize};
pub use crate::config::{LineCodecConfig, Terminator};
pub use crate::contract::{Lenient, LineDecoder, LineEncoder};
#[cfg(feature = "json")]
pub use crate::error::JsonLinesError;
pub use crate::error::{ConfigError, InvalidEncodingError};
#[cfg(feature = "json")]
pub use crate::json::{JsonLines, decode_json_lines, encode_json_lines, encode_json_lines_with};
pub use crate::scan::{Boundaries, Lines};
