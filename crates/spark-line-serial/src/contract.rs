//! 单元素编解码契约。
//!
//! # 教案级说明
//! - **Why**：序列化工厂只负责“逐行”组织文本，元素本身如何变成一行、如何从一行还原，
//!   完全交由调用方决定；此处用两个单方法 trait 表达这一分工；
//! - **How**：为闭包与函数项提供 blanket 实现，调用方可以直接传入 `ToString::to_string`、
//!   `str::parse::<T>` 或任意闭包，无需定义新类型；
//! - **What**：编码器不可失败，但输出不得包含行分隔符（由工厂在运行期校验）；解码器通过
//!   关联类型 `Error` 报告失败，工厂原样透传。

use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

/// 将单个元素编码为一行文本。
///
/// 返回值不得包含行分隔符；违反时由 [`crate::serialize`] 以
/// [`crate::InvalidEncodingError`] 拒绝整个调用。
pub trait LineEncoder<E: ?Sized> {
    /// 返回 `element` 的单行文本表示。
    fn encode(&self, element: &E) -> String;
}

impl<E, F> LineEncoder<E> for F
where
    E: ?Sized,
    F: Fn(&E) -> String,
{
    fn encode(&self, element: &E) -> String {
        self(element)
    }
}

/// 从一行文本（已剥离分隔符）还原单个元素。
pub trait LineDecoder<E> {
    /// 调用方定义的解码错误，[`crate::deserialize`] 不会捕获或包装它。
    type Error;

    /// 解析 `line`；无法解析时返回 `Err`。
    fn decode(&self, line: &str) -> Result<E, Self::Error>;
}

impl<E, Err, F> LineDecoder<E> for F
where
    F: Fn(&str) -> Result<E, Err>,
{
    type Error = Err;

    fn decode(&self, line: &str) -> Result<E, Self::Error> {
        self(line)
    }
}

/// 宽松解码适配器：把内层解码器的失败转换为 `None`，自身永不失败。
///
/// # 教案式说明
/// - **意图 (Why)**：工厂默认严格失败即止；需要“跳过坏行”的调用方在解码器一侧选择宽松策略，
///   工厂契约保持不变；
/// - **执行 (How)**：内层返回 `Err` 时记录一条 `debug` 级别事件（带错误的 `Display`），随后产出 `None`；
/// - **契约 (What)**：输出序列与输入行一一对应，坏行位置为 `None`；如需丢弃坏行，
///   使用 [`crate::deserialize_lenient`]。
pub struct Lenient<D, E> {
    inner: D,
    _element: PhantomData<fn() -> E>,
}

impl<D, E> Lenient<D, E> {
    /// 包装内层解码器。
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _element: PhantomData,
        }
    }

    /// 取回内层解码器。
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Clone, E> Clone for Lenient<D, E> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<D: fmt::Debug, E> fmt::Debug for Lenient<D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lenient").field("inner", &self.inner).finish()
    }
}

impl<D, E> LineDecoder<Option<E>> for Lenient<D, E>
where
    D: LineDecoder<E>,
    D::Error: fmt::Display,
{
    type Error = Infallible;

    fn decode(&self, line: &str) -> Result<Option<E>, Self::Error> {
        match self.inner.decode(line) {
            Ok(element) => Ok(Some(element)),
            Err(err) => {
                tracing::debug!(line, error = %err, "skipping malformed line");
                Ok(None)
            }
        }
    }
}
