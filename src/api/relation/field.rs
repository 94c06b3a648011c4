//! 字段与门户解析

use super::kind::ResultKind;
use super::view::{present, ResultView};
use crate::core::escape::escape_scalar;
use crate::core::{DataInfo, RelationError, RelationResult, TransportError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;
use std::borrow::Cow;

/// 容器字段可下载 URL 的前缀
pub const CONTAINER_URL_PREFIX: &str = "https://";

/// 字段解析结果：标量值，或者门户的嵌套视图
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    Scalar(Cow<'a, Value>),
    Relation(ResultView<'a>),
}

impl<'a> FieldValue<'a> {
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            FieldValue::Scalar(value) => Some(value.as_ref()),
            FieldValue::Relation(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    pub fn as_relation(&self) -> Option<&ResultView<'a>> {
        match self {
            FieldValue::Relation(view) => Some(view),
            FieldValue::Scalar(_) => None,
        }
    }

    pub fn into_relation(self) -> Option<ResultView<'a>> {
        match self {
            FieldValue::Relation(view) => Some(view),
            FieldValue::Scalar(_) => None,
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, FieldValue::Relation(_))
    }
}

/// 拼出 `关系::字段` 形式的限定名
pub fn qualified_name(name: &str, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(relation) => format!("{}::{}", relation, name),
        None => name.to_string(),
    }
}

impl<'a> ResultView<'a> {
    /// 读取字段值，或者同名门户的嵌套视图
    ///
    /// `qualifier` 是门户的表实例名，用于区分不同关系中的同名字段。
    /// 提供者要求 HTML 转义时，标量值会被转义，门户视图不受影响
    ///
    /// # Errors
    /// 找不到对应的字段或门户时返回 `RelationError::FieldNotFound`
    pub fn field(&self, name: &str, qualifier: Option<&str>) -> RelationResult<FieldValue<'a>> {
        let value = self.resolve(name, qualifier)?;
        Ok(self.post_process(value))
    }

    fn resolve(&self, name: &str, qualifier: Option<&str>) -> RelationResult<FieldValue<'a>> {
        let qualified = qualified_name(name, qualifier);
        let element = self.current_element();
        let resolved = match self.kind() {
            ResultKind::RecordList | ResultKind::Record => {
                element.and_then(|record| self.resolve_in_record(record, name, &qualified))
            }
            ResultKind::RelatedList | ResultKind::RelatedRecord => {
                element.and_then(|row| self.resolve_in_row(row, &qualified))
            }
        };
        resolved.ok_or(RelationError::FieldNotFound(qualified))
    }

    /// 顶层记录：先查字段，再查门户，最后查限定名字段
    fn resolve_in_record(
        &self,
        record: &'a Value,
        name: &str,
        qualified: &str,
    ) -> Option<FieldValue<'a>> {
        let fields = record.get("fieldData");
        if let Some(value) = present(fields.and_then(|f| f.get(name))) {
            return Some(FieldValue::Scalar(Cow::Borrowed(value)));
        }

        if let Some(rows) = present(record.get("portalData").and_then(|p| p.get(name))) {
            let data_info = record.get("portalDataInfo").and_then(DataInfo::from_json);
            log::trace!("进入门户 {}", name);
            return Some(FieldValue::Relation(
                ResultView::builder(rows, ResultKind::RelatedList)
                    .maybe_data_info(data_info)
                    .portal_name(name)
                    .maybe_provider(self.provider().cloned())
                    .build(),
            ));
        }

        present(fields.and_then(|f| f.get(qualified)))
            .map(|value| FieldValue::Scalar(Cow::Borrowed(value)))
    }

    /// 门户行：直接按限定名查找，找不到时再带上视图自身的关系名
    fn resolve_in_row(&self, row: &'a Value, qualified: &str) -> Option<FieldValue<'a>> {
        present(row.get(qualified))
            .or_else(|| {
                let portal = self.portal_name()?;
                present(row.get(format!("{}::{}", portal, qualified).as_str()))
            })
            .map(|value| FieldValue::Scalar(Cow::Borrowed(value)))
    }

    fn post_process(&self, value: FieldValue<'a>) -> FieldValue<'a> {
        let encode = self
            .provider()
            .is_some_and(|provider| provider.field_html_encoding());
        match value {
            FieldValue::Scalar(scalar) if encode => {
                FieldValue::Scalar(Cow::Owned(escape_scalar(&scalar)))
            }
            other => other,
        }
    }

    /// 下载容器字段的二进制内容
    ///
    /// 字段值必须是 `https://` 开头的 URL，下载本身交给通信提供者，
    /// 传输错误原样返回
    ///
    /// 读取 URL 时不做 HTML 转义，即使提供者开启了转义，`&` 也不会被改写
    pub fn container_data(&self, name: &str, qualifier: Option<&str>) -> RelationResult<Vec<u8>> {
        let value = self.resolve(name, qualifier)?;
        let url = value
            .as_str()
            .filter(|url| url.starts_with(CONTAINER_URL_PREFIX))
            .ok_or_else(|| {
                log::warn!("字段 {} 不是容器字段", name);
                RelationError::InvalidContainerField(name.to_string())
            })?;

        let provider = self
            .provider()
            .ok_or_else(|| TransportError::new("未配置通信提供者"))?;
        Ok(provider.access_to_container(url)?)
    }

    /// 以 base64 编码返回容器字段内容
    pub fn container_data_base64(
        &self,
        name: &str,
        qualifier: Option<&str>,
    ) -> RelationResult<String> {
        let bytes = self.container_data(name, qualifier)?;
        Ok(BASE64.encode(bytes))
    }
}
