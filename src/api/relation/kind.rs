/// 结果形态
///
/// 决定视图如何解释其负载，构造后不再改变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// 顶层记录列表，每条记录含 `fieldData` 与可选的 `portalData`
    RecordList,
    /// 单条顶层记录
    Record,
    /// 门户行列表，每行是以（可带关系前缀的）字段名为键的扁平对象
    RelatedList,
    /// 单条门户行
    RelatedRecord,
}

impl ResultKind {
    /// 是否为可以移动游标的列表形态
    pub fn is_list(self) -> bool {
        matches!(self, ResultKind::RecordList | ResultKind::RelatedList)
    }

    /// 是否为门户（关联行）形态
    pub fn is_related(self) -> bool {
        matches!(self, ResultKind::RelatedList | ResultKind::RelatedRecord)
    }

    /// 收窄到单个元素后的形态
    pub fn singular(self) -> Self {
        match self {
            ResultKind::RecordList | ResultKind::Record => ResultKind::Record,
            ResultKind::RelatedList | ResultKind::RelatedRecord => ResultKind::RelatedRecord,
        }
    }
}
