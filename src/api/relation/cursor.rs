//! 记录游标与迭代器

use super::view::ResultView;

/// 记录指针
///
/// 移动不做边界检查，越界只能通过 `ResultView::valid` 发现
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: i64,
}

impl Cursor {
    pub fn new(position: i64) -> Self {
        Self { position }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn next(&mut self) {
        self.position = self.position.saturating_add(1);
    }

    pub fn previous(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn set(&mut self, position: i64) {
        self.position = position;
    }

    /// 指针作为数组下标，负数时返回 None
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.position).ok()
    }
}

/// 按顺序产生单条记录视图的迭代器
///
/// 与视图自身的游标相互独立，可以重复创建
pub struct Records<'v, 'a> {
    view: &'v ResultView<'a>,
    front: usize,
    back: usize,
}

impl<'v, 'a> Records<'v, 'a> {
    pub(crate) fn new(view: &'v ResultView<'a>) -> Self {
        Self {
            view,
            front: 0,
            back: view.count(),
        }
    }
}

impl<'a> Iterator for Records<'_, 'a> {
    type Item = ResultView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let record = self.view.record_at(self.front)?;
        self.front += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl<'v, 'a> IntoIterator for &'v ResultView<'a> {
    type Item = ResultView<'a>;
    type IntoIter = Records<'v, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}
