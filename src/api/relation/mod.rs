//! 关系视图
//!
//! 数据服务的一次查询结果可能是记录列表、单条记录、门户行列表或单条门户行，
//! 这里用统一的 `ResultView` 访问四种形态

pub mod cursor;
pub mod field;
pub mod kind;
pub mod view;

pub use cursor::{Cursor, Records};
pub use field::{qualified_name, FieldValue, CONTAINER_URL_PREFIX};
pub use kind::ResultKind;
pub use view::{ResultView, ResultViewBuilder};
