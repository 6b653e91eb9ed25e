use serde::{Deserialize, Serialize};

/// Item column produced by exploding a delimiter-joined list column.
pub const EXPLODED_ITEM_COLUMN: &str = "__item__";
/// Transaction key built from customer and calendar date.
pub const CUSTOMER_DATE_KEY: &str = "__customer_date__";
/// Transaction key built from the calendar date alone.
pub const DATE_KEY: &str = "__date__";
/// Transaction key built from fixed-size row groups.
pub const ROW_GROUP_KEY: &str = "__rowgroup__";

/// Semantic roles inferred for the columns of a raw table.
///
/// Every role is independent and optional. `item_col` must be resolved for
/// transactions to be built; in list mode it holds
/// [`EXPLODED_ITEM_COLUMN`] and `list_col` names the source list column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub item_col: Option<String>,
    pub order_col: Option<String>,
    pub customer_col: Option<String>,
    pub date_col: Option<String>,
    pub list_col: Option<String>,
    pub used_list_mode: bool,
}

impl ColumnRoles {
    pub fn has_item(&self) -> bool {
        self.item_col.is_some()
    }
}
