//! Display metadata and default ordering shared by all entities.

use sea_orm::{EntityTrait, QueryOrder, Select};

pub trait EntityMeta: EntityTrait {
    /// Singular display name.
    const VERBOSE_NAME: &'static str;
    const VERBOSE_NAME_PLURAL: &'static str;

    /// Column listings are sorted by, ascending.
    fn default_ordering() -> Self::Column;

    /// Display label of a column.
    fn field_label(column: Self::Column) -> &'static str;

    /// `SELECT` in the entity's default ordering.
    fn find_ordered() -> Select<Self> {
        Self::find().order_by_asc(Self::default_ordering())
    }
}
