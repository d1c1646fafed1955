use sea_orm::entity::prelude::*;

/// One stored document of an entity collection.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "record")]
pub struct Model {
    /// Collection name, e.g. `"clients"`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,
    /// Store-assigned id, unique within the collection.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Serialized JSON object holding the record fields.
    #[sea_orm(column_type = "Text")]
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
