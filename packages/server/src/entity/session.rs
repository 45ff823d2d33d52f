use sea_orm::entity::prelude::*;

/// Server-side session record, keyed by the id carried in the session cookie.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    /// JSON-encoded `tower_sessions::session::Record`.
    #[sea_orm(column_type = "Text")]
    pub data: String,

    pub expiry_date: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
