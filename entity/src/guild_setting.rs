use sea_orm::entity::prelude::*;

/// One persisted settings field for a Discord guild.
///
/// Settings are stored as a key-value row set per guild rather than a single
/// document, so a write transaction can upsert or delete individual fields
/// and still commit as one unit. The value column holds arbitrary JSON
/// (scalar, array, or nested object).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_setting")]
pub struct Model {
    /// Discord guild ID (snowflake) stored as text.
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    /// Settings field name, one of the schema's known keys.
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// JSON value for the field.
    pub value: Json,
    /// Last time this field was written.
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
