use sea_orm::entity::prelude::*;

/// One work-history entry of a profile.
///
/// Entries are listed newest first; the auto-increment id doubles as the
/// insertion order, so "prepend" means "insert" and readers sort by id
/// descending.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub profile_id: i32,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from_date: Date,
    pub to_date: Option<Date>,
    #[sea_orm(default_value = "false")]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfileId",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
