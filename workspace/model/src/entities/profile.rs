use sea_orm::entity::prelude::*;

/// The extended, user-editable record attached one-to-one to a user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning user. Unique, so a user can never end up with two profiles.
    #[sea_orm(unique)]
    pub user_id: i32,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    /// JSON array of skill names, already normalized.
    pub skills: Json,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::experience::Entity")]
    Experience,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::experience::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experience.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Skill names stored in the `skills` JSON column.
    ///
    /// Anything that is not an array of strings yields an empty list.
    pub fn skill_list(&self) -> Vec<String> {
        match &self.skills {
            Json::Array(values) => values
                .iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Encodes a list of skills for the `skills` column.
pub fn skills_to_json(skills: &[String]) -> Json {
    Json::Array(skills.iter().cloned().map(Json::String).collect())
}
