use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name))
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::PasswordHash))
                    .col(string_null(Users::Avatar))
                    .col(timestamp_with_time_zone(Users::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Create profiles table; one row per user at most
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(pk_auto(Profiles::Id))
                    .col(integer(Profiles::UserId).unique_key())
                    .col(string_null(Profiles::Company))
                    .col(string_null(Profiles::Website))
                    .col(string_null(Profiles::Location))
                    .col(string(Profiles::Status))
                    .col(json(Profiles::Skills))
                    .col(text_null(Profiles::Bio))
                    .col(string_null(Profiles::GithubUsername))
                    .col(string_null(Profiles::Youtube))
                    .col(string_null(Profiles::Twitter))
                    .col(string_null(Profiles::Facebook))
                    .col(string_null(Profiles::Linkedin))
                    .col(string_null(Profiles::Instagram))
                    .col(timestamp_with_time_zone(Profiles::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_user")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create experiences table
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(pk_auto(Experiences::Id))
                    .col(integer(Experiences::ProfileId))
                    .col(string(Experiences::Title))
                    .col(string(Experiences::Company))
                    .col(string_null(Experiences::Location))
                    .col(date(Experiences::FromDate))
                    .col(date_null(Experiences::ToDate))
                    .col(boolean(Experiences::Current).default(false))
                    .col(text_null(Experiences::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_profile")
                            .from(Experiences::Table, Experiences::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_experiences_profile_id")
                    .table(Experiences::Table)
                    .col(Experiences::ProfileId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Avatar,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    UserId,
    Company,
    Website,
    Location,
    Status,
    Skills,
    Bio,
    GithubUsername,
    Youtube,
    Twitter,
    Facebook,
    Linkedin,
    Instagram,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    ProfileId,
    Title,
    Company,
    Location,
    FromDate,
    ToDate,
    Current,
    Description,
}
