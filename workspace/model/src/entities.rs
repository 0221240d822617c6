//! This file serves as the root for all SeaORM entity modules.
//! Users own at most one profile; a profile owns an ordered list of
//! experience entries.

pub mod experience;
pub mod profile;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::experience::Entity as Experience;
    pub use super::profile::Entity as Profile;
    pub use super::user::Entity as User;
}
