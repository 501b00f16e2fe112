//! Interest database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Interest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "interest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub place: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_interest::Entity")]
    UserInterest,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_interest::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_interest::Relation::Interest.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Interest {
    fn from(model: Model) -> Self {
        Interest {
            id: model.id,
            place: model.place,
        }
    }
}
