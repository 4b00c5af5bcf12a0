use crate::model::coffee::FlavorDto;

/// A deduplicated, named flavor tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor {
    pub id: i32,
    pub name: String,
}

impl Flavor {
    pub fn from_entity(entity: entity::flavor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> FlavorDto {
        FlavorDto {
            id: self.id,
            name: self.name,
        }
    }
}
