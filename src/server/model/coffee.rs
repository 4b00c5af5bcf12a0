//! Domain model and operation parameters for coffees.

use crate::{
    model::coffee::{CoffeeDto, CreateCoffeeDto, UpdateCoffeeDto},
    server::{
        error::AppError,
        model::flavor::Flavor,
        util::validate::{require_flavor_names, require_non_blank},
    },
};

/// A coffee together with its resolved flavor set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coffee {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub recommendations: i32,
    pub flavors: Vec<Flavor>,
}

impl Coffee {
    /// Converts an entity model plus its already-loaded flavors into a coffee.
    ///
    /// # Arguments
    /// - `entity` - The coffee row from the database
    /// - `flavors` - Flavors linked to the coffee through the join table
    pub fn from_entity(entity: entity::coffee::Model, flavors: Vec<Flavor>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            brand: entity.brand,
            recommendations: entity.recommendations,
            flavors,
        }
    }

    pub fn into_dto(self) -> CoffeeDto {
        CoffeeDto {
            id: self.id,
            name: self.name,
            brand: self.brand,
            recommendations: self.recommendations,
            flavors: self.flavors.into_iter().map(Flavor::into_dto).collect(),
        }
    }
}

/// Parameters for creating a coffee.
///
/// Flavors are given by name and resolved to flavor records by the service.
#[derive(Debug, Clone)]
pub struct CreateCoffeeParams {
    pub name: String,
    pub brand: String,
    pub flavors: Vec<String>,
}

impl CreateCoffeeParams {
    /// Validates a create request and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(CreateCoffeeParams)` - Name, brand and every flavor name are non-blank
    /// - `Err(AppError::BadRequest)` - A required field is blank
    pub fn from_dto(dto: CreateCoffeeDto) -> Result<Self, AppError> {
        require_non_blank("name", &dto.name)?;
        require_non_blank("brand", &dto.brand)?;
        require_flavor_names(&dto.flavors)?;

        Ok(Self {
            name: dto.name,
            brand: dto.brand,
            flavors: dto.flavors,
        })
    }
}

/// Parameters for a partial coffee update.
///
/// `None` leaves the field unchanged. `Some` flavors replace the whole flavor set.
#[derive(Debug, Clone, Default)]
pub struct UpdateCoffeeParams {
    pub id: i32,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub flavors: Option<Vec<String>>,
}

impl UpdateCoffeeParams {
    /// Validates an update request and converts it to parameters.
    ///
    /// Only fields present in the request are validated.
    pub fn from_dto(id: i32, dto: UpdateCoffeeDto) -> Result<Self, AppError> {
        if let Some(name) = &dto.name {
            require_non_blank("name", name)?;
        }
        if let Some(brand) = &dto.brand {
            require_non_blank("brand", brand)?;
        }
        if let Some(flavors) = &dto.flavors {
            require_flavor_names(flavors)?;
        }

        Ok(Self {
            id,
            name: dto.name,
            brand: dto.brand,
            flavors: dto.flavors,
        })
    }
}
