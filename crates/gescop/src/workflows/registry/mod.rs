mod domain;
pub mod field_map;
mod normalizer;
mod parser;

pub use domain::{Employee, FleetRegistry, Provider, Vehicle};
pub use field_map::Entity;

use parser::{EmployeeRow, ProviderRow, VehicleRow};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Failures while loading a backend CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {entity} export: {source}")]
    Io {
        entity: &'static str,
        source: std::io::Error,
    },
    #[error("invalid {entity} CSV data: {source}")]
    Csv {
        entity: &'static str,
        source: csv::Error,
    },
}

/// Loads vehicles, staff, and providers from backend CSV exports.
pub struct RegistryImporter;

impl RegistryImporter {
    pub fn vehicles_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vehicle>, ImportError> {
        Self::vehicles_from_reader(open(path, Entity::Vehicle)?)
    }

    pub fn vehicles_from_reader<R: Read>(reader: R) -> Result<Vec<Vehicle>, ImportError> {
        import::<VehicleRow, Vehicle, R>(reader, Entity::Vehicle)
    }

    pub fn employees_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Employee>, ImportError> {
        Self::employees_from_reader(open(path, Entity::Employee)?)
    }

    pub fn employees_from_reader<R: Read>(reader: R) -> Result<Vec<Employee>, ImportError> {
        import::<EmployeeRow, Employee, R>(reader, Entity::Employee)
    }

    pub fn providers_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Provider>, ImportError> {
        Self::providers_from_reader(open(path, Entity::Provider)?)
    }

    pub fn providers_from_reader<R: Read>(reader: R) -> Result<Vec<Provider>, ImportError> {
        import::<ProviderRow, Provider, R>(reader, Entity::Provider)
    }

    /// Builds a registry from whichever exports are supplied.
    pub fn registry_from_paths(
        vehicles: Option<&Path>,
        employees: Option<&Path>,
        providers: Option<&Path>,
    ) -> Result<FleetRegistry, ImportError> {
        let mut registry = FleetRegistry::default();

        if let Some(path) = vehicles {
            registry.vehicles = Self::vehicles_from_path(path)?;
        }
        if let Some(path) = employees {
            registry.employees = Self::employees_from_path(path)?;
        }
        if let Some(path) = providers {
            registry.providers = Self::providers_from_path(path)?;
        }

        Ok(registry)
    }
}

fn open<P: AsRef<Path>>(path: P, entity: Entity) -> Result<std::fs::File, ImportError> {
    std::fs::File::open(path).map_err(|source| ImportError::Io {
        entity: entity.label(),
        source,
    })
}

fn import<Row, T, R>(reader: R, entity: Entity) -> Result<Vec<T>, ImportError>
where
    Row: DeserializeOwned + Into<T>,
    R: Read,
{
    let rows = parser::parse_rows::<Row, R>(reader, entity).map_err(|source| {
        ImportError::Csv {
            entity: entity.label(),
            source,
        }
    })?;

    let records: Vec<T> = rows.into_iter().map(Into::into).collect();
    info!(entity = entity.label(), count = records.len(), "imported records");
    Ok(records)
}
