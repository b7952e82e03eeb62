//! Frontend ↔ backend field names per entity.
//!
//! The web client uses camelCase keys while the MySQL schema uses Spanish
//! snake_case columns. The tables below are the single source for that
//! renaming; lookups pass unknown keys through untouched.

use super::normalizer::normalize_header;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Vehicle,
    Employee,
    Provider,
}

impl Entity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Vehicle, Self::Employee, Self::Provider]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Employee => "employee",
            Self::Provider => "provider",
        }
    }
}

/// (frontend key, backend column)
pub type FieldPair = (&'static str, &'static str);

const VEHICLE_FIELDS: &[FieldPair] = &[
    ("id", "id_vehiculo"),
    ("plate", "dominio"),
    ("brand", "marca"),
    ("model", "modelo"),
    ("vtvDueDate", "vencimiento_vtv"),
    ("insuranceDueDate", "vencimiento_seguro"),
];

const EMPLOYEE_FIELDS: &[FieldPair] = &[
    ("id", "id_personal"),
    ("fullName", "nombre_apellido"),
    ("licenseDueDate", "vencimiento_licencia"),
];

const PROVIDER_FIELDS: &[FieldPair] = &[
    ("id", "id_proveedor"),
    ("businessName", "razon_social"),
    ("taxId", "cuit"),
    ("artDueDate", "vencimiento_art"),
];

pub fn fields(entity: Entity) -> &'static [FieldPair] {
    match entity {
        Entity::Vehicle => VEHICLE_FIELDS,
        Entity::Employee => EMPLOYEE_FIELDS,
        Entity::Provider => PROVIDER_FIELDS,
    }
}

pub fn to_backend(entity: Entity, key: &str) -> &str {
    fields(entity)
        .iter()
        .find(|(frontend, _)| *frontend == key)
        .map(|(_, backend)| *backend)
        .unwrap_or(key)
}

/// Frontend key for a backend column header. Headers already using the
/// frontend name are accepted too.
pub fn to_frontend(entity: Entity, column: &str) -> String {
    let normalized = normalize_header(column);
    match header_map().get(&(entity, normalized)) {
        Some(frontend) => (*frontend).to_string(),
        None => column.trim().to_string(),
    }
}

static HEADER_MAP: OnceLock<HashMap<(Entity, String), &'static str>> = OnceLock::new();

fn header_map() -> &'static HashMap<(Entity, String), &'static str> {
    HEADER_MAP.get_or_init(|| {
        let mut map = HashMap::new();
        for entity in Entity::ordered() {
            for (frontend, backend) in fields(entity) {
                map.insert((entity, normalize_header(backend)), *frontend);
                map.insert((entity, normalize_header(frontend)), *frontend);
            }
        }
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_both_directions() {
        assert_eq!(to_backend(Entity::Vehicle, "vtvDueDate"), "vencimiento_vtv");
        assert_eq!(to_frontend(Entity::Vehicle, "vencimiento_vtv"), "vtvDueDate");
        assert_eq!(to_backend(Entity::Provider, "taxId"), "cuit");
        assert_eq!(to_frontend(Entity::Employee, "nombre_apellido"), "fullName");
    }

    #[test]
    fn every_pair_round_trips() {
        for entity in Entity::ordered() {
            for (frontend, backend) in fields(entity) {
                assert_eq!(to_backend(entity, frontend), *backend);
                assert_eq!(to_frontend(entity, backend), *frontend);
            }
        }
    }

    #[test]
    fn header_lookup_ignores_case_spacing_and_bom() {
        assert_eq!(to_frontend(Entity::Vehicle, "\u{feff}DOMINIO"), "plate");
        assert_eq!(to_frontend(Entity::Vehicle, "Vencimiento Seguro"), "insuranceDueDate");
        assert_eq!(to_frontend(Entity::Vehicle, "plate"), "plate");
    }

    #[test]
    fn unknown_keys_pass_through() {
        assert_eq!(to_backend(Entity::Vehicle, "color"), "color");
        assert_eq!(to_frontend(Entity::Vehicle, " color "), "color");
    }

    #[test]
    fn tables_are_entity_scoped() {
        assert_eq!(to_frontend(Entity::Employee, "dominio"), "dominio");
        assert_eq!(to_backend(Entity::Employee, "id"), "id_personal");
        assert_eq!(to_backend(Entity::Provider, "id"), "id_proveedor");
    }
}
