use crate::vocabulary::MappingTable;

pub const CARE_LEVEL: MappingTable = MappingTable::exact(
    "nivel_atencion",
    &[("Primer", 1.0), ("Segundo", 2.0), ("Tercer", 3.0)],
    1.0,
);

pub const ESTABLISHMENT_TYPE: MappingTable = MappingTable::exact(
    "tipo_establecimiento",
    &[
        ("Puesto", 1.0),
        ("Posta", 1.0),
        ("Consultorio", 2.0),
        ("Consultorio médico", 2.0),
        ("Centro de salud", 3.0),
        ("Centro médico", 3.0),
        ("Policlínico", 3.0),
        ("Centro médico especializado", 3.0),
        ("Hospital general", 4.0),
        ("Hospital especializado", 5.0),
        ("Instituto", 6.0),
    ],
    7.0,
);

pub const INPATIENT_BEDS: MappingTable = MappingTable::exact(
    "camas_internamiento",
    &[("0", 0.0), ("1-10", 1.0), ("11-50", 2.0), (">50", 3.0)],
    0.0,
);

pub const CAPACITY: MappingTable = MappingTable::exact(
    "capacidad_atencion",
    &[("Baja", 1.0), ("Media", 2.0), ("Alta", 3.0)],
    2.0,
);

pub const SPECIALTIES: MappingTable = MappingTable::exact(
    "num_especialidades",
    &[("0", 0.0), ("1-5", 1.0), (">5", 2.0)],
    1.0,
);

pub const FLOORS: MappingTable =
    MappingTable::exact("num_pisos", &[("1", 1.0), ("2", 2.0), (">3", 3.0)], 2.0);

/// Services counted towards `num_servicios`, compared verbatim.
pub const KEY_SERVICES: &[&str] = &["Urgencias", "Laboratorio", "Farmacia", "Radiología", "UCI"];

/// Encoded `tipo_establecimiento` of a consultorio.
pub const CONSULTORIO_TYPE: f64 = 2.0;
/// Encoded `tipo_establecimiento` of a health centre or polyclinic.
pub const CENTRE_TYPE: f64 = 3.0;
