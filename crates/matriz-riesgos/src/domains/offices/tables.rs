use crate::vocabulary::{KeywordSet, MappingTable};

pub const AREA_PER_FLOOR: MappingTable = MappingTable::exact(
    "area_techada_por_piso_m2",
    &[
        ("<200", 100.0),
        ("200-400", 300.0),
        ("400-560", 480.0),
        ("560-1000", 780.0),
        ("1000-2500", 1750.0),
        (">2500", 3000.0),
    ],
    300.0,
);

/// Buildings above four floors are all encoded as six.
pub const FLOORS: MappingTable = MappingTable::exact(
    "numero_pisos_edificacion",
    &[("1", 1.0), ("2", 2.0), ("3", 3.0), ("4", 4.0)],
    6.0,
);

pub const TOTAL_AREA: MappingTable = MappingTable::exact(
    "area_techada_total_m2",
    &[
        ("<500", 300.0),
        ("500-2000", 1250.0),
        ("2000-5000", 3500.0),
        ("5000-15000", 10000.0),
        (">15000", 20000.0),
    ],
    1250.0,
);

pub const SHARED_OCCUPANCY: KeywordSet = KeywordSet::new("uso_compartido", &["compartido"]);

/// Folded value of `areas_comunes_tienen_itse_vigente` meaning a valid inspection.
pub const ITSE_VALID: &str = "sí";

pub const QUALIFYING_PERMITS: KeywordSet = KeywordSet::new(
    "tipos_conformidad_validos",
    &["remodelación", "ampliación", "cambio de giro"],
);

pub const BUILT_AS_OFFICES: KeywordSet =
    KeywordSet::new("uso_diseño_original", &["oficinas desde origen"]);

pub const MAX_AREA_PER_FLOOR_M2: f64 = 560.0;
pub const MAX_LOW_RISE_FLOORS: f64 = 4.0;

/// Year certificate ages are measured against.
pub const REFERENCE_YEAR: i64 = 2025;
pub const MAX_CERTIFICATE_AGE_YEARS: i64 = 5;
