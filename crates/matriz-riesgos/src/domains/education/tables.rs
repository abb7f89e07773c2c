use crate::vocabulary::{KeywordSet, MappingTable};

pub const BASIC_LEVELS: KeywordSet =
    KeywordSet::new("niveles_basicos", &["inicial", "primaria", "secundaria"]);

pub const HIGHER_INSTITUTIONS: KeywordSet = KeywordSet::new(
    "instituciones_superior",
    &[
        "instituto",
        "escuela superior",
        "centro superior",
        "universidad",
        "superior técnico",
        "superior universitario",
    ],
);

/// Any education level mentioning this word is higher education.
pub const HIGHER_LEVEL_MARKER: KeywordSet = KeywordSet::new("nivel_superior", &["superior"]);

/// Building adapted from another use rather than built as a school.
pub const RETROFIT_MARKERS: KeywordSet =
    KeywordSet::new("edificacion_adaptada", &["remodelada", "acondicionada"]);

pub const BUILT_AREA: MappingTable = MappingTable::exact(
    "area_construida_m2",
    &[
        ("<500", 300.0),
        ("500-1500", 1000.0),
        ("1500-5000", 3000.0),
        ("5000-15000", 10000.0),
        (">15000", 20000.0),
    ],
    1000.0,
);

pub const STUDENT_CAPACITY: MappingTable = MappingTable::exact(
    "capacidad_alumnos",
    &[
        ("<100", 50.0),
        ("100-300", 200.0),
        ("300-800", 500.0),
        ("800-2000", 1500.0),
        (">2000", 3000.0),
    ],
    200.0,
);

/// Open-ended floor buckets; plain integers are read as-is.
pub const FLOOR_BUCKETS: MappingTable =
    MappingTable::exact("numero_pisos", &[(">10", 11.0), ("6-10", 8.0)], 3.0);

pub const MAX_LOW_RISE_FLOORS: f64 = 3.0;

/// Representative floor count for a `numero_pisos` value.
pub fn floor_count(raw: &str) -> f64 {
    if let Some(value) = FLOOR_BUCKETS.get(raw) {
        return value;
    }
    match raw.trim().parse::<i64>() {
        Ok(floors) => floors as f64,
        Err(_) => FLOOR_BUCKETS.lookup(raw),
    }
}
