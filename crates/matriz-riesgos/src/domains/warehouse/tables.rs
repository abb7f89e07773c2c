use crate::vocabulary::{KeywordSet, MappingTable};

pub const COVERED_PERCENTAGE: MappingTable = MappingTable::exact(
    "porcentaje_area_techada",
    &[
        ("0%", 0.0),
        ("1-25%", 15.0),
        ("26-50%", 37.0),
        ("51-75%", 62.0),
        ("76-99%", 87.0),
        ("100%", 100.0),
    ],
    50.0,
);

pub const COVERAGE: MappingTable = MappingTable::folded(
    "tipo_cobertura",
    &[
        ("no techado", 0.0),
        ("parcialmente techado", 1.0),
        ("totalmente techado", 2.0),
        ("cerrado y techado", 3.0),
    ],
    1.0,
);

pub const ENCLOSURE: MappingTable = MappingTable::folded(
    "tipo_cerramiento",
    &[
        ("abierto", 0.0),
        ("semi-abierto (muros parciales)", 1.0),
        ("cerrado (muros completos)", 2.0),
        ("con climatización", 3.0),
    ],
    1.0,
);

pub const NFPA_LEVEL: MappingTable = MappingTable::exact(
    "nivel_peligrosidad_nfpa",
    &[
        ("0 (mínimo)", 0.0),
        ("1 (ligero)", 1.0),
        ("2 (moderado)", 2.0),
        ("3 (serio)", 3.0),
        ("4 (severo)", 4.0),
    ],
    0.0,
);

pub const ADMIN_AREA: MappingTable = MappingTable::exact(
    "area_administrativa_servicios_m2",
    &[
        ("0", 0.0),
        ("1-50", 30.0),
        ("51-200", 125.0),
        ("201-500", 350.0),
        (">500", 750.0),
    ],
    30.0,
);

pub const HAZARDOUS_GOODS: KeywordSet = KeywordSet::new(
    "productos_peligrosos",
    &["explosivo", "pirotécnico", "municion", "fuegos", "pólvora"],
);

/// Folded `tipo_cobertura` value for an open-air yard.
pub const OPEN_AIR_COVERAGE: &str = "no techado";
/// `porcentaje_area_techada` bucket with no roofed area.
pub const ZERO_COVERED: &str = "0%";

pub const PARKING_USE: KeywordSet = KeywordSet::new("uso_estacionamiento", &["estacionamiento"]);
pub const VEHICLE_ESTABLISHMENT: KeywordSet =
    KeywordSet::new("establecimiento_vehicular", &["vehicular"]);
