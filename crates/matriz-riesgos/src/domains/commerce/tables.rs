use crate::vocabulary::{KeywordSet, MappingTable};

pub const TOTAL_AREA: MappingTable = MappingTable::exact(
    "area_techada_total_m2",
    &[
        ("<300", 200.0),
        ("300-750", 525.0),
        ("750-2000", 1375.0),
        ("2000-10000", 6000.0),
        (">10000", 15000.0),
    ],
    525.0,
);

/// Buildings above three floors are all encoded as five.
pub const FLOORS: MappingTable = MappingTable::exact(
    "numero_pisos_edificacion",
    &[("1", 1.0), ("2", 2.0), ("3", 3.0)],
    5.0,
);

pub const SALES_AREA: MappingTable = MappingTable::exact(
    "area_venta_m2",
    &[
        ("<200", 100.0),
        ("200-500", 350.0),
        ("500-1500", 1000.0),
        ("1500-5000", 3250.0),
        (">5000", 7500.0),
    ],
    350.0,
);

pub const LOCALE_COUNT: MappingTable = MappingTable::exact(
    "numero_locales_comerciales_edificio",
    &[
        ("1", 1.0),
        ("2-5", 3.0),
        ("6-20", 13.0),
        ("21-100", 60.0),
        (">100", 150.0),
    ],
    1.0,
);

pub const STALL_TYPES: KeywordSet = KeywordSet::new("modulos", &["módulo", "stand", "puesto"]);

/// Folded licence type issued to a gallery or market as a whole.
pub const CORPORATE_LICENCE: &str = "corporativa (galería/mercado)";

pub const LARGE_RETAIL_FORMATS: KeywordSet = KeywordSet::new(
    "establecimientos_7_5",
    &[
        "mercado minorista",
        "mercado mayorista",
        "supermercado",
        "tienda por departamentos",
        "galería comercial",
        "centro comercial",
        "complejo comercial",
    ],
);

pub const MIXED_USE: KeywordSet = KeywordSet::new("uso_mixto", &["mixto", "áreas comunes"]);

pub const HAZARDOUS_PRODUCTS: KeywordSet = KeywordSet::new(
    "productos_peligrosos",
    &["explosivo", "pirotécnico", "municion", "fuegos", "pólvora"],
);

pub const INDEPENDENT_OPERATION: KeywordSet =
    KeywordSet::new("operacion_independiente", &["independiente"]);
pub const MODULE_OPERATION: KeywordSet = KeywordSet::new("operacion_modulo", &["módulo"]);

pub const MAX_SMALL_FLOORS: f64 = 3.0;
pub const MAX_SMALL_AREA_M2: f64 = 750.0;

/// Operating mode code: independent 0, module 1, anything else 2.
pub fn operation_mode(raw: &str) -> f64 {
    if INDEPENDENT_OPERATION.contains_keyword(raw) {
        0.0
    } else if MODULE_OPERATION.contains_keyword(raw) {
        1.0
    } else {
        2.0
    }
}
