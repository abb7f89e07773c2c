use crate::vocabulary::{KeywordSet, MappingTable};

pub const EXPLOSIVE_PRODUCTS: KeywordSet = KeywordSet::new(
    "productos_explosivos",
    &["explosivo", "pirotécnico", "municion", "fuegos", "pólvora"],
);

pub const EXPLOSIVE_ESTABLISHMENTS: KeywordSet =
    KeywordSet::new("establecimientos_explosivos", &["explosivo", "pirotécnico"]);

pub const VERY_HIGH_HAZARD: KeywordSet = KeywordSet::new("peligrosidad_muy_alta", &["muy alto"]);

pub const MANUAL_PROCESS: KeywordSet = KeywordSet::new("proceso_manual", &["manual"]);
pub const MANUAL_TOOLING: KeywordSet = KeywordSet::new("maquinaria_manual", &["herramienta"]);
pub const ARTISANAL_ESTABLISHMENT: KeywordSet =
    KeywordSet::new("establecimiento_artesanal", &["artesanal"]);
pub const ARTISANAL_PRODUCT: KeywordSet = KeywordSet::new("producto_artesanal", &["artesanía"]);

pub const PRODUCTION_SCALE: MappingTable = MappingTable::folded(
    "escala_produccion",
    &[
        ("unitaria/por pedido", 1.0),
        ("pequeña serie", 2.0),
        ("mediana serie", 3.0),
        ("gran serie", 4.0),
        ("producción continua", 5.0),
    ],
    2.0,
);

pub const PRODUCTION_AREA: MappingTable = MappingTable::exact(
    "area_produccion_m2",
    &[
        ("<50", 30.0),
        ("50-200", 125.0),
        ("200-1000", 600.0),
        ("1000-5000", 3000.0),
        (">5000", 7500.0),
    ],
    125.0,
);

pub const WORKFORCE: MappingTable = MappingTable::exact(
    "numero_trabajadores",
    &[
        ("1-5", 3.0),
        ("6-10", 8.0),
        ("11-50", 30.0),
        ("51-200", 125.0),
        (">200", 300.0),
    ],
    8.0,
);

pub const INPUT_HAZARD: MappingTable = MappingTable::folded(
    "nivel_peligrosidad_insumos",
    &[
        ("bajo (no inflamables)", 1.0),
        ("medio (inflamables clase iiia)", 2.0),
        ("alto (inflamables clase i-ii)", 3.0),
        ("muy alto (explosivos/reactivos)", 4.0),
    ],
    1.0,
);

/// Area buckets of a small workshop.
pub const SMALL_AREA_BUCKETS: &[&str] = &["<50", "50-200"];
/// Workforce buckets of a small workshop.
pub const SMALL_WORKFORCE_BUCKETS: &[&str] = &["1-5", "6-10"];
