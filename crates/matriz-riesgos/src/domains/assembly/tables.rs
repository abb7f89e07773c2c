use crate::vocabulary::{KeywordSet, MappingTable};

/// Activities the regulation places in 2.4 regardless of size.
pub const HIGH_RISK_USES: KeywordSet = KeywordSet::new(
    "usos_2_4",
    &[
        "discoteca",
        "casino",
        "tragamonedas",
        "teatro",
        "cine",
        "sala_concierto",
        "anfiteatro",
        "auditorio",
        "centro_convenciones",
        "club",
        "estadio",
        "plaza_toro",
        "coliseo",
        "hipodromo",
        "velodromo",
        "autodromo",
        "polideportivo",
        "parque_diversion",
        "zoologico",
        "templo",
        "iglesia",
    ],
);

pub const SCHEDULE: MappingTable = MappingTable::exact(
    "horario_funcionamiento",
    &[("diurno", 1.0), ("nocturno", 2.0), ("mixto", 3.0)],
    1.0,
);

/// Occupant load at or below which a venue is small-scale (2.1).
pub const SMALL_VENUE_OCCUPANTS: i64 = 50;
