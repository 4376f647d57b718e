//! Shared fixtures for integration tests.

/// A small but representative catalog document: four services in declared
/// priority order, prices covering literal labels, derived amounts, an
/// unclassifiable entry and mixed option styles.
pub fn sample_document() -> &'static str {
    r#"{
      "meta": { "last_updated": "2024-02-01" },
      "note": "Tarifas vigentes  para  cursos de Música y Danza.",
      "services": [
        { "id": "sede",    "title": "Clases en Sede",  "desc": "Cursos de Música en la sede", "match": "sede" },
        { "id": "hogar",   "title": "Clases en Hogar", "desc": "Clases a domicilio",    "match": "hogar" },
        { "id": "virtual", "title": "Clases Virtuales","desc": "Por videollamada",      "match": "virtual" }
      ],
      "prices": [
        { "service_label": "Sede Paquete 8",    "price_label": "$ 320.000" },
        { "service_label": "Sede Individual",   "price_label": "$ 50.000" },
        { "service_label": "Sede Paquete 4",    "price_label": "$ 180.000" },
        { "service_label": "Hogar Individual",  "price_cop": 50000 },
        { "service_label": "Virtual Mensual",   "price_label": "$ 90.000" },
        { "service_label": "Clases Sin Clasificar X9", "price_label": "$ 5.000" }
      ]
    }"#
}
