use narwhal_metrics::{Error, FontId, FontTable, MetricsAdapter, TableMetrics};
use std::sync::Arc;

const HOST_TABLE: &str = r#"[
    {
        "family": "Host Serif",
        "style": 0,
        "unitsPerEm": 1000,
        "notdef": { "advance": 600, "ink": { "xMin": 100, "yMin": 0, "xMax": 500, "yMax": 700 } },
        "samples": [
            { "ch": "a", "advance": 500, "ink": { "xMin": 40, "yMin": -10, "xMax": 460, "yMax": 510 } },
            { "ch": " ", "advance": 250 }
        ],
        "runs": [
            { "text": "aa", "size": 7.2, "origin": [0.5, -0.2], "extent": [9.0, 5.5] }
        ]
    }
]"#;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn host() -> TableMetrics {
    TableMetrics::new(Arc::new(FontTable::from_json(HOST_TABLE).unwrap()))
}

#[test]
fn host_table_replaces_the_builtin_faces() {
    let metrics = host();
    let serif = FontId::parse("Host Serif").unwrap();
    assert!(metrics.is_measurable(&serif));
    assert!(!metrics.is_measurable(&FontId::parse("Liberation Sans").unwrap()));
    assert_eq!(metrics.table().measurable_fonts(), &[serif]);
}

#[test]
fn ink_is_unioned_along_the_pen() {
    let metrics = host();
    let serif = FontId::parse("Host Serif").unwrap();
    // 7.2 * 100 / 72 / 1000 = 0.01 per font unit.
    let e = metrics.measure("a a", &serif, 7.2, 1.0).unwrap();
    assert!(close(e.origin.x, 0.4), "{e:?}");
    assert!(close(e.origin.y, -0.1), "{e:?}");
    // Second "a" starts at pen 750: ink runs 40..1210.
    assert!(close(e.extent.width, 11.7), "{e:?}");
    assert!(close(e.extent.height, 5.2), "{e:?}");
    assert!(close(e.right(), 12.1));
    assert!(close(e.top(), 5.1));

    let tight = metrics.measure("a a", &serif, 7.2, 0.5).unwrap();
    assert!(close(tight.extent.width, 7.95), "{tight:?}");
}

#[test]
fn unsampled_characters_use_notdef() {
    let metrics = host();
    let serif = FontId::parse("Host Serif").unwrap();
    let e = metrics.measure("?", &serif, 7.2, 1.0).unwrap();
    assert!(close(e.origin.x, 1.0));
    assert!(close(e.extent.width, 4.0));
    assert!(close(e.extent.height, 7.0));
}

#[test]
fn recorded_runs_override_the_glyph_walk_at_unit_spacing() {
    let metrics = host();
    let serif = FontId::parse("Host Serif").unwrap();
    let e = metrics.measure("aa", &serif, 7.2, 1.0).unwrap();
    assert!(close(e.right(), 9.5) && close(e.top(), 5.3), "{e:?}");

    let doubled = metrics.measure("aa", &serif, 14.4, 1.0).unwrap();
    assert!(close(doubled.right(), 19.0), "{doubled:?}");

    // Second "a" at pen 500: ink runs 40..960.
    let walked = metrics.measure("aa", &serif, 7.2, 1.000001).unwrap();
    assert!((walked.right() - 9.6).abs() < 1e-4, "{walked:?}");
}

#[test]
fn malformed_host_table_is_a_json_error() {
    let err = FontTable::from_json(r#"[{ "family": "Broken" }]"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)), "{err}");
}
