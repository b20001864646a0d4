use brotscope_core::{
    escape_time, Axis, Complex, Explorer, InputEvent, IterationResult, ViewBounds, Viewport,
    ZoomDirection, ZoomSettings,
};

/// Iterate every pixel of the viewport's tables into a flat row-major Vec.
fn render_grid(viewport: &Viewport) -> Vec<IterationResult> {
    let tables = viewport.tables();
    let cap = viewport.iteration_cap();
    let mut results = Vec::with_capacity(tables.real().len() * tables.imag().len());
    for &b in tables.imag() {
        for &a in tables.real() {
            results.push(escape_time(Complex::new(a, b), cap));
        }
    }
    results
}

#[test]
fn headless_default_view_has_all_three_classes() {
    let viewport = Viewport::with_default_bounds(100, 100).unwrap();
    let results = render_grid(&viewport);

    assert_eq!(results.len(), 100 * 100);
    let interior = results
        .iter()
        .filter(|r| matches!(r, IterationResult::Interior))
        .count();
    let bounded = results
        .iter()
        .filter(|r| matches!(r, IterationResult::Bounded))
        .count();
    let escaped = results
        .iter()
        .filter(|r| matches!(r, IterationResult::Escaped { .. }))
        .count();

    assert!(interior > 0, "cardioid and bulb should short-circuit");
    assert!(bounded > 0, "some points hit the cap by iterating");
    assert!(escaped > interior, "most of the default view escapes");
    assert_eq!(interior + bounded + escaped, 10_000);
}

#[test]
fn headless_render_is_deterministic() {
    let viewport = Viewport::with_default_bounds(80, 60).unwrap();
    assert_eq!(render_grid(&viewport), render_grid(&viewport));
}

#[test]
fn scenario_default_corner_mapping() {
    let vp = Viewport::with_default_bounds(800, 600).unwrap();
    assert_eq!(vp.pixel_to_plane(0.0, Axis::Real), -2.5);
    assert_eq!(vp.pixel_to_plane(0.0, Axis::Imag), -1.75);

    let re = vp.pixel_to_plane(799.0, Axis::Real);
    let im = vp.pixel_to_plane(599.0, Axis::Imag);
    assert!((1.0 - re) <= vp.bounds().width() / 800.0 + 1e-12);
    assert!((1.75 - im) <= vp.bounds().height() / 600.0 + 1e-12);
}

#[test]
fn scenario_scroll_in_once() {
    let mut explorer = Explorer::new(
        Viewport::with_default_bounds(800, 600).unwrap(),
        ZoomSettings::default(),
    );
    explorer
        .handle(InputEvent::Scroll(ZoomDirection::In))
        .unwrap();
    let b = explorer.viewport().bounds();
    assert!((b.width() - 3.15).abs() < 1e-12);
    assert!((b.center().re - (-0.75)).abs() < 1e-12);
}

#[test]
fn scenario_iteration_cap_by_zoom_depth() {
    let vp = Viewport::with_default_bounds(800, 600).unwrap();
    assert_eq!(vp.iteration_cap(), 50);

    let deep = Viewport::new(
        800,
        600,
        ViewBounds::new(-0.7675, -0.7325, -0.0175, 0.0175).unwrap(),
    )
    .unwrap();
    assert_eq!(deep.iteration_cap(), 216);
}

#[test]
fn full_gesture_sequence_keeps_bounds_ordered() {
    let mut explorer = Explorer::new(
        Viewport::with_default_bounds(640, 480).unwrap(),
        ZoomSettings::default(),
    );
    let events = [
        InputEvent::PointerDown { x: 500.0, y: 400.0 },
        InputEvent::PointerMove { x: 320.0, y: 300.0 },
        InputEvent::PointerUp { x: 200.0, y: 100.0 },
        InputEvent::Scroll(ZoomDirection::Out),
        InputEvent::Resize {
            width: 1024,
            height: 256,
        },
        InputEvent::Scroll(ZoomDirection::In),
        InputEvent::PointerDown { x: 10.0, y: 10.0 },
        InputEvent::PointerUp { x: 1000.0, y: 20.0 },
    ];
    for event in events {
        explorer.handle(event).unwrap();
        let b = explorer.viewport().bounds();
        assert!(b.x_min < b.x_max, "{event:?} inverted x");
        assert!(b.y_min < b.y_max, "{event:?} inverted y");
        let vp = explorer.viewport();
        assert_eq!(vp.tables().width(), vp.width());
        assert_eq!(vp.tables().height(), vp.height());
    }
}
