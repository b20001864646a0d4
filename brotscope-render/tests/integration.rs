use brotscope_core::{
    Explorer, InputEvent, ShaderParams, ViewBounds, Viewport, ZoomDirection, ZoomSettings,
};
use brotscope_render::{shade_frame, FrameRenderer, Palette, PixelBuffer, Renderer};

#[test]
fn end_to_end_default_view() {
    let viewport = Viewport::with_default_bounds(200, 150).unwrap();
    let renderer = Renderer::default();
    let buffer = renderer.compute(viewport.tables(), viewport.iteration_cap());

    assert_eq!(buffer.width(), 200);
    assert_eq!(buffer.height(), 150);
    let packed = buffer.to_packed();
    let background = renderer.palette().background;
    let has_background = packed.chunks_exact(4).any(|px| px[..3] == background[..3]);
    let has_other = packed.chunks_exact(4).any(|px| px[..3] != background[..3]);
    assert!(has_background, "interior should render as background");
    assert!(has_other, "exterior should render brighter");
}

#[test]
fn render_determinism() {
    let viewport = Viewport::with_default_bounds(128, 96).unwrap();
    let renderer = Renderer::default();
    let a = renderer.compute(viewport.tables(), viewport.iteration_cap());
    let b = renderer.compute(viewport.tables(), viewport.iteration_cap());
    assert_eq!(a.as_bytes(), b.as_bytes(), "renders must be deterministic");
}

#[test]
fn cpu_and_shader_paths_agree() {
    let palette = Palette::default();
    let renderer = Renderer::new(palette, 16).unwrap();

    // Bounds exactly representable in f32, so the uniform block loses nothing.
    for bounds in [
        ViewBounds::DEFAULT,
        ViewBounds::new(-0.875, -0.625, 0.0, 0.25).unwrap(),
    ] {
        let viewport = Viewport::new(160, 120, bounds).unwrap();
        let cpu = renderer.compute(viewport.tables(), viewport.iteration_cap());
        let params = ShaderParams::from_viewport(&viewport);
        let gpu_reference = shade_frame(&params, 160, 120, &palette);
        assert_eq!(cpu.as_bytes(), gpu_reference.as_bytes(), "{bounds:?}");
    }
}

#[test]
fn partitioning_is_invisible() {
    let viewport = Viewport::new(
        333,
        101,
        ViewBounds::new(-1.80, -1.70, -0.05, 0.05).unwrap(),
    )
    .unwrap();
    let reference = Renderer::new(Palette::default(), 333)
        .unwrap()
        .compute(viewport.tables(), viewport.iteration_cap());
    for tile_columns in [1, 2, 7, 16, 100, 332] {
        let buffer = Renderer::new(Palette::default(), tile_columns)
            .unwrap()
            .compute(viewport.tables(), viewport.iteration_cap());
        assert_eq!(reference.as_bytes(), buffer.as_bytes());
    }
}

#[test]
fn strided_buffer_matches_packed() {
    let viewport = Viewport::with_default_bounds(90, 40).unwrap();
    let renderer = Renderer::default();
    let packed = renderer.compute(viewport.tables(), viewport.iteration_cap());
    let mut strided = PixelBuffer::with_stride(90, 40, 90 * 4 + 64).unwrap();
    renderer
        .render(viewport.tables(), viewport.iteration_cap(), &mut strided)
        .unwrap();
    assert_eq!(packed.to_packed(), strided.to_packed());
}

#[test]
fn frame_loop_recomputes_only_on_change() {
    let mut explorer = Explorer::new(
        Viewport::with_default_bounds(120, 90).unwrap(),
        ZoomSettings::default(),
    );
    let mut frame = FrameRenderer::new(Renderer::default());

    assert!(frame.refresh(explorer.viewport()).unwrap().is_some());

    // Pointer motion alone leaves the view untouched.
    explorer
        .handle(InputEvent::PointerMove { x: 5.0, y: 5.0 })
        .unwrap();
    assert!(frame.refresh(explorer.viewport()).unwrap().is_none());

    explorer
        .handle(InputEvent::Scroll(ZoomDirection::In))
        .unwrap();
    let stats = frame.refresh(explorer.viewport()).unwrap().unwrap();
    assert_eq!(stats.pixels.total(), 120 * 90);

    explorer
        .handle(InputEvent::Resize {
            width: 60,
            height: 45,
        })
        .unwrap();
    frame.refresh(explorer.viewport()).unwrap();
    assert_eq!(frame.buffer().width(), 60);
}
