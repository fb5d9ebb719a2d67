use expense_charts::ChartError;
use expense_charts::core::{ScreenPoint, Viewport};
use expense_charts::render::{
    ArcPrimitive, CirclePrimitive, Color, DrawCommand, LinePrimitive, NullRenderer, PathPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const INK: Color = Color::rgb(0.0, 0.0, 0.0);

fn sample_frame() -> RenderFrame {
    let mut frame = RenderFrame::new(Viewport::new(320, 240));
    frame.push_arc(ArcPrimitive {
        center_x: 160.0,
        center_y: 120.0,
        radius: 80.0,
        start_angle_deg: -90.0,
        sweep_angle_deg: 120.0,
        stroke_width: 30.0,
        color: INK,
    });
    frame.push_line(LinePrimitive::new(0.0, 0.0, 10.0, 10.0, 2.0, INK));
    frame.push_path(PathPrimitive::stroked(
        vec![ScreenPoint::new(0.0, 0.0), ScreenPoint::new(5.0, 5.0)],
        INK,
        3.0,
    ));
    frame.push_circle(CirclePrimitive::new(5.0, 5.0, 4.0, INK));
    frame.push_text(TextPrimitive::new("42%", 10.0, 20.0, 12.0, INK, TextHAlign::Left));
    frame
}

#[test]
fn null_renderer_counts_each_command_kind() {
    let mut renderer = NullRenderer::default();
    renderer.render(&sample_frame()).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_arc_count, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn frame_preserves_paint_order() {
    let frame = sample_frame();
    assert!(matches!(frame.commands[0], DrawCommand::Arc(_)));
    assert!(matches!(frame.commands[4], DrawCommand::Text(_)));
}

#[test]
fn frame_with_invalid_viewport_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(0, 240));
    let err = frame.validate().expect_err("zero width must fail");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 240
        }
    ));
}

#[test]
fn null_renderer_rejects_non_finite_geometry() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_command(DrawCommand::Line(
        LinePrimitive::new(f64::NAN, 0.0, 1.0, 1.0, 1.0, INK),
    ));
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn empty_paths_are_rejected() {
    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_command(DrawCommand::Path(PathPrimitive::filled(Vec::new(), INK)));
    assert!(frame.validate().is_err());
}

#[test]
fn frame_json_keeps_commands() {
    let frame = sample_frame();
    let json = serde_json::to_string(&frame).expect("serialize");
    let parsed: RenderFrame = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, frame);
}
